//! Collision detection and response against static tiles
//!
//! The avatar is a sphere and every tile is an axis-aligned box. Response is
//! deliberately simple: the push-out direction comes from the avatar's thrust,
//! not from the contact normal.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::state::AvatarState;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn from_center(center: Vec3, half_extent: Vec3) -> Self {
        Self::new(center - half_extent, center + half_extent)
    }

    /// Point of the box nearest to `p` (p itself when inside)
    #[inline]
    pub fn closest_point(&self, p: Vec3) -> Vec3 {
        p.clamp(self.min, self.max)
    }

    /// Euclidean distance from `p` to the box (0 inside)
    #[inline]
    pub fn distance_to(&self, p: Vec3) -> f32 {
        (self.closest_point(p) - p).length()
    }
}

/// Result of a sphere/box overlap test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Nearest point on the box
    pub point: Vec3,
    /// Penetration depth (radius - distance)
    pub overlap: f32,
}

/// Test a sphere against a box; `Some` only when strictly overlapping
pub fn sphere_aabb_contact(center: Vec3, radius: f32, aabb: &Aabb) -> Option<Contact> {
    let point = aabb.closest_point(center);
    let distance = (point - center).length();
    if distance < radius {
        Some(Contact {
            point,
            overlap: radius - distance,
        })
    } else {
        None
    }
}

/// Push the avatar out of one box.
///
/// Vertical: a falling avatar above `ground_threshold` is lifted by the
/// overlap and its vertical thrust zeroed (landing).
/// Horizontal: each axis with non-zero thrust is pushed back against the
/// thrust by the same overlap.
///
/// Returns the contact if there was one.
pub fn resolve_avatar_aabb(
    avatar: &mut AvatarState,
    aabb: &Aabb,
    ground_threshold: f32,
) -> Option<Contact> {
    let contact = sphere_aabb_contact(avatar.position, avatar.radius, aabb)?;
    let overlap = contact.overlap;

    avatar.airborne = false;

    if avatar.thrust.y < 0.0 && avatar.position.y > ground_threshold {
        avatar.position.y += overlap;
        avatar.thrust.y = 0.0;
    }

    if avatar.thrust.x > 0.0 {
        avatar.position.x -= overlap;
    } else if avatar.thrust.x < 0.0 {
        avatar.position.x += overlap;
    }

    if avatar.thrust.z > 0.0 {
        avatar.position.z -= overlap;
    } else if avatar.thrust.z < 0.0 {
        avatar.position.z += overlap;
    }

    Some(contact)
}

/// Summary of one resolver pass
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResolveReport {
    /// Boxes the avatar overlapped
    pub contacts: u32,
    /// Avatar was airborne before the pass and touched something
    pub landed: bool,
}

/// Resolve the avatar against every box, in order. Each box sees the position
/// left by the previous one.
pub fn resolve_static<I>(avatar: &mut AvatarState, boxes: I, ground_threshold: f32) -> ResolveReport
where
    I: IntoIterator<Item = Aabb>,
{
    let was_airborne = avatar.airborne;
    let mut report = ResolveReport::default();

    for aabb in boxes {
        if resolve_avatar_aabb(avatar, &aabb, ground_threshold).is_some() {
            report.contacts += 1;
        }
    }

    report.landed = was_airborne && report.contacts > 0;
    report
}

/// Check if the avatar dropped off the level
#[inline]
pub fn fell_out(avatar: &AvatarState, fall_floor: f32) -> bool {
    avatar.position.y <= fall_floor
}
