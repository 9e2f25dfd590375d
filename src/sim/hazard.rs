//! Rotating hazard bar
//!
//! The bar spins about a vertical axis through its pivot. For hit-testing, its
//! footprint is a rectangle in the horizontal (x, z) plane plus a height gate
//! on the bar's lower face.

use glam::{Mat4, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::{cross2, horizontal};

/// Quads with less area than this are treated as empty
const DEGENERATE_AREA: f32 = 1e-6;

/// Convex quadrilateral with counter-clockwise winding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    corners: [Vec2; 4],
}

impl Quad {
    /// Build from corners listed in loop order, either winding.
    /// Clockwise input is reversed so the stored winding is always CCW.
    pub fn new(corners: [Vec2; 4]) -> Self {
        let mut quad = Self { corners };
        if quad.signed_area() < 0.0 {
            quad.corners.reverse();
        }
        debug_assert!(quad.signed_area() >= 0.0);
        quad
    }

    pub fn corners(&self) -> &[Vec2; 4] {
        &self.corners
    }

    /// Shoelace area; positive for CCW
    pub fn signed_area(&self) -> f32 {
        let c = &self.corners;
        (0..4).map(|i| cross2(c[i], c[(i + 1) % 4])).sum::<f32>() * 0.5
    }

    pub fn is_degenerate(&self) -> bool {
        self.signed_area().abs() < DEGENERATE_AREA
    }

    /// Side of each edge `p` lies on: cross(v[i+1] - v[i], p - v[i])
    pub fn edge_sides(&self, p: Vec2) -> [f32; 4] {
        let c = &self.corners;
        std::array::from_fn(|i| {
            let a = c[i];
            let b = c[(i + 1) % 4];
            cross2(b - a, p - a)
        })
    }

    /// Strict containment: all edge sides share a sign. Points exactly on an
    /// edge may go either way. Degenerate quads contain nothing.
    pub fn contains(&self, p: Vec2) -> bool {
        if self.is_degenerate() {
            return false;
        }
        let sides = self.edge_sides(p);
        sides.iter().all(|&d| d > 0.0) || sides.iter().all(|&d| d < 0.0)
    }
}

/// The hazard's hit volume for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardFootprint {
    /// Horizontal rectangle (x, z)
    pub quad: Quad,
    /// Height of the footprint box's lower face
    pub lower_face: f32,
}

/// Static description of the rotating bar; its pose is a function of time only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardBar {
    pub pivot: Vec3,
    /// Radians per second
    pub angular_speed: f32,
    pub footprint_scale: Vec3,
    pub bar_scale: Vec3,
    /// How far above the lower face the avatar can be and still be struck
    pub strike_tolerance: f32,
    /// Edge length of the local unit cube the scales apply to
    pub box_size: f32,
}

impl HazardBar {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            pivot: settings.hazard_pivot,
            angular_speed: settings.hazard_angular_speed,
            footprint_scale: settings.hazard_footprint_scale,
            bar_scale: settings.hazard_bar_scale,
            strike_tolerance: settings.hazard_strike_tolerance,
            box_size: settings.box_size,
        }
    }

    /// Rotation about +y at time `t` (seconds)
    #[inline]
    pub fn angle(&self, t: f64) -> f32 {
        (t * f64::from(self.angular_speed)) as f32
    }

    fn transform(&self, t: f64, scale: Vec3) -> Mat4 {
        Mat4::from_scale_rotation_translation(scale, Quat::from_rotation_y(self.angle(t)), self.pivot)
    }

    /// Transform of the collision footprint box
    pub fn footprint_transform(&self, t: f64) -> Mat4 {
        self.transform(t, self.footprint_scale)
    }

    /// Transform of the drawn bar
    pub fn bar_transform(&self, t: f64) -> Mat4 {
        self.transform(t, self.bar_scale)
    }

    /// Footprint at time `t`. Local corners of the bottom face are listed CCW
    /// in (x, z); rotation about y keeps that winding and `Quad::new` enforces it.
    pub fn footprint(&self, t: f64) -> HazardFootprint {
        let h = self.box_size * 0.5;
        let local = [
            Vec3::new(-h, -h, -h),
            Vec3::new(h, -h, -h),
            Vec3::new(h, -h, h),
            Vec3::new(-h, -h, h),
        ];
        let m = self.footprint_transform(t);
        let world = local.map(|c| m.transform_point3(c));
        HazardFootprint {
            quad: Quad::new(world.map(horizontal)),
            lower_face: world[0].y,
        }
    }

    /// Whether an avatar at `position` is hit by the bar at time `t`
    pub fn strikes(&self, t: f64, position: Vec3) -> bool {
        let footprint = self.footprint(t);
        footprint.quad.contains(horizontal(position))
            && position.y <= footprint.lower_face + self.strike_tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_2;

    fn unit_square() -> Quad {
        Quad::new([
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ])
    }

    fn bar() -> HazardBar {
        HazardBar::from_settings(&Settings::default())
    }

    #[test]
    fn test_unit_square_inside_outside() {
        let q = unit_square();
        assert!(q.contains(Vec2::new(0.5, 0.5)));
        assert!(!q.contains(Vec2::new(2.0, 2.0)));
        assert!(!q.contains(Vec2::new(-0.1, 0.5)));
    }

    #[test]
    fn test_clockwise_input_normalized() {
        let cw = Quad::new([
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 0.0),
        ]);
        assert!(cw.signed_area() > 0.0);
        assert!(cw.contains(Vec2::new(0.5, 0.5)));
        assert!(cw.edge_sides(Vec2::new(0.5, 0.5)).iter().all(|&d| d > 0.0));
    }

    #[test]
    fn test_degenerate_contains_nothing() {
        let flat = Quad::new([Vec2::ZERO, Vec2::X, Vec2::X * 2.0, Vec2::X * 3.0]);
        assert!(flat.is_degenerate());
        assert!(!flat.contains(Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn test_footprint_at_rest() {
        let fp = bar().footprint(0.0);
        // x in [6.6, 7.4], z in [-22, 8]
        assert!((fp.lower_face - 1.1).abs() < 1e-5);
        assert!(fp.quad.contains(Vec2::new(7.0, -7.0)));
        assert!(fp.quad.contains(Vec2::new(7.2, 5.0)));
        assert!(!fp.quad.contains(Vec2::new(8.0, -7.0)));
        assert!(!fp.quad.contains(Vec2::new(7.0, 9.0)));
    }

    #[test]
    fn test_footprint_rotates() {
        let b = bar();
        // Quarter turn: bar now lies along x
        let t = f64::from(FRAC_PI_2 / b.angular_speed);
        let fp = b.footprint(t);
        assert!(fp.quad.contains(Vec2::new(15.0, -7.0)));
        assert!(!fp.quad.contains(Vec2::new(7.0, 0.0)));
    }

    #[test]
    fn test_strike_height_gate() {
        let b = bar();
        assert!(b.strikes(0.0, Vec3::new(7.0, 1.5, -7.0)));
        assert!(b.strikes(0.0, Vec3::new(7.0, 1.55, 0.0)));
        assert!(!b.strikes(0.0, Vec3::new(7.0, 1.7, -7.0)));
        assert!(!b.strikes(0.0, Vec3::new(0.0, 1.5, 0.0)));
    }

    #[test]
    fn test_bar_transform_scales() {
        let m = bar().bar_transform(0.0);
        let tip = m.transform_point3(Vec3::new(0.0, 0.0, 1.0));
        assert!((tip - Vec3::new(7.0, 1.5, 23.0)).length() < 1e-4);
    }

    proptest! {
        /// Winding stays CCW for every rotation angle
        #[test]
        fn prop_footprint_always_ccw(t in 0.0f64..1000.0) {
            prop_assert!(bar().footprint(t).quad.signed_area() > 0.0);
        }

        /// The pivot is always under the bar
        #[test]
        fn prop_pivot_inside(t in 0.0f64..1000.0) {
            let b = bar();
            prop_assert!(b.footprint(t).quad.contains(horizontal(b.pivot)));
        }
    }
}
