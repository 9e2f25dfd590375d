//! Platform tiles and the level layout
//!
//! Tiles sit on an integer grid. The grid's z axis points toward the camera's
//! far side, so world z is the negated grid z.

use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::error::ConfigError;

/// One cube of floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformTile {
    pub grid: IVec3,
}

impl PlatformTile {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self {
            grid: IVec3::new(x, y, z),
        }
    }

    /// Center of the tile in world space
    #[inline]
    pub fn world_center(&self, box_size: f32) -> Vec3 {
        Vec3::new(
            self.grid.x as f32,
            self.grid.y as f32,
            -(self.grid.z as f32),
        ) * box_size
    }

    /// Collision volume
    #[inline]
    pub fn aabb(&self, box_size: f32) -> Aabb {
        Aabb::from_center(self.world_center(box_size), Vec3::splat(box_size * 0.5))
    }
}

/// Static set of tiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub tiles: Vec<PlatformTile>,
}

impl Level {
    pub fn new(tiles: Vec<PlatformTile>) -> Self {
        Self { tiles }
    }

    /// The shipped layout: a 10x10 floor spanning grid x,z in [-1, 8] with a
    /// 4x4 hole at x,z in [2, 5] where the hazard pillar stands.
    pub fn square_with_hole() -> Self {
        let mut tiles = Vec::with_capacity(84);
        for x in -1..=8 {
            for z in -1..=8 {
                let in_hole = (2..=5).contains(&x) && (2..=5).contains(&z);
                if !in_hole {
                    tiles.push(PlatformTile::new(x, 0, z));
                }
            }
        }
        Self { tiles }
    }

    /// Parse a layout from JSON (`{ "tiles": [{ "grid": [x, y, z] }, ...] }`)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let level: Level = serde_json::from_str(json)?;
        if level.tiles.is_empty() {
            return Err(ConfigError::Level("no tiles"));
        }
        Ok(level)
    }

    /// World-space collision volumes in storage order
    pub fn aabbs(&self, box_size: f32) -> impl Iterator<Item = Aabb> + '_ {
        self.tiles.iter().map(move |tile| tile.aabb(box_size))
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::square_with_hole()
    }
}
