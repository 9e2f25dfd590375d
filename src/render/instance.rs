//! GPU-ready instance data

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::sim::Level;

/// Per-instance model matrix and tint
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Instance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl Instance {
    pub fn new(model: Mat4, color: [f32; 4]) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color,
        }
    }

    pub fn model(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.model)
    }
}

/// One instance per tile, in storage order. Tiles never move, so the
/// renderer can upload this once.
pub fn tile_instances(level: &Level, box_size: f32) -> Vec<Instance> {
    level
        .tiles
        .iter()
        .map(|tile| {
            Instance::new(
                Mat4::from_translation(tile.world_center(box_size)),
                colors::TILE,
            )
        })
        .collect()
}

/// Raw bytes for a vertex/instance buffer upload
pub fn as_bytes(instances: &[Instance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}

/// Colors for game elements
pub mod colors {
    pub const AVATAR: [f32; 4] = [0.537, 0.812, 0.941, 1.0];
    pub const TILE: [f32; 4] = [0.757, 0.882, 0.757, 1.0];
    pub const PILLAR: [f32; 4] = [0.933, 0.294, 0.169, 1.0];
    pub const BAR: [f32; 4] = [1.0, 0.941, 0.0, 1.0];
    pub const BORDER_ON: [f32; 4] = [0.933, 0.294, 0.169, 1.0];
    pub const BORDER_OFF: [f32; 4] = [0.0, 0.0, 0.0, 0.0];
}
