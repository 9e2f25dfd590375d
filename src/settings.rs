//! Game tuning and configuration
//!
//! Every gameplay constant can be overridden from a JSON file. Defaults
//! reproduce the shipped level exactly.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// How gravity is applied to vertical thrust
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GravityMode {
    /// Fixed decrement every frame, tuned for `REFERENCE_TICK_RATE`.
    /// Faster displays fall faster.
    #[default]
    PerFrame,
    /// Decrement scaled by `dt * REFERENCE_TICK_RATE`
    Scaled,
}

/// Tunable gameplay parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Avatar ===
    /// Sphere radius
    pub avatar_radius: f32,
    /// Where the avatar appears at round start and after every death
    pub spawn_point: Vec3,
    pub meters_per_frame: f32,
    pub speed_multiplier: f32,
    /// Vertical thrust set by a jump
    pub jump_thrust: f32,

    // === Physics ===
    pub gravity: f32,
    pub gravity_mode: GravityMode,
    /// Frame deltas are clamped to this (seconds)
    pub max_frame_dt: f32,

    // === Level ===
    pub box_size: f32,
    pub fall_floor: f32,
    /// Multiplied by `box_size` to get the landing height threshold
    pub ground_threshold_factor: f32,
    pub starting_lives: u8,

    // === Hazard ===
    pub hazard_pivot: Vec3,
    pub hazard_angular_speed: f32,
    pub hazard_footprint_scale: Vec3,
    pub hazard_bar_scale: Vec3,
    pub hazard_strike_tolerance: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            avatar_radius: AVATAR_RADIUS,
            spawn_point: Vec3::from_array(SPAWN_POINT),
            meters_per_frame: METERS_PER_FRAME,
            speed_multiplier: SPEED_MULTIPLIER,
            jump_thrust: JUMP_THRUST,

            gravity: GRAVITY_PER_FRAME,
            gravity_mode: GravityMode::PerFrame,
            max_frame_dt: MAX_FRAME_DT,

            box_size: BOX_SIZE,
            fall_floor: FALL_FLOOR,
            ground_threshold_factor: GROUND_THRESHOLD_FACTOR,
            starting_lives: STARTING_LIVES,

            hazard_pivot: Vec3::from_array(HAZARD_PIVOT),
            hazard_angular_speed: HAZARD_ANGULAR_SPEED,
            hazard_footprint_scale: Vec3::from_array(HAZARD_FOOTPRINT_SCALE),
            hazard_bar_scale: Vec3::from_array(HAZARD_BAR_SCALE),
            hazard_strike_tolerance: HAZARD_STRIKE_TOLERANCE,
        }
    }
}

impl Settings {
    /// Avatar speed in world units per second of thrust
    #[inline]
    pub fn speed(&self) -> f32 {
        self.meters_per_frame * self.speed_multiplier
    }

    /// Height above which a falling avatar snaps onto a tile
    #[inline]
    pub fn ground_threshold(&self) -> f32 {
        self.ground_threshold_factor * self.box_size
    }

    /// Parse and validate settings from a JSON string.
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.avatar_radius.is_finite() || self.avatar_radius <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "avatar_radius",
                reason: "must be positive",
            });
        }
        if !self.box_size.is_finite() || self.box_size <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "box_size",
                reason: "must be positive",
            });
        }
        if !self.max_frame_dt.is_finite() || self.max_frame_dt <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "max_frame_dt",
                reason: "must be positive",
            });
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::Invalid {
                field: "starting_lives",
                reason: "must be at least 1",
            });
        }
        if usize::from(self.starting_lives) > crate::sim::MAX_LIVES {
            return Err(ConfigError::Invalid {
                field: "starting_lives",
                reason: "exceeds the per-life timer slots",
            });
        }
        if self.spawn_point.y <= self.fall_floor {
            return Err(ConfigError::Invalid {
                field: "spawn_point",
                reason: "must be above fall_floor",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_level_constants() {
        let s = Settings::default();
        assert_eq!(s.speed(), 7.0);
        assert!((s.ground_threshold() - 0.2).abs() < 1e-6);
        assert_eq!(s.spawn_point, Vec3::new(0.0, 7.0, 0.0));
        assert_eq!(s.gravity_mode, GravityMode::PerFrame);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = Settings::from_json(r#"{ "speed_multiplier": 2.0 }"#).unwrap();
        assert_eq!(s.speed(), 14.0);
        assert_eq!(s.avatar_radius, AVATAR_RADIUS);
    }

    #[test]
    fn test_json_round_trip() {
        let mut s = Settings::default();
        s.gravity_mode = GravityMode::Scaled;
        let json = s.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), s);
    }

    #[test]
    fn test_invalid_radius_rejected() {
        let err = Settings::from_json(r#"{ "avatar_radius": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "avatar_radius",
                ..
            }
        ));
    }

    #[test]
    fn test_too_many_lives_rejected() {
        assert!(Settings::from_json(r#"{ "starting_lives": 9 }"#).is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let s = Settings::load_or_default("/nonexistent/orbit-dodge/settings.json");
        assert_eq!(s, Settings::default());
    }
}
