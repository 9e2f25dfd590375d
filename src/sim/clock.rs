//! Frame timing
//!
//! Converts the renderer's millisecond animation clock into seconds and
//! computes the per-life survival timer.

use serde::{Deserialize, Serialize};

/// Timing for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameTime {
    /// Seconds since the animation clock started
    pub t: f64,
    /// Seconds since the previous frame
    pub dt: f32,
}

impl FrameTime {
    /// Build from the animation clock (milliseconds), clamping dt to `max_dt`
    pub fn from_millis(animation_time_ms: f64, animation_delta_ms: f64, max_dt: f32) -> Self {
        let dt = (animation_delta_ms / 1000.0) as f32;
        Self {
            t: animation_time_ms / 1000.0,
            dt: dt.clamp(0.0, max_dt),
        }
    }

    /// Elapsed time truncated to whole seconds
    #[inline]
    pub fn whole_seconds(&self) -> u32 {
        // `as` saturates: negative -> 0
        self.t.floor() as u32
    }
}

/// Seconds survived by the current life.
///
/// `finalized` is the sum of times already recorded for earlier lives, so each
/// life starts from zero while the round baseline stays fixed.
#[inline]
pub fn time_past(time_for_level: u32, whole_seconds: u32, time_offset: u32, finalized: u32) -> u32 {
    (time_for_level + whole_seconds.saturating_sub(time_offset)).saturating_sub(finalized)
}

/// Fixed-rate clock for headless drivers and tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now_ms: f64,
    step_ms: f64,
}

impl FixedClock {
    pub fn new(hz: f64) -> Self {
        Self {
            now_ms: 0.0,
            step_ms: 1000.0 / hz,
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Advance one frame and return its timing
    pub fn advance(&mut self, max_dt: f32) -> FrameTime {
        self.now_ms += self.step_ms;
        FrameTime::from_millis(self.now_ms, self.step_ms, max_dt)
    }
}
