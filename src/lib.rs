//! Panic Blob - a nervous blob loose on a tiny map
//!
//! Core modules:
//! - `sim`: Per-frame simulation (panic, steering, crate bumps, coin theft)
//! - `renderer`: Triangle-list scene building and the WebGPU pipeline
//! - `tuning`: Data-driven behaviour constants
//! - `settings`: Display preferences
//! - `hud`: Text overlay lines

pub mod hud;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{QualityPreset, Settings};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Logical canvas size in pixels
    pub const CANVAS_WIDTH: f32 = 480.0;
    pub const CANVAS_HEIGHT: f32 = 320.0;

    /// Nominal frame time used by the headless runner (ms)
    pub const FRAME_MS: f32 = 1000.0 / 60.0;
    /// Longest frame we feed the dart timer, so a backgrounded tab doesn't fire a burst of darts
    pub const MAX_FRAME_MS: f32 = 100.0;

    /// Floor applied to distances before normalizing
    pub const MIN_DISTANCE: f32 = 0.001;

    /// Prop counts
    pub const CRATE_COUNT: usize = 6;
    pub const COIN_COUNT: usize = 12;
}

/// Linear interpolation from `a` to `b` by `t` (unclamped)
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Remap `value` from `[in_lo, in_hi]` to `[out_lo, out_hi]` (unclamped)
///
/// Either range may be inverted, e.g. mapping distance `[160, 40]` onto `[0, 1]`.
#[inline]
pub fn map_range(value: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32) -> f32 {
    out_lo + (value - in_lo) / (in_hi - in_lo) * (out_hi - out_lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(7.0, 16.0, 0.0), 7.0);
        assert_eq!(lerp(7.0, 16.0, 1.0), 16.0);
        assert!((lerp(700.0, 200.0, 0.5) - 450.0).abs() < 1e-4);
    }

    #[test]
    fn test_map_range_inverted() {
        // Closer distance maps to higher value
        assert!((map_range(40.0, 160.0, 40.0, 0.0, 1.0) - 1.0).abs() < 1e-6);
        assert!(map_range(160.0, 160.0, 40.0, 0.0, 1.0).abs() < 1e-6);
        assert!((map_range(100.0, 160.0, 40.0, 0.0, 1.0) - 0.5).abs() < 1e-6);
    }
}
