//! Data-driven behaviour constants
//!
//! Every knob the simulation reads lives here so tests can build odd worlds
//! without touching the frame step. The defaults reproduce the shipped feel.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Rejected tuning values
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    /// A value is out of range or a range is inverted
    #[error("invalid tuning: {0}")]
    Invalid(&'static str),
    /// JSON override could not be parsed
    #[error("tuning parse error: {0}")]
    Parse(String),
}

/// A `[lo, hi]` pair interpolated by panic (lo at panic 0, hi at panic 1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanicRange {
    pub calm: f32,
    pub panicked: f32,
}

impl PanicRange {
    pub const fn new(calm: f32, panicked: f32) -> Self {
        Self { calm, panicked }
    }

    #[inline]
    pub fn at(&self, panic: f32) -> f32 {
        crate::lerp(self.calm, self.panicked, panic)
    }
}

/// Behaviour tuning table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Panic ===
    /// Threat distance at which target panic reaches 1
    pub panic_near: f32,
    /// Threat distance at which target panic falls to 0
    pub panic_far: f32,
    /// Per-frame easing of panic toward its target
    pub panic_ease: f32,
    /// Jitter target is `panic * jitter_scale`
    pub jitter_scale: f32,
    /// Per-frame easing of jitter toward its target
    pub jitter_ease: f32,

    // === Panic-driven responses ===
    pub time_speed: PanicRange,
    pub wobble: PanicRange,
    pub wobble_freq: PanicRange,
    pub speed_boost: PanicRange,
    /// Dart countdown lower bound (ms)
    pub dart_min_ms: PanicRange,
    /// Dart countdown upper bound (ms)
    pub dart_max_ms: PanicRange,
    pub magnet_radius: PanicRange,

    // === Steering ===
    /// Extra reach of a flee zone beyond its radius
    pub flee_margin: f32,
    pub flee_gain: f32,
    pub dart_gain: f32,
    pub pointer_radius: f32,
    pub pointer_gain: f32,
    /// Velocity multiplier applied after adding acceleration
    pub drag: f32,
    /// Canvas padding for the agent
    pub wall_pad: f32,
    /// Velocity multiplier on wall contact (negative flips direction)
    pub wall_bounce: f32,

    // === Crates ===
    /// Contact distance is `agent.r + size * crate_reach`
    pub crate_reach: f32,
    /// Fraction of overlap resolved by moving the crate
    pub crate_push: f32,
    pub crate_impulse: f32,
    /// Base added to panic when scaling the bump impulse
    pub crate_impulse_bias: f32,
    pub crate_recoil: f32,
    pub crate_friction: f32,
    pub crate_pad: f32,

    // === Coins ===
    /// Pull fraction at the magnet edge
    pub coin_pull_far: f32,
    /// Pull fraction at zero distance
    pub coin_pull_near: f32,
    /// Pickup distance is `agent.r * coin_pickup`
    pub coin_pickup: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            panic_near: 40.0,
            panic_far: 160.0,
            panic_ease: 0.08,
            jitter_scale: 6.0,
            jitter_ease: 0.12,

            time_speed: PanicRange::new(0.012, 0.05),
            wobble: PanicRange::new(7.0, 16.0),
            wobble_freq: PanicRange::new(0.8, 1.6),
            speed_boost: PanicRange::new(1.0, 2.4),
            dart_min_ms: PanicRange::new(700.0, 200.0),
            dart_max_ms: PanicRange::new(1400.0, 420.0),
            magnet_radius: PanicRange::new(28.0, 70.0),

            flee_margin: 90.0,
            flee_gain: 0.9,
            dart_gain: 0.25,
            pointer_radius: 30.0,
            pointer_gain: 0.9,
            drag: 0.92,
            wall_pad: 20.0,
            wall_bounce: -0.8,

            crate_reach: 0.55,
            crate_push: 0.6,
            crate_impulse: 0.8,
            crate_impulse_bias: 0.5,
            crate_recoil: 0.25,
            crate_friction: 0.88,
            crate_pad: 20.0,

            coin_pull_far: 0.02,
            coin_pull_near: 0.16,
            coin_pickup: 0.75,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override; missing fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| TuningError::Parse(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Every scalar in the table, ranges flattened
    fn values(&self) -> impl Iterator<Item = f32> {
        let ranges = [
            self.time_speed,
            self.wobble,
            self.wobble_freq,
            self.speed_boost,
            self.dart_min_ms,
            self.dart_max_ms,
            self.magnet_radius,
        ];
        let scalars = [
            self.panic_near,
            self.panic_far,
            self.panic_ease,
            self.jitter_scale,
            self.jitter_ease,
            self.flee_margin,
            self.flee_gain,
            self.dart_gain,
            self.pointer_radius,
            self.pointer_gain,
            self.drag,
            self.wall_pad,
            self.wall_bounce,
            self.crate_reach,
            self.crate_push,
            self.crate_impulse,
            self.crate_impulse_bias,
            self.crate_recoil,
            self.crate_friction,
            self.crate_pad,
            self.coin_pull_far,
            self.coin_pull_near,
            self.coin_pickup,
        ];
        ranges
            .into_iter()
            .flat_map(|r| [r.calm, r.panicked])
            .chain(scalars)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        if !self.values().all(f32::is_finite) {
            return Err(TuningError::Invalid("tuning values must be finite"));
        }
        if self.panic_near < 0.0 || self.panic_far <= self.panic_near {
            return Err(TuningError::Invalid(
                "panic_near must be non-negative and below panic_far",
            ));
        }
        let eases = [self.panic_ease, self.jitter_ease];
        if eases.iter().any(|e| !(*e > 0.0 && *e <= 1.0)) {
            return Err(TuningError::Invalid("ease factors must be in (0, 1]"));
        }
        if self.dart_min_ms.calm >= self.dart_max_ms.calm
            || self.dart_min_ms.panicked >= self.dart_max_ms.panicked
        {
            return Err(TuningError::Invalid(
                "dart interval lower bound must stay below upper bound",
            ));
        }
        if self.dart_min_ms.calm <= 0.0 || self.dart_min_ms.panicked <= 0.0 {
            return Err(TuningError::Invalid("dart intervals must be positive"));
        }
        if self.magnet_radius.calm < 0.0
            || self.magnet_radius.panicked < 0.0
            || self.pointer_radius < 0.0
            || self.flee_margin < 0.0
        {
            return Err(TuningError::Invalid("radii must be non-negative"));
        }
        let max_pad = CANVAS_WIDTH.min(CANVAS_HEIGHT) / 2.0;
        if [self.wall_pad, self.crate_pad]
            .iter()
            .any(|pad| !(0.0..max_pad).contains(pad))
        {
            return Err(TuningError::Invalid(
                "padding must be non-negative and under half the canvas",
            ));
        }
        if !(0.0..=1.0).contains(&self.drag) || !(0.0..=1.0).contains(&self.crate_friction) {
            return Err(TuningError::Invalid("drag and friction must be in [0, 1]"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn test_panic_range_interpolates() {
        let t = Tuning::default();
        assert!((t.speed_boost.at(0.0) - 1.0).abs() < 1e-6);
        assert!((t.speed_boost.at(1.0) - 2.4).abs() < 1e-6);
        assert!((t.dart_max_ms.at(1.0) - 420.0).abs() < 1e-3);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "drag": 0.5, "panic_far": 200.0 }"#).unwrap();
        assert_eq!(t.drag, 0.5);
        assert_eq!(t.panic_far, 200.0);
        assert_eq!(t.panic_near, 40.0);
    }

    #[test]
    fn test_rejects_inverted_panic_range() {
        let t = Tuning {
            panic_near: 200.0,
            ..Default::default()
        };
        assert!(matches!(t.validate(), Err(TuningError::Invalid(_))));
    }

    #[test]
    fn test_rejects_negative_radius() {
        let t = Tuning {
            pointer_radius: -1.0,
            ..Default::default()
        };
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_rejects_pad_wider_than_canvas() {
        for t in [
            Tuning {
                crate_pad: 200.0,
                ..Default::default()
            },
            Tuning {
                wall_pad: 160.0,
                ..Default::default()
            },
        ] {
            assert!(matches!(t.validate(), Err(TuningError::Invalid(_))));
        }
        let ok = Tuning {
            crate_pad: 159.0,
            ..Default::default()
        };
        assert_eq!(ok.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let nan_far = Tuning {
            panic_far: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(nan_far.validate(), Err(TuningError::Invalid(_))));

        let inf_range = Tuning {
            dart_max_ms: PanicRange::new(f32::INFINITY, 420.0),
            ..Default::default()
        };
        assert!(inf_range.validate().is_err());

        let nan_pickup = Tuning {
            coin_pickup: f32::NAN,
            ..Default::default()
        };
        assert!(nan_pickup.validate().is_err());
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Parse(_))
        ));
    }
}
