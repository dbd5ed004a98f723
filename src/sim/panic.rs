//! Panic model
//!
//! Threat distance sets a target panic level; the agent's actual panic eases
//! toward it so a sudden jump in distance never snaps the blob's mood.

use crate::lerp;
use crate::map_range;
use crate::tuning::Tuning;

/// Target panic for a given distance to the threat center, in [0, 1]
pub fn target_panic(distance: f32, tuning: &Tuning) -> f32 {
    map_range(distance, tuning.panic_far, tuning.panic_near, 0.0, 1.0).clamp(0.0, 1.0)
}

/// Move `current` a fraction `rate` of the way toward `target`
#[inline]
pub fn ease(current: f32, target: f32, rate: f32) -> f32 {
    lerp(current, target, rate)
}

/// Behaviour derived from the current panic level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanicResponse {
    pub panic: f32,
    pub time_speed: f32,
    pub wobble: f32,
    pub wobble_freq: f32,
    pub speed_boost: f32,
    pub dart_min_ms: f32,
    pub dart_max_ms: f32,
    pub magnet_radius: f32,
    /// Scale of the impulse a bumped crate receives
    pub bump_strength: f32,
    pub jitter_target: f32,
}

impl PanicResponse {
    pub fn from_panic(panic: f32, tuning: &Tuning) -> Self {
        Self {
            panic,
            time_speed: tuning.time_speed.at(panic),
            wobble: tuning.wobble.at(panic),
            wobble_freq: tuning.wobble_freq.at(panic),
            speed_boost: tuning.speed_boost.at(panic),
            dart_min_ms: tuning.dart_min_ms.at(panic),
            dart_max_ms: tuning.dart_max_ms.at(panic),
            magnet_radius: tuning.magnet_radius.at(panic),
            bump_strength: tuning.crate_impulse * (tuning.crate_impulse_bias + panic),
            jitter_target: panic * tuning.jitter_scale,
        }
    }
}
