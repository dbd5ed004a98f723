//! Steering forces and agent integration
//!
//! The blob's acceleration each frame is the sum of three pushes: away from
//! the threat, along its current dart heading, and away from a held pointer.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use super::panic::PanicResponse;
use super::state::{Agent, Bounds, PointerInput};
use crate::consts::MIN_DISTANCE;
use crate::tuning::Tuning;

/// Unit vector pointing from `center` through `pos`, or zero when `pos` is
/// further than `radius + margin` from `center`
pub fn flee_force(center: Vec2, radius: f32, margin: f32, pos: Vec2) -> Vec2 {
    let delta = pos - center;
    let d = delta.length();
    if d > radius + margin {
        return Vec2::ZERO;
    }
    delta / d.max(MIN_DISTANCE)
}

/// Pointer spook force. Zero unless the pointer is held.
///
/// `shake` is the camera offset applied this frame; the pointer is read in
/// unshaken coordinates.
pub fn pointer_flee(pointer: &PointerInput, shake: Vec2, pos: Vec2, tuning: &Tuning) -> Vec2 {
    if !pointer.held {
        return Vec2::ZERO;
    }
    let center = pointer.pos - shake;
    flee_force(center, tuning.pointer_radius, tuning.flee_margin, pos) * tuning.pointer_gain
}

/// Count the dart timer down and pick a new heading when it expires.
///
/// Returns true when a new heading was chosen.
pub fn update_dart<R: Rng>(
    agent: &mut Agent,
    dt_ms: f32,
    response: &PanicResponse,
    rng: &mut R,
) -> bool {
    agent.dart_timer -= dt_ms;
    if agent.dart_timer > 0.0 {
        return false;
    }
    agent.heading = rng.random_range(0.0..TAU);
    agent.dart_timer = rng.random_range(response.dart_min_ms..response.dart_max_ms);
    true
}

/// Constant push along the current dart heading
#[inline]
pub fn dart_force(heading: f32, response: &PanicResponse, tuning: &Tuning) -> Vec2 {
    Vec2::from_angle(heading) * tuning.dart_gain * response.speed_boost
}

/// Apply acceleration with drag, then move
pub fn integrate(agent: &mut Agent, accel: Vec2, drag: f32) {
    agent.vel = (agent.vel + accel) * drag;
    agent.pos += agent.vel;
}

/// Keep the agent inside the padded canvas, bouncing off the walls
///
/// Returns true if any wall was hit.
pub fn bounce_in_bounds(agent: &mut Agent, bounds: &Bounds, pad: f32, bounce: f32) -> bool {
    let mut hit = false;
    if agent.pos.x < pad {
        agent.pos.x = pad;
        agent.vel.x *= bounce;
        hit = true;
    }
    if agent.pos.x > bounds.width - pad {
        agent.pos.x = bounds.width - pad;
        agent.vel.x *= bounce;
        hit = true;
    }
    if agent.pos.y < pad {
        agent.pos.y = pad;
        agent.vel.y *= bounce;
        hit = true;
    }
    if agent.pos.y > bounds.height - pad {
        agent.pos.y = bounds.height - pad;
        agent.vel.y *= bounce;
        hit = true;
    }
    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_flee_outside_influence_is_zero() {
        let f = flee_force(Vec2::ZERO, 45.0, 90.0, Vec2::new(136.0, 0.0));
        assert_eq!(f, Vec2::ZERO);
    }

    #[test]
    fn test_flee_points_away_from_center() {
        let f = flee_force(Vec2::new(100.0, 100.0), 45.0, 90.0, Vec2::new(100.0, 160.0));
        assert!((f - Vec2::new(0.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn test_flee_at_center_is_finite() {
        let f = flee_force(Vec2::splat(50.0), 45.0, 90.0, Vec2::splat(50.0));
        assert!(f.is_finite());
        assert_eq!(f, Vec2::ZERO);
    }

    #[test]
    fn test_pointer_not_held_is_zero() {
        let tuning = Tuning::default();
        let pointer = PointerInput {
            held: false,
            pos: Vec2::new(241.0, 160.0),
        };
        let f = pointer_flee(&pointer, Vec2::ZERO, Vec2::new(240.0, 160.0), &tuning);
        assert_eq!(f, Vec2::ZERO);
    }

    #[test]
    fn test_pointer_held_pushes_away() {
        let tuning = Tuning::default();
        let pointer = PointerInput {
            held: true,
            pos: Vec2::new(260.0, 160.0),
        };
        let f = pointer_flee(&pointer, Vec2::ZERO, Vec2::new(240.0, 160.0), &tuning);
        assert!((f - Vec2::new(-0.9, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_pointer_subtracts_shake() {
        let tuning = Tuning::default();
        // Pointer directly on the agent once the shake is removed
        let pointer = PointerInput {
            held: true,
            pos: Vec2::new(243.0, 158.0),
        };
        let shake = Vec2::new(3.0, -2.0);
        let f = pointer_flee(&pointer, shake, Vec2::new(240.0, 160.0), &tuning);
        assert_eq!(f, Vec2::ZERO);
    }

    #[test]
    fn test_dart_waits_for_timer() {
        let tuning = Tuning::default();
        let response = PanicResponse::from_panic(0.0, &tuning);
        let mut rng = Pcg32::seed_from_u64(1);
        let mut agent = Agent {
            dart_timer: 100.0,
            heading: 1.0,
            ..Default::default()
        };
        assert!(!update_dart(&mut agent, 16.0, &response, &mut rng));
        assert_eq!(agent.heading, 1.0);
        assert!((agent.dart_timer - 84.0).abs() < 1e-4);
    }

    #[test]
    fn test_dart_resets_within_panic_bounds() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(9);
        for panic in [0.0, 0.5, 1.0] {
            let response = PanicResponse::from_panic(panic, &tuning);
            let mut agent = Agent::default();
            assert!(update_dart(&mut agent, 16.0, &response, &mut rng));
            assert!((0.0..TAU).contains(&agent.heading));
            assert!(agent.dart_timer >= response.dart_min_ms);
            assert!(agent.dart_timer < response.dart_max_ms);
        }
    }

    #[test]
    fn test_integrate_applies_drag() {
        let mut agent = Agent {
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::new(1.0, 0.0),
            ..Default::default()
        };
        integrate(&mut agent, Vec2::new(1.0, 0.0), 0.92);
        assert!((agent.vel.x - 1.84).abs() < 1e-5);
        assert!((agent.pos.x - 101.84).abs() < 1e-4);
    }

    #[test]
    fn test_bounce_clamps_and_reverses() {
        let bounds = Bounds::default();
        let mut agent = Agent {
            pos: Vec2::new(5.0, 400.0),
            vel: Vec2::new(-2.0, 3.0),
            ..Default::default()
        };
        assert!(bounce_in_bounds(&mut agent, &bounds, 20.0, -0.8));
        assert_eq!(agent.pos, Vec2::new(20.0, 300.0));
        assert!((agent.vel.x - 1.6).abs() < 1e-6);
        assert!((agent.vel.y + 2.4).abs() < 1e-6);
    }

    #[test]
    fn test_no_bounce_inside() {
        let bounds = Bounds::default();
        let mut agent = Agent::default();
        let before = agent.clone();
        assert!(!bounce_in_bounds(&mut agent, &bounds, 20.0, -0.8));
        assert_eq!(agent, before);
    }
}
