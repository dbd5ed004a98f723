//! Per-frame simulation step
//!
//! Order matters and mirrors how the blob "thinks": feel the threat, pick how
//! jumpy to be, sum the pushes, move, then shove crates and grab coins.

use glam::Vec2;
use rand::Rng;

use super::collision::{bump_crate, integrate_crate, steal_coin};
use super::panic::{PanicResponse, ease, target_panic};
use super::state::{FrameInput, SimState};
use super::steering::{bounce_in_bounds, dart_force, flee_force, integrate, pointer_flee, update_dart};
use crate::consts::MAX_FRAME_MS;

/// What happened during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameReport {
    /// Panic the agent is easing toward
    pub target_panic: f32,
    pub coins_collected: u32,
    pub crates_bumped: u32,
    /// A new dart heading was picked
    pub darted: bool,
    pub hit_wall: bool,
}

/// Advance the simulation by one frame
///
/// `rng` drives dart timing/heading and the camera shake sample; pass a seeded
/// generator for reproducible runs.
pub fn tick<R: Rng>(state: &mut SimState, input: &FrameInput, rng: &mut R) -> FrameReport {
    let tuning = &state.tuning;
    let agent = &mut state.agent;
    let mut report = FrameReport::default();

    state.frame += 1;
    let dt_ms = input.dt_ms.clamp(0.0, MAX_FRAME_MS);

    // Threat proximity drives panic
    let d_threat = agent.pos.distance(state.threat.pos);
    report.target_panic = target_panic(d_threat, tuning);
    agent.panic = ease(agent.panic, report.target_panic, tuning.panic_ease).clamp(0.0, 1.0);

    let response = PanicResponse::from_panic(agent.panic, tuning);
    agent.t_speed = response.time_speed;
    agent.wobble = response.wobble;
    agent.wobble_freq = response.wobble_freq;

    // Camera shake, sampled before steering so the pointer can be unshaken
    agent.jitter = ease(agent.jitter, response.jitter_target, tuning.jitter_ease).max(0.0);
    let j = agent.jitter;
    let sample = Vec2::new(rng.random_range(-j..=j), rng.random_range(-j..=j));
    state.shake = if input.shake_enabled { sample } else { Vec2::ZERO };

    agent.t += agent.t_speed;

    let mut accel = flee_force(state.threat.pos, state.threat.radius, tuning.flee_margin, agent.pos)
        * agent.panic
        * tuning.flee_gain;

    report.darted = update_dart(agent, dt_ms, &response, rng);
    if report.darted {
        log::trace!(
            "Dart: heading {:.2} rad, next in {:.0} ms",
            agent.heading,
            agent.dart_timer
        );
    }
    accel += dart_force(agent.heading, &response, tuning);
    accel += pointer_flee(&input.pointer, state.shake, agent.pos, tuning);

    integrate(agent, accel, tuning.drag);
    report.hit_wall = bounce_in_bounds(agent, &state.bounds, tuning.wall_pad, tuning.wall_bounce);

    for obj in &mut state.crates {
        if bump_crate(agent, obj, &response, tuning) {
            report.crates_bumped += 1;
        }
        integrate_crate(obj, &state.bounds, tuning);
    }

    for coin in &mut state.coins {
        if steal_coin(agent, coin, &response, tuning) {
            report.coins_collected += 1;
        }
    }

    if report.coins_collected > 0 {
        state.score += report.coins_collected;
        log::debug!(
            "Stole {} coin(s), total {} ({} left)",
            report.coins_collected,
            state.score,
            state.coins.iter().filter(|c| c.is_alive()).count()
        );
    }

    report
}
