//! Prop collision and response
//!
//! Crates get shoved out of the blob's way; coins get sucked in and eaten.

use super::panic::PanicResponse;
use super::state::{Agent, Bounds, Coin, Crate};
use crate::consts::MIN_DISTANCE;
use crate::map_range;
use crate::tuning::Tuning;

/// Resolve agent/crate overlap
///
/// Moves the crate out along the contact normal, kicks it, and recoils the
/// agent. Contact is strict: a crate sitting exactly at reach is untouched.
/// Returns true when a bump happened.
pub fn bump_crate(
    agent: &mut Agent,
    obj: &mut Crate,
    response: &PanicResponse,
    tuning: &Tuning,
) -> bool {
    let min_dist = agent.radius + obj.size * tuning.crate_reach;
    let delta = obj.pos - agent.pos;
    let d = delta.length();

    if d >= min_dist {
        return false;
    }

    let normal = delta / d.max(MIN_DISTANCE);
    let overlap = min_dist - d;

    obj.pos += normal * overlap * tuning.crate_push;
    obj.vel += normal * response.bump_strength;
    agent.vel -= normal * tuning.crate_recoil;
    true
}

/// Friction, motion and a hard clamp to the padded canvas. No bounce.
pub fn integrate_crate(obj: &mut Crate, bounds: &Bounds, tuning: &Tuning) {
    obj.vel *= tuning.crate_friction;
    obj.pos += obj.vel;
    obj.pos = bounds.clamp_inset(obj.pos, tuning.crate_pad);
}

/// Magnet-pull a coin and eat it when close enough
///
/// Returns true when the coin was collected this call. Dead coins are ignored.
pub fn steal_coin(agent: &Agent, coin: &mut Coin, response: &PanicResponse, tuning: &Tuning) -> bool {
    if !coin.is_alive() {
        return false;
    }

    let magnet_r = response.magnet_radius;
    let delta = agent.pos - coin.pos;
    let d = delta.length();

    if d < magnet_r {
        coin.pos += delta * coin_pull(d, magnet_r, tuning);
    }

    if d < agent.radius * tuning.coin_pickup {
        coin.collect();
        return true;
    }
    false
}

/// Pull fraction a coin at distance `d` would get (zero outside the magnet)
pub fn coin_pull(d: f32, magnet_r: f32, tuning: &Tuning) -> f32 {
    if d >= magnet_r {
        return 0.0;
    }
    map_range(d, magnet_r, 0.0, tuning.coin_pull_far, tuning.coin_pull_near)
}
