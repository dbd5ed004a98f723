//! Scene building
//!
//! Turns a `SimState` into one triangle list in canvas pixels, back to front.
//! Reads state only; the camera shake was already sampled by the frame step.

use glam::Vec2;
use std::f32::consts::TAU;

use super::noise::Noise;
use super::shapes;
use super::vertex::{Vertex, colors, rgba};
use crate::settings::Settings;
use crate::sim::{Agent, SimState};
use crate::{lerp, map_range};

/// Floor grid spacing (pixels)
const GRID_STEP: f32 = 24.0;
/// Threat ring spacing and pulse reach (pixels)
const RING_SPACING: f32 = 22.0;
const RING_PULSE: f32 = 30.0;
const RING_COUNT: u32 = 3;
/// Vignette strip and corner sizes (pixels)
const VIGNETTE_EDGE: f32 = 18.0;
const VIGNETTE_CORNER: f32 = 60.0;
/// Tremor amplitude at full panic (pixels)
const TREMOR: f32 = 8.0;
/// Eye offset from blob center (pixels)
const EYE_OFFSET: f32 = 8.0;

/// Build the full frame
pub fn build_scene<N: Noise>(state: &SimState, noise: &N, settings: &Settings) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(8192);
    let shake = if settings.effective_screen_shake() {
        state.shake
    } else {
        Vec2::ZERO
    };

    let (w, h) = (state.bounds.width, state.bounds.height);
    vertices.extend(shapes::rect(Vec2::ZERO, Vec2::new(w, h), colors::BACKGROUND));

    // Everything in the world shakes; the vignette below does not
    let world_start = vertices.len();
    floor(&mut vertices, state, settings);
    props(&mut vertices, state, settings);
    blob(&mut vertices, &state.agent, noise, settings);
    if shake != Vec2::ZERO {
        for v in &mut vertices[world_start..] {
            v.position[0] += shake.x;
            v.position[1] += shake.y;
        }
    }

    if settings.vignette {
        vignette(&mut vertices, w, h, state.agent.panic);
    }

    vertices
}

fn floor(out: &mut Vec<Vertex>, state: &SimState, settings: &Settings) {
    let (w, h) = (state.bounds.width, state.bounds.height);

    let mut x = 0.0;
    while x <= w {
        out.extend(shapes::line(Vec2::new(x, 0.0), Vec2::new(x, h), 1.0, colors::GRID));
        x += GRID_STEP;
    }
    let mut y = 0.0;
    while y <= h {
        out.extend(shapes::line(Vec2::new(0.0, y), Vec2::new(w, y), 1.0, colors::GRID));
        y += GRID_STEP;
    }

    let panic = state.agent.panic;
    if panic <= 0.0 {
        return;
    }
    let pulse = if settings.reduced_motion {
        0.5 * panic
    } else {
        ((state.frame as f32 * 0.1).sin() * 0.5 + 0.5) * panic
    };
    let color = rgba(255.0, 80.0, 80.0, 90.0 * panic);
    let segments = settings.quality.ring_segments();
    for i in 0..RING_COUNT {
        let rr = state.threat.radius + i as f32 * RING_SPACING + pulse * RING_PULSE;
        out.extend(shapes::ring(state.threat.pos, rr - 0.5, rr + 0.5, color, segments));
    }
}

fn props(out: &mut Vec<Vertex>, state: &SimState, settings: &Settings) {
    let corner_segments = settings.quality.corner_segments();
    for c in &state.crates {
        out.extend(shapes::rounded_rect(
            c.pos,
            Vec2::splat(c.size),
            6.0,
            colors::CRATE,
            corner_segments,
        ));
        out.extend(shapes::rounded_rect(
            c.pos,
            Vec2::splat(c.size - 10.0),
            4.0,
            colors::CRATE_INSET,
            corner_segments,
        ));
    }

    let segments = settings.quality.circle_segments();
    for coin in state.coins.iter().filter(|c| c.is_alive()) {
        out.extend(shapes::circle(coin.pos, coin.radius, colors::COIN, segments));
        out.extend(shapes::circle(
            coin.pos + Vec2::new(-2.0, -3.0),
            coin.radius * 0.55,
            colors::COIN_SHINE,
            segments,
        ));
    }
}

/// Wobbly outline of the blob, one point per outline vertex
pub fn blob_outline<N: Noise>(agent: &Agent, noise: &N) -> Vec<Vec2> {
    let n = agent.points.max(3);
    (0..n)
        .map(|i| {
            let a = (i as f32 / n as f32) * TAU;
            let dir = Vec2::from_angle(a);

            let wobble = noise.sample(
                dir.x * agent.wobble_freq + 100.0,
                dir.y * agent.wobble_freq + 100.0,
                agent.t,
            );
            let tremor = (noise.sample(i as f32 * 0.12, agent.t * 6.0, 0.0) - 0.5) * agent.panic * TREMOR;
            let r = agent.radius + map_range(wobble, 0.0, 1.0, -agent.wobble, agent.wobble) + tremor;

            agent.pos + dir * r
        })
        .collect()
}

/// Body color, drifting from calm blue toward an anxious teal
pub fn blob_color(panic: f32) -> [f32; 4] {
    rgba(20.0, lerp(140.0, 70.0, panic), lerp(255.0, 90.0, panic), 255.0)
}

fn blob<N: Noise>(out: &mut Vec<Vertex>, agent: &Agent, noise: &N, settings: &Settings) {
    let outline = blob_outline(agent, noise);
    out.extend(shapes::polygon(agent.pos, &outline, blob_color(agent.panic)));

    let eye = agent.pos + Vec2::from_angle(agent.vel.y.atan2(agent.vel.x)) * EYE_OFFSET;
    out.extend(shapes::circle(eye, 2.0, colors::EYE, settings.quality.circle_segments()));
}

fn vignette(out: &mut Vec<Vertex>, w: f32, h: f32, panic: f32) {
    if panic <= 0.0 {
        return;
    }
    let alpha = 140.0 * panic;

    let edge = rgba(0.0, 0.0, 0.0, alpha);
    out.extend(shapes::rect(Vec2::ZERO, Vec2::new(w, VIGNETTE_EDGE), edge));
    out.extend(shapes::rect(Vec2::new(0.0, h - VIGNETTE_EDGE), Vec2::new(w, VIGNETTE_EDGE), edge));
    out.extend(shapes::rect(Vec2::ZERO, Vec2::new(VIGNETTE_EDGE, h), edge));
    out.extend(shapes::rect(Vec2::new(w - VIGNETTE_EDGE, 0.0), Vec2::new(VIGNETTE_EDGE, h), edge));

    let corner = rgba(0.0, 0.0, 0.0, alpha * 0.9);
    let size = Vec2::splat(VIGNETTE_CORNER);
    for origin in [
        Vec2::ZERO,
        Vec2::new(w - VIGNETTE_CORNER, 0.0),
        Vec2::new(0.0, h - VIGNETTE_CORNER),
        Vec2::new(w - VIGNETTE_CORNER, h - VIGNETTE_CORNER),
    ] {
        out.extend(shapes::rect(origin, size, corner));
    }
}
