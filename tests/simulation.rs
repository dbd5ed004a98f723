//! Whole-run invariants of the frame step

use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use panic_blob::Settings;
use panic_blob::renderer::{ValueNoise, build_scene};
use panic_blob::sim::{FrameInput, PointerInput, SimState, tick};

const PAD: f32 = 20.0;

fn frame_strategy() -> impl Strategy<Value = FrameInput> {
    (
        any::<bool>(),
        0.0f32..480.0,
        0.0f32..320.0,
        0.0f32..80.0,
        any::<bool>(),
    )
        .prop_map(|(held, x, y, dt_ms, shake_enabled)| FrameInput {
            pointer: PointerInput {
                held,
                pos: Vec2::new(x, y),
            },
            dt_ms,
            shake_enabled,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_state_stays_in_range(
        seed in any::<u64>(),
        frames in prop::collection::vec(frame_strategy(), 1..200),
    ) {
        let mut state = SimState::new(seed);
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut was_dead = vec![false; state.coins.len()];
        let mut last_score = 0;

        for input in &frames {
            tick(&mut state, input, &mut rng);

            let agent = &state.agent;
            prop_assert!((0.0..=1.0).contains(&agent.panic));
            prop_assert!(agent.jitter >= 0.0);
            prop_assert!(state.bounds.contains_inset(agent.pos, PAD), "agent at {:?}", agent.pos);

            for c in &state.crates {
                prop_assert!(state.bounds.contains_inset(c.pos, PAD), "crate at {:?}", c.pos);
            }

            for (coin, dead) in state.coins.iter().zip(was_dead.iter_mut()) {
                if *dead {
                    prop_assert!(!coin.is_alive(), "coin came back to life");
                }
                *dead = !coin.is_alive();
            }

            let dead_count = state.coins.iter().filter(|c| !c.is_alive()).count() as u32;
            prop_assert_eq!(state.score, dead_count);
            prop_assert!(state.score >= last_score);
            last_score = state.score;
        }
    }

    #[test]
    fn prop_scene_does_not_touch_state(seed in any::<u64>(), steps in 0usize..60) {
        let mut state = SimState::new(seed);
        let mut rng = Pcg32::seed_from_u64(seed);
        for _ in 0..steps {
            tick(&mut state, &FrameInput::default(), &mut rng);
        }

        let agent = state.agent.clone();
        let crates = state.crates.clone();
        let coins = state.coins.clone();
        let vertices = build_scene(&state, &ValueNoise::new(seed), &Settings::default());

        prop_assert!(!vertices.is_empty());
        prop_assert_eq!(agent, state.agent);
        prop_assert_eq!(crates, state.crates);
        prop_assert_eq!(coins, state.coins);
    }
}

#[test]
fn agent_parked_at_threat_edge_fully_panics() {
    let mut state = SimState::empty();
    let mut rng = Pcg32::seed_from_u64(40);
    let spot = state.threat.pos + Vec2::new(40.0, 0.0);

    for _ in 0..40 {
        state.agent.pos = spot;
        state.agent.vel = Vec2::ZERO;
        tick(&mut state, &FrameInput::default(), &mut rng);
    }
    assert!((state.agent.panic - 1.0).abs() < 0.05, "panic = {}", state.agent.panic);
}

#[test]
fn blob_eats_every_coin_it_sits_on() {
    let mut state = SimState::new(3);
    let mut rng = Pcg32::seed_from_u64(3);
    let total = state.coins.len() as u32;

    for i in 0..state.coins.len() {
        state.agent.pos = state.coins[i].pos;
        state.agent.vel = Vec2::ZERO;
        tick(&mut state, &FrameInput::default(), &mut rng);
    }

    assert_eq!(state.score, total);
    assert_eq!(state.coins_left(), 0);
}
