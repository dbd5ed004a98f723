//! Simulation state and core types
//!
//! `SimState` is the whole world: one agent, a fixed threat, and the props it
//! messes with. Everything the frame step touches is reachable from here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::tuning::{Tuning, TuningError};

/// The blob
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Outline vertex count
    pub points: u32,
    /// Outline wobble amplitude (pixels)
    pub wobble: f32,
    /// Outline wobble noise frequency
    pub wobble_freq: f32,
    /// Noise phase accumulator
    pub t: f32,
    /// Phase advance per frame
    pub t_speed: f32,
    /// 0..1, rises near the threat
    pub panic: f32,
    /// Screen shake amplitude (pixels)
    pub jitter: f32,
    /// Time until the next dart (ms)
    pub dart_timer: f32,
    /// Current dart heading (radians)
    pub heading: f32,
}

impl Default for Agent {
    fn default() -> Self {
        Self {
            pos: Vec2::new(240.0, 160.0),
            vel: Vec2::ZERO,
            radius: 28.0,
            points: 64,
            wobble: 10.0,
            wobble_freq: 1.1,
            t: 0.0,
            t_speed: 0.02,
            panic: 0.0,
            jitter: 0.0,
            dart_timer: 0.0,
            heading: 0.0,
        }
    }
}

/// A pushable crate
#[derive(Debug, Clone, PartialEq)]
pub struct Crate {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Edge length (pixels)
    pub size: f32,
}

impl Crate {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
        }
    }
}

/// A stealable coin
#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    pub pos: Vec2,
    pub radius: f32,
    alive: bool,
}

/// Coin draw radius
pub const COIN_RADIUS: f32 = 6.0;

impl Coin {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: COIN_RADIUS,
            alive: true,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Mark the coin taken. There is no way back.
    pub(crate) fn collect(&mut self) {
        self.alive = false;
    }
}

/// The invisible scary zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreatZone {
    pub pos: Vec2,
    pub radius: f32,
}

impl Default for ThreatZone {
    fn default() -> Self {
        Self {
            pos: Vec2::new(380.0, 90.0),
            radius: 45.0,
        }
    }
}

/// Pointer sample for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerInput {
    /// Button/touch held down
    pub held: bool,
    /// Canvas-space position (pixels)
    pub pos: Vec2,
}

/// Everything `tick` reads from the host for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    pub pointer: PointerInput,
    /// Elapsed time since the previous frame (ms)
    pub dt_ms: f32,
    /// Camera shake is drawn this frame. When off the shake offset is zero so
    /// the pointer lines up with the still scene.
    pub shake_enabled: bool,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            pointer: PointerInput::default(),
            dt_ms: FRAME_MS,
            shake_enabled: true,
        }
    }
}

/// Canvas extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }
}

impl Bounds {
    /// Clamp a point into the interior shrunk by `pad` on every side
    #[inline]
    pub fn clamp_inset(&self, p: Vec2, pad: f32) -> Vec2 {
        Vec2::new(
            p.x.clamp(pad, self.width - pad),
            p.y.clamp(pad, self.height - pad),
        )
    }

    #[inline]
    pub fn contains_inset(&self, p: Vec2, pad: f32) -> bool {
        p.x >= pad && p.x <= self.width - pad && p.y >= pad && p.y <= self.height - pad
    }
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct SimState {
    /// Seed used for prop placement
    pub seed: u64,
    pub bounds: Bounds,
    pub agent: Agent,
    pub threat: ThreatZone,
    pub crates: Vec<Crate>,
    pub coins: Vec<Coin>,
    /// Coins stolen so far
    pub score: u32,
    /// Frames simulated
    pub frame: u64,
    /// Camera shake offset sampled this frame
    pub shake: Vec2,
    pub tuning: Tuning,
}

impl SimState {
    /// Create a world with default tuning, props scattered from `seed`
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::default())
    }

    /// Create a world with custom tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning))
    }

    /// Create a world with no props (for tests and scripted scenes)
    pub fn empty() -> Self {
        Self {
            seed: 0,
            bounds: Bounds::default(),
            agent: Agent::default(),
            threat: ThreatZone::default(),
            crates: Vec::new(),
            coins: Vec::new(),
            score: 0,
            frame: 0,
            shake: Vec2::ZERO,
            tuning: Tuning::default(),
        }
    }

    fn build(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let bounds = Bounds::default();

        let crates = (0..CRATE_COUNT)
            .map(|_| {
                let pos = Vec2::new(
                    rng.random_range(60.0..bounds.width - 60.0),
                    rng.random_range(60.0..bounds.height - 60.0),
                );
                Crate::new(pos, rng.random_range(22.0..34.0))
            })
            .collect();

        let coins = (0..COIN_COUNT)
            .map(|_| {
                Coin::new(Vec2::new(
                    rng.random_range(30.0..bounds.width - 30.0),
                    rng.random_range(30.0..bounds.height - 30.0),
                ))
            })
            .collect();

        Self {
            seed,
            bounds,
            crates,
            coins,
            tuning,
            ..Self::empty()
        }
    }

    /// Coins not yet stolen
    pub fn coins_left(&self) -> usize {
        self.coins.iter().filter(|c| c.is_alive()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_scatters_props_inside_canvas() {
        let state = SimState::new(7);
        assert_eq!(state.crates.len(), CRATE_COUNT);
        assert_eq!(state.coins.len(), COIN_COUNT);
        for c in &state.crates {
            assert!(state.bounds.contains_inset(c.pos, 60.0));
            assert!((22.0..34.0).contains(&c.size));
            assert_eq!(c.vel, Vec2::ZERO);
        }
        for coin in &state.coins {
            assert!(coin.is_alive());
            assert!(state.bounds.contains_inset(coin.pos, 30.0));
        }
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = SimState::new(42);
        let b = SimState::new(42);
        assert_eq!(a.crates, b.crates);
        assert_eq!(a.coins, b.coins);
    }

    #[test]
    fn test_with_tuning_rejects_invalid() {
        let tuning = Tuning {
            panic_ease: 0.0,
            ..Default::default()
        };
        assert!(SimState::with_tuning(1, tuning).is_err());
    }

    #[test]
    fn test_agent_initial_state() {
        let agent = Agent::default();
        assert_eq!(agent.pos, Vec2::new(240.0, 160.0));
        assert_eq!(agent.radius, 28.0);
        assert_eq!(agent.points, 64);
        assert_eq!(agent.panic, 0.0);
    }
}
