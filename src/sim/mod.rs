//! Deterministic simulation module
//!
//! All blob behaviour lives here. Given the same seed, inputs and RNG, a run
//! replays exactly:
//! - Explicit state context, no globals
//! - Caller-supplied RNG only
//! - Stable iteration order (props in creation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod panic;
pub mod state;
pub mod steering;
pub mod tick;

pub use collision::{bump_crate, integrate_crate, steal_coin};
pub use panic::{PanicResponse, target_panic};
pub use state::{Agent, Bounds, Coin, Crate, FrameInput, PointerInput, SimState, ThreatZone};
pub use steering::{flee_force, pointer_flee};
pub use tick::{FrameReport, tick};
