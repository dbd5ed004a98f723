//! Rendering module
//!
//! `scene` builds a triangle list from simulation state (pure, testable);
//! `pipeline` pushes it through WebGPU.

pub mod noise;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use noise::{FlatNoise, Noise, ValueNoise};
pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::Vertex;
