//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Color from 0-255 channels
#[inline]
pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> [f32; 4] {
    [r / 255.0, g / 255.0, b / 255.0, a / 255.0]
}

/// Colors for scene elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [238.0 / 255.0, 238.0 / 255.0, 238.0 / 255.0, 1.0];
    pub const GRID: [f32; 4] = [0.0, 0.0, 0.0, 18.0 / 255.0];
    pub const CRATE: [f32; 4] = [120.0 / 255.0, 95.0 / 255.0, 70.0 / 255.0, 1.0];
    pub const CRATE_INSET: [f32; 4] = [1.0, 1.0, 1.0, 40.0 / 255.0];
    pub const COIN: [f32; 4] = [1.0, 200.0 / 255.0, 40.0 / 255.0, 1.0];
    pub const COIN_SHINE: [f32; 4] = [1.0, 1.0, 1.0, 60.0 / 255.0];
    pub const EYE: [f32; 4] = [0.0, 0.0, 0.0, 120.0 / 255.0];
}
