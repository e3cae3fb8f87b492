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

/// Colors for game elements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: [f32; 4],
    pub platform: [f32; 4],
    pub obstacle: [f32; 4],
    pub target: [f32; 4],
    pub ball: [f32; 4],
    pub trail: [f32; 4],
    pub aim_line: [f32; 4],
}

impl Palette {
    pub const STANDARD: Palette = Palette {
        background: [1.0, 1.0, 1.0, 1.0],
        platform: [0.0, 0.0, 0.0, 1.0],
        obstacle: [0.25, 0.25, 0.25, 1.0],
        target: [0.96, 0.5, 0.15, 1.0], // Princeton orange
        ball: [0.0, 0.0, 0.0, 1.0],
        trail: [0.0, 0.0, 0.0, 0.8],
        aim_line: [0.0, 0.0, 0.0, 1.0],
    };

    pub const HIGH_CONTRAST: Palette = Palette {
        background: [0.0, 0.0, 0.0, 1.0],
        platform: [1.0, 1.0, 1.0, 1.0],
        obstacle: [0.6, 0.6, 0.6, 1.0],
        target: [1.0, 0.85, 0.0, 1.0],
        ball: [0.2, 1.0, 1.0, 1.0],
        trail: [0.2, 1.0, 1.0, 0.8],
        aim_line: [1.0, 1.0, 1.0, 1.0],
    };

    pub fn for_settings(high_contrast: bool) -> &'static Palette {
        if high_contrast {
            &Self::HIGH_CONTRAST
        } else {
            &Self::STANDARD
        }
    }

    /// Background as a wgpu clear color
    pub fn clear_color(&self) -> wgpu::Color {
        let [r, g, b, a] = self.background;
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}
