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

    /// Location 0 is the NDC position, location 1 the RGBA color
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    /// Buffer layout matching `vs_main`'s inputs
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Colors for game elements (sRGB, written to a non-sRGB surface as-is)
pub mod colors {
    const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const BACKGROUND: [f32; 4] = rgb(0, 25, 40);
    pub const TARGET_PRIMARY: [f32; 4] = rgb(255, 0, 0);
    pub const TARGET_SECONDARY: [f32; 4] = rgb(255, 255, 255);
    pub const STATUS_BAR: [f32; 4] = rgb(128, 128, 128);
    pub const LABEL: [f32; 4] = rgb(255, 255, 255);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_struct() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes.len(), 2);

        let position = layout.attributes[0];
        assert_eq!(position.shader_location, 0);
        assert_eq!(position.offset, 0);
        assert_eq!(position.format, wgpu::VertexFormat::Float32x2);

        let color = layout.attributes[1];
        assert_eq!(color.shader_location, 1);
        assert_eq!(color.offset, 8);
        assert_eq!(color.format, wgpu::VertexFormat::Float32x4);
    }

    #[test]
    fn test_vertex_bytes_are_tightly_packed() {
        let v = Vertex::new(0.5, -0.5, colors::TARGET_PRIMARY);
        let bytes = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 24);
        assert_eq!(&bytes[0..4], &0.5f32.to_ne_bytes());
        assert_eq!(&bytes[8..12], &1.0f32.to_ne_bytes());
    }
}
