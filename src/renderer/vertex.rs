//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// RGBA colour, components in 0..=1
pub type Color = [f32; 4];

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
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
pub mod colors {
    use super::Color;

    pub const PADDLE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const BALL: Color = [1.0, 1.0, 1.0, 1.0];
    pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];

    /// Convert HSL (hue in degrees, saturation and lightness in 0..=1) to RGBA
    pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Color {
        let h = hue.rem_euclid(360.0) / 60.0;
        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = lightness - c / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        [r + m, g + m, b + m, 1.0]
    }

    /// Block colour: hue walks the wheel along the grid diagonal
    pub fn block(column: usize, row: usize, columns: usize, rows: usize) -> Color {
        let cells = (columns * rows).max(1) as f32;
        let hue = (column + row) as f32 * 360.0 / cells;
        hsl(hue, 1.0, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::colors::*;

    fn close(a: [f32; 4], b: [f32; 4]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn test_hsl_primaries() {
        assert!(close(hsl(0.0, 1.0, 0.5), [1.0, 0.0, 0.0, 1.0]));
        assert!(close(hsl(120.0, 1.0, 0.5), [0.0, 1.0, 0.0, 1.0]));
        assert!(close(hsl(240.0, 1.0, 0.5), [0.0, 0.0, 1.0, 1.0]));
        assert!(close(hsl(360.0, 1.0, 0.5), [1.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_hsl_grey_and_white() {
        assert!(close(hsl(200.0, 0.0, 0.5), [0.5, 0.5, 0.5, 1.0]));
        assert!(close(hsl(10.0, 1.0, 1.0), [1.0, 1.0, 1.0, 1.0]));
    }

    #[test]
    fn test_block_hue_depends_on_diagonal() {
        // 10 x 5 grid: one step along the diagonal is 7.2 degrees
        assert!(close(block(0, 0, 10, 5), [1.0, 0.0, 0.0, 1.0]));
        assert_eq!(block(3, 1, 10, 5), block(1, 3, 10, 5));
        assert_ne!(block(0, 0, 10, 5), block(1, 0, 10, 5));
        // hue 60 is yellow
        let yellow = block(5, 0, 10, 3);
        assert!(close(yellow, [1.0, 1.0, 0.0, 1.0]));
    }
}
