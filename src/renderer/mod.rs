//! Rendering module
//!
//! The game draws through the [`Surface`] trait: clear, filled rectangles and
//! filled circles. [`DrawList`] records the calls for headless runs; the wgpu
//! backend turns them into triangles ([`VertexBatch`]) and draws them
//! ([`RenderState`]).

pub mod batch;
pub mod draw_list;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

use glam::Vec2;

pub use batch::VertexBatch;
pub use draw_list::{DrawCommand, DrawList};
pub use pipeline::{RenderError, RenderState};
pub use scene::draw_scene;
pub use vertex::{Color, Vertex, colors};

/// A 2D drawing target in play-field pixel coordinates (origin top-left, y down)
pub trait Surface {
    /// Wipe everything drawn so far
    fn clear(&mut self);

    fn fill_rect(&mut self, top_left: Vec2, size: Vec2, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
}
