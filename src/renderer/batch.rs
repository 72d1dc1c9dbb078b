//! Triangle batch surface for the wgpu backend

use glam::Vec2;

use super::Surface;
use super::shapes;
use super::vertex::{Color, Vertex};

/// Segments used for every circle
const CIRCLE_SEGMENTS: u32 = 32;

/// Collects a frame's shapes as triangle-list vertices
#[derive(Debug, Default)]
pub struct VertexBatch {
    vertices: Vec<Vertex>,
}

impl VertexBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}

impl Surface for VertexBatch {
    /// The render pass clears to the background; only the geometry is dropped
    fn clear(&mut self) {
        self.vertices.clear();
    }

    fn fill_rect(&mut self, top_left: Vec2, size: Vec2, color: Color) {
        self.vertices.extend(shapes::rect(top_left, size, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.vertices
            .extend(shapes::circle(center, radius, color, CIRCLE_SEGMENTS));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::renderer::draw_scene;
    use crate::sim::GameState;

    #[test]
    fn test_scene_triangles() {
        let config = GameConfig::default();
        let state = GameState::new(&config);
        let mut batch = VertexBatch::new();

        draw_scene(&state, &config, &mut batch);
        // 51 rects of 6 vertices + one circle
        assert_eq!(batch.vertices().len(), 51 * 6 + CIRCLE_SEGMENTS as usize * 3);

        draw_scene(&state, &config, &mut batch);
        assert_eq!(batch.vertices().len(), 51 * 6 + CIRCLE_SEGMENTS as usize * 3);
    }
}
