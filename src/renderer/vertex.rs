//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Linear RGBA
pub type Color = [f32; 4];

/// Flat-colored point in arena pixels, laid out for direct buffer upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    #[inline]
    pub fn at(point: Vec2, color: Color) -> Self {
        Self {
            position: point.to_array(),
            color,
        }
    }

    #[inline]
    pub fn point(&self) -> Vec2 {
        Vec2::from_array(self.position)
    }
}

/// Colors for scene elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [1.0, 1.0, 1.0, 1.0];
    pub const BLOCK: Color = [0.0, 0.0, 0.0, 1.0];
    pub const LINE: Color = [0.0, 0.0, 0.0, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let verts = [Vertex::at(Vec2::new(1.0, 2.0), colors::BLOCK); 3];
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), 72);
        assert_eq!(verts[0].point(), Vec2::new(1.0, 2.0));
    }
}
