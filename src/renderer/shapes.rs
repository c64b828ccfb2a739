//! Shape generation for 2D primitives

use glam::Vec2;

use super::frame::Frame;
use super::vertex::{Color, Vertex, colors};

/// Stroke width of the boundary lines
pub const LINE_WIDTH: f32 = 1.0;

/// Two triangles covering the quad `a b c d` (a-b and c-d are opposite edges)
fn quad(a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: Color) -> [Vertex; 6] {
    [a, b, c, c, b, d].map(|p| Vertex::at(p, color))
}

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(origin: Vec2, size: Vec2, color: Color) -> [Vertex; 6] {
    let far = origin + size;
    quad(
        origin,
        Vec2::new(far.x, origin.y),
        Vec2::new(origin.x, far.y),
        far,
        color,
    )
}

/// Generate vertices for a straight line as a thin quad
pub fn line(start: Vec2, end: Vec2, width: f32, color: Color) -> [Vertex; 6] {
    let dir = (end - start).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);
    quad(start + perp, start - perp, end + perp, end - perp, color)
}

/// Triangle list for a whole frame: background, blocks, then lines
pub fn frame_vertices(frame: &Frame) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((1 + frame.blocks.len() + frame.lines.len()) * 6);

    vertices.extend(rect(
        Vec2::ZERO,
        Vec2::new(frame.width as f32, frame.height as f32),
        colors::BACKGROUND,
    ));

    for block in &frame.blocks {
        vertices.extend(rect(
            Vec2::new(block.display_x as f32, block.y as f32),
            Vec2::new(block.width as f32, block.height as f32),
            colors::BLOCK,
        ));
    }

    for l in &frame.lines {
        vertices.extend(line(
            l.start.as_vec2(),
            l.end.as_vec2(),
            LINE_WIDTH,
            colors::LINE,
        ));
    }

    vertices
}
