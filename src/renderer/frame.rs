//! Display snapshot of a simulation state
//!
//! Everything a front end needs to draw one frame. Whole-pixel snapping
//! happens here and only here; the physics never sees `display_x`.

use glam::DVec2;

use crate::sim::{BodyKind, BoundaryKind, Entity, SimulationState};

/// Prefix of the heading drawn above the arena
pub const TITLE_TEXT: &str = "Collisions: ";

/// x-coordinate a block is drawn at
///
/// With anti-aliasing off the exact position is truncated toward zero.
#[inline]
pub fn display_x(position: f64, anti_aliasing: bool) -> f64 {
    if anti_aliasing {
        position
    } else {
        position.trunc()
    }
}

/// A block as drawn
#[derive(Debug, Clone, PartialEq)]
pub struct BlockView {
    pub kind: BodyKind,
    pub display_x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Mass, printed on the block
    pub label: String,
}

impl BlockView {
    /// Where the label is centered
    pub fn label_anchor(&self) -> DVec2 {
        DVec2::new(
            self.display_x + self.width / 2.0,
            self.y + self.height / 2.0,
        )
    }
}

/// A boundary line as drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineView {
    pub kind: BoundaryKind,
    pub start: DVec2,
    pub end: DVec2,
}

/// One drawable frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub blocks: Vec<BlockView>,
    pub lines: Vec<LineView>,
    /// "Collisions: N"
    pub title: String,
}

impl Frame {
    pub fn capture(state: &SimulationState, anti_aliasing: bool) -> Self {
        let arena = state.arena();
        let mut blocks = Vec::with_capacity(2);
        let mut lines = Vec::with_capacity(2);

        for entity in state.entities() {
            match entity {
                Entity::MovingBody(body) => blocks.push(BlockView {
                    kind: body.kind,
                    display_x: display_x(body.position(), anti_aliasing),
                    y: body.y,
                    width: body.width(),
                    height: body.height(),
                    label: format!("{}", body.mass()),
                }),
                Entity::Boundary(boundary) => lines.push(LineView {
                    kind: boundary.kind,
                    start: boundary.start(),
                    end: boundary.end(),
                }),
            }
        }

        Self {
            width: arena.width,
            height: arena.height,
            blocks,
            lines,
            title: format!("{TITLE_TEXT}{}", state.collision_count()),
        }
    }
}
