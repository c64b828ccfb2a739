//! Simulation state and core entity types
//!
//! One `SimulationState` holds everything a run needs: the two blocks, the
//! wall, the floor line and the collision counter. It is rebuilt wholesale on
//! every reset.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::heavy_mass_for_exponent;

/// The bounded region the blocks move in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    /// Right edge; the heavy block leaving it ends the run
    pub width: f64,
    /// Only used for vertical placement
    pub height: f64,
}

impl Arena {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(Error::invalid(format!(
                "arena width must be finite and > 0 (got {width})"
            )));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(Error::invalid(format!(
                "arena height must be finite and > 0 (got {height})"
            )));
        }
        Ok(Self { width, height })
    }

    /// y-coordinate of the floor line the blocks rest on
    #[inline]
    pub fn floor_y(&self) -> f64 {
        self.height - LINE_OFFSET
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: DEFAULT_ARENA_WIDTH,
            height: DEFAULT_ARENA_HEIGHT,
        }
    }
}

/// Which of the two blocks a body is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    /// Starts in the middle, moving left
    Heavy,
    /// Starts at rest between the wall and the heavy block
    Light,
}

impl BodyKind {
    /// Side length of the square block
    pub fn size(self) -> f64 {
        match self {
            BodyKind::Heavy => HEAVY_SIZE,
            BodyKind::Light => LIGHT_SIZE,
        }
    }
}

/// A sliding block
///
/// Mass and size are fixed for the lifetime of a run. Only `position` and
/// `velocity` change while stepping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub kind: BodyKind,
    /// Left edge x-coordinate (exact, never rounded)
    pub(crate) position: f64,
    /// Signed; negative is moving left
    pub(crate) velocity: f64,
    /// Top edge y-coordinate (rendering only)
    pub y: f64,
    mass: f64,
    width: f64,
    height: f64,
}

impl Body {
    /// Create a body at the arena's default placement for its kind
    pub(crate) fn new(kind: BodyKind, mass: f64, arena: &Arena) -> Self {
        let size = kind.size();
        let mut body = Self {
            kind,
            position: 0.0,
            velocity: 0.0,
            y: 0.0,
            mass,
            width: size,
            height: size,
        };
        body.reset_to_default(arena);
        body
    }

    /// Restore the starting position and velocity for this kind of block
    pub(crate) fn reset_to_default(&mut self, arena: &Arena) {
        self.y = arena.floor_y() - self.height;
        match self.kind {
            BodyKind::Heavy => {
                self.position = (arena.width - self.width) / 2.0;
                self.velocity = HEAVY_START_VELOCITY;
            }
            BodyKind::Light => {
                self.position = arena.width / 4.0;
                self.velocity = 0.0;
            }
        }
    }

    /// Left edge x-coordinate
    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// x-coordinate of the right edge
    #[inline]
    pub fn right_edge(&self) -> f64 {
        self.position + self.width
    }

    #[inline]
    pub fn momentum(&self) -> f64 {
        self.mass * self.velocity
    }

    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity * self.velocity
    }
}

/// Which fixed line a boundary is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryKind {
    /// Vertical reflecting line near the left edge
    Wall,
    /// Horizontal line the blocks rest on (drawn only, no physics)
    Floor,
}

/// A fixed straight line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub kind: BoundaryKind,
    start: DVec2,
    end: DVec2,
}

impl Boundary {
    pub(crate) fn new(kind: BoundaryKind, arena: &Arena) -> Self {
        let mut boundary = Self {
            kind,
            start: DVec2::ZERO,
            end: DVec2::ZERO,
        };
        boundary.reset_to_default(arena);
        boundary
    }

    /// Stretch the line to the arena's current dimensions
    pub(crate) fn reset_to_default(&mut self, arena: &Arena) {
        match self.kind {
            BoundaryKind::Wall => {
                self.start = DVec2::new(LINE_OFFSET, 0.0);
                self.end = DVec2::new(LINE_OFFSET, arena.height);
            }
            BoundaryKind::Floor => {
                self.start = DVec2::new(0.0, arena.floor_y());
                self.end = DVec2::new(arena.width, arena.floor_y());
            }
        }
    }

    /// x-coordinate of the line's start point (the wall's position)
    #[inline]
    pub fn position(&self) -> f64 {
        self.start.x
    }

    #[inline]
    pub fn start(&self) -> DVec2 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> DVec2 {
        self.end
    }
}

/// Borrowed view of any drawable entity, in draw order
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    MovingBody(&'a Body),
    Boundary(&'a Boundary),
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// The block that starts moving
    pub(crate) heavy: Body,
    /// The block that bounces between the heavy block and the wall
    pub(crate) light: Body,
    wall: Boundary,
    floor: Boundary,
    arena: Arena,
    mass_ratio_exponent: u32,
    /// Collisions that left the heavy block moving left or at rest
    collision_count: u64,
    /// Ticks that advanced positions
    time_ticks: u64,
}

impl SimulationState {
    /// Build a fresh state for a mass ratio exponent and arena size
    pub fn new(mass_ratio_exponent: u32, arena_width: f64, arena_height: f64) -> Result<Self> {
        if mass_ratio_exponent < MIN_MASS_RATIO_EXPONENT {
            return Err(Error::invalid(format!(
                "mass ratio exponent must be >= {MIN_MASS_RATIO_EXPONENT} (got {mass_ratio_exponent})"
            )));
        }
        let heavy_mass = heavy_mass_for_exponent(mass_ratio_exponent);
        if !heavy_mass.is_finite() {
            return Err(Error::invalid(format!(
                "mass ratio exponent {mass_ratio_exponent} overflows the heavy mass"
            )));
        }
        let arena = Arena::new(arena_width, arena_height)?;

        Ok(Self {
            heavy: Body::new(BodyKind::Heavy, heavy_mass, &arena),
            light: Body::new(BodyKind::Light, LIGHT_MASS, &arena),
            wall: Boundary::new(BoundaryKind::Wall, &arena),
            floor: Boundary::new(BoundaryKind::Floor, &arena),
            arena,
            mass_ratio_exponent,
            collision_count: 0,
            time_ticks: 0,
        })
    }

    /// Replace this state with a fresh one
    ///
    /// On error nothing is changed.
    pub fn reset(
        &mut self,
        mass_ratio_exponent: u32,
        arena_width: f64,
        arena_height: f64,
    ) -> Result<()> {
        *self = Self::new(mass_ratio_exponent, arena_width, arena_height)?;
        log::debug!(
            "State reset: heavy mass {}, arena {}x{}",
            self.heavy.mass(),
            arena_width,
            arena_height
        );
        Ok(())
    }

    #[inline]
    pub fn heavy(&self) -> &Body {
        &self.heavy
    }

    #[inline]
    pub fn light(&self) -> &Body {
        &self.light
    }

    #[inline]
    pub fn wall(&self) -> &Boundary {
        &self.wall
    }

    #[inline]
    pub fn floor(&self) -> &Boundary {
        &self.floor
    }

    #[inline]
    pub fn arena(&self) -> Arena {
        self.arena
    }

    #[inline]
    pub fn mass_ratio_exponent(&self) -> u32 {
        self.mass_ratio_exponent
    }

    #[inline]
    pub fn collision_count(&self) -> u64 {
        self.collision_count
    }

    #[inline]
    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// The heavy block has reached the arena's right edge
    #[inline]
    pub fn heavy_exited(&self) -> bool {
        self.heavy.right_edge() >= self.arena.width
    }

    pub(crate) fn record_collision(&mut self) {
        self.collision_count += 1;
    }

    pub(crate) fn advance_tick(&mut self) {
        self.time_ticks += 1;
    }

    pub fn total_momentum(&self) -> f64 {
        self.heavy.momentum() + self.light.momentum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.heavy.kinetic_energy() + self.light.kinetic_energy()
    }

    /// All entities in draw order: heavy, light, wall, floor
    pub fn entities(&self) -> [Entity<'_>; 4] {
        [
            Entity::MovingBody(&self.heavy),
            Entity::MovingBody(&self.light),
            Entity::Boundary(&self.wall),
            Entity::Boundary(&self.floor),
        ]
    }
}
