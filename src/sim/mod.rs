//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Caller-supplied step length only, no wall-clock time
//! - Exact `f64` positions, never rounded for display
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod stepper;
pub mod tick;

pub use collision::{blocks_in_contact, elastic_collision, reflect, touches_wall};
pub use state::{Arena, Body, BodyKind, Boundary, BoundaryKind, Entity, SimulationState};
pub use stepper::{RunPhase, Stepper};
pub use tick::{StepOutcome, TickEvents, tick, valid_speed};
