//! Pi Collisions - counting the digits of Pi with two sliding blocks
//!
//! A heavy block slides toward a light block resting near a wall. Every
//! collision is perfectly elastic and the light block bounces off the wall.
//! When the heavy block is `16 * 100^(n-1)` times heavier, the number of
//! collisions that leave it moving left is the first `n` digits of Pi.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, collision law, stepping)
//! - `renderer`: Display snapshot and vertex generation
//! - `settings`: User preferences and their persistence
//! - `driver`: Control surface and tick source for a front end

pub mod driver;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::{Driver, RunSummary};
pub use error::{Error, Result};
pub use settings::{ExponentNotice, Settings};

/// Simulation configuration constants
pub mod consts {
    /// Distance of the wall from the arena's left edge, and of the floor from its bottom
    pub const LINE_OFFSET: f64 = 20.0;

    /// Heavy block geometry (square)
    pub const HEAVY_SIZE: f64 = 100.0;
    /// Heavy block mass at mass ratio exponent 1
    pub const HEAVY_BASE_MASS: f64 = 16.0;
    /// Initial heavy block velocity (moving left, toward the light block)
    pub const HEAVY_START_VELOCITY: f64 = -100.0;

    /// Light block geometry (square)
    pub const LIGHT_SIZE: f64 = 20.0;
    pub const LIGHT_MASS: f64 = 1.0;

    /// Each exponent step multiplies the heavy mass by this factor (one more digit)
    pub const MASS_RATIO_BASE: f64 = 100.0;
    pub const MIN_MASS_RATIO_EXPONENT: u32 = 1;
    /// Largest exponent the controls offer (a run takes minutes beyond this)
    pub const MAX_MASS_RATIO_EXPONENT: u32 = 5;

    /// Speed factor is divided by this to get the per-tick time step
    pub const SPEED_DIVISOR: f64 = 10_000.0;
    pub const DEFAULT_SPEED: f64 = 50.0;
    pub const DEFAULT_SPEED_MIN: f64 = 1.0;
    pub const DEFAULT_SPEED_MAX: f64 = 100.0;

    /// Default arena dimensions
    pub const DEFAULT_ARENA_WIDTH: f64 = 800.0;
    pub const DEFAULT_ARENA_HEIGHT: f64 = 600.0;
}

/// Leading digits of Pi, enough for every exponent the arithmetic can resolve
const PI_DIGITS: &str = "31415926535897932";

/// First `count` digits of Pi as an integer (`pi_digits(4) == 3141`)
///
/// Returns `None` for zero or for more digits than fit in the table.
pub fn pi_digits(count: usize) -> Option<u64> {
    if count == 0 {
        return None;
    }
    PI_DIGITS.get(..count)?.parse().ok()
}

/// Final collision count a run with this mass ratio exponent should reach
///
/// Exponent `n` yields the first `n` digits of Pi: 1 -> 3, 2 -> 31, 3 -> 314.
#[inline]
pub fn expected_count(exponent: u32) -> Option<u64> {
    pi_digits(exponent as usize)
}

/// Heavy block mass for a mass ratio exponent: `16 * 100^(exponent - 1)`
#[inline]
pub fn heavy_mass_for_exponent(exponent: u32) -> f64 {
    use consts::{HEAVY_BASE_MASS, MASS_RATIO_BASE};
    let power = exponent.saturating_sub(1).min(i32::MAX as u32) as i32;
    HEAVY_BASE_MASS * MASS_RATIO_BASE.powi(power)
}
