//! Fixed logical tick
//!
//! Advances the simulation by one step whose length is set by the caller's
//! speed factor. The tick knows nothing about wall-clock time.

use super::collision::{blocks_in_contact, reflect, resolve_block_collision, touches_wall};
use super::state::SimulationState;
use crate::consts::SPEED_DIVISOR;

/// Contacts resolved during one advancing tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Heavy and light blocks collided
    pub block_collision: bool,
    /// The collision left the heavy block moving left or at rest
    pub counted: bool,
    /// The light block bounced off the wall
    pub wall_bounce: bool,
}

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Positions advanced; the run goes on
    Advanced(TickEvents),
    /// Speed factor was NaN, infinite or negative; nothing changed
    NotAdvanced,
    /// The heavy block has left the arena; nothing changed
    Terminated,
}

impl StepOutcome {
    pub fn is_terminated(&self) -> bool {
        matches!(self, StepOutcome::Terminated)
    }
}

/// A speed factor the tick accepts
#[inline]
pub fn valid_speed(speed_factor: f64) -> bool {
    speed_factor.is_finite() && speed_factor >= 0.0
}

/// Advance the state by one tick
///
/// Order within a tick: termination check, position update, heavy/light
/// contact, wall contact. Both contact checks see the same updated positions.
pub fn tick(state: &mut SimulationState, speed_factor: f64) -> StepOutcome {
    if !valid_speed(speed_factor) {
        log::warn!("Speed factor {speed_factor} is not a finite non-negative number, not advancing");
        return StepOutcome::NotAdvanced;
    }

    if state.heavy_exited() {
        return StepOutcome::Terminated;
    }

    let dt = speed_factor / SPEED_DIVISOR;
    state.heavy.position += dt * state.heavy.velocity;
    state.light.position += dt * state.light.velocity;
    state.advance_tick();

    let mut events = TickEvents::default();

    if blocks_in_contact(&state.heavy, &state.light) {
        events.block_collision = true;
        let heavy_v = resolve_block_collision(&mut state.heavy, &mut state.light);
        if heavy_v <= 0.0 {
            events.counted = true;
            state.record_collision();
            log::debug!(
                "Collision #{} at tick {} (heavy v = {heavy_v})",
                state.collision_count(),
                state.time_ticks()
            );
        }
    }

    if touches_wall(&state.light, state.wall()) {
        events.wall_bounce = true;
        reflect(&mut state.light);
    }

    log::trace!(
        "Tick {}: heavy x={} v={}, light x={} v={}",
        state.time_ticks(),
        state.heavy.position,
        state.heavy.velocity,
        state.light.position,
        state.light.velocity
    );

    StepOutcome::Advanced(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(exponent: u32, speed: f64) -> SimulationState {
        let mut state = SimulationState::new(exponent, 800.0, 600.0).unwrap();
        while !tick(&mut state, speed).is_terminated() {}
        state
    }

    #[test]
    fn test_first_tick_moves_heavy_only() {
        let mut state = SimulationState::new(1, 800.0, 600.0).unwrap();

        let outcome = tick(&mut state, 50.0);

        assert_eq!(outcome, StepOutcome::Advanced(TickEvents::default()));
        assert_eq!(state.heavy.position, 349.5);
        assert_eq!(state.light.position, 200.0);
        assert_eq!(state.time_ticks(), 1);
    }

    #[test]
    fn test_zero_speed_advances_without_motion() {
        let mut state = SimulationState::new(1, 800.0, 600.0).unwrap();

        let outcome = tick(&mut state, 0.0);

        assert!(matches!(outcome, StepOutcome::Advanced(_)));
        assert_eq!(state.heavy.position, 350.0);
        assert_eq!(state.time_ticks(), 1);
    }

    #[test]
    fn test_invalid_speed_not_advanced() {
        for speed in [f64::NAN, -1.0, f64::INFINITY, f64::NEG_INFINITY] {
            let mut state = SimulationState::new(1, 800.0, 600.0).unwrap();
            let before = state.clone();
            assert_eq!(tick(&mut state, speed), StepOutcome::NotAdvanced);
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_contact_counts_when_heavy_keeps_moving_left() {
        let mut state = SimulationState::new(1, 800.0, 600.0).unwrap();
        state.heavy.position = state.light.right_edge() + 0.25;

        let outcome = tick(&mut state, 50.0);

        let StepOutcome::Advanced(events) = outcome else {
            panic!("expected Advanced, got {outcome:?}");
        };
        assert!(events.block_collision);
        assert!(events.counted);
        assert!(!events.wall_bounce);
        assert_eq!(state.collision_count(), 1);
    }

    #[test]
    fn test_contact_not_counted_when_heavy_turns_around() {
        let mut state = SimulationState::new(1, 800.0, 600.0).unwrap();
        // Light block chasing a slow heavy block from behind pushes it right
        state.heavy.velocity = -1.0;
        state.light.velocity = 500.0;
        state.heavy.position = state.light.right_edge();

        let outcome = tick(&mut state, 50.0);

        let StepOutcome::Advanced(events) = outcome else {
            panic!("expected Advanced, got {outcome:?}");
        };
        assert!(events.block_collision);
        assert!(!events.counted);
        assert!(state.heavy.velocity > 0.0);
        assert_eq!(state.collision_count(), 0);
    }

    #[test]
    fn test_wall_bounce_same_tick_as_collision() {
        let mut state = SimulationState::new(1, 800.0, 600.0).unwrap();
        state.light.position = 20.0;
        state.light.velocity = -10.0;
        state.heavy.position = 39.0;
        state.heavy.velocity = -10.0;

        let outcome = tick(&mut state, 50.0);

        let StepOutcome::Advanced(events) = outcome else {
            panic!("expected Advanced, got {outcome:?}");
        };
        assert!(events.block_collision);
        assert!(events.wall_bounce);
    }

    #[test]
    fn test_termination_checked_before_motion() {
        let mut state = SimulationState::new(1, 800.0, 600.0).unwrap();
        state.heavy.position = 700.0;
        state.heavy.velocity = 100.0;
        let before = state.clone();

        assert_eq!(tick(&mut state, 50.0), StepOutcome::Terminated);
        assert_eq!(state, before);
    }

    #[test]
    fn test_low_exponents_count_pi_digits() {
        assert_eq!(run_to_end(1, 50.0).collision_count(), 3);
        assert_eq!(run_to_end(2, 50.0).collision_count(), 31);
        assert_eq!(run_to_end(3, 50.0).collision_count(), 314);
    }

    #[test]
    fn test_count_independent_of_speed() {
        for speed in [1.0, 10.0, 100.0] {
            assert_eq!(run_to_end(2, speed).collision_count(), 31);
        }
    }

    mod props {
        use proptest::prelude::*;

        use super::super::*;

        proptest! {
            #[test]
            fn wall_flips_light_velocity(
                position in 0.0..20.0f64,
                velocity in -1e4..1e4f64,
            ) {
                let mut state = SimulationState::new(1, 800.0, 600.0).unwrap();
                state.light.position = position;
                state.light.velocity = velocity;

                let outcome = tick(&mut state, 0.0);

                let StepOutcome::Advanced(events) = outcome else {
                    return Err(TestCaseError::fail(format!("expected Advanced, got {outcome:?}")));
                };
                prop_assert!(events.wall_bounce);
                prop_assert_eq!(state.light().velocity(), -velocity);
                prop_assert_eq!(state.light().position(), position);
            }
        }
    }
}
