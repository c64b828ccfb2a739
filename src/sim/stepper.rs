//! Run lifecycle around the pure tick
//!
//! The stepper owns the state exclusively. Resetting always passes through
//! `stop`, so a state can never be replaced mid-run.

use serde::{Deserialize, Serialize};

use super::state::SimulationState;
use super::tick::{StepOutcome, tick, valid_speed};
use crate::error::Result;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunPhase {
    /// Configured, waiting for start (or stopped by the user)
    #[default]
    Idle,
    /// Ticks are being applied
    Running,
    /// The heavy block left the arena; the count is final
    Terminated,
}

/// Owns a `SimulationState` and drives it through the run phases
#[derive(Debug, Clone)]
pub struct Stepper {
    state: SimulationState,
    phase: RunPhase,
}

impl Stepper {
    pub fn new(mass_ratio_exponent: u32, arena_width: f64, arena_height: f64) -> Result<Self> {
        Ok(Self::from_state(SimulationState::new(
            mass_ratio_exponent,
            arena_width,
            arena_height,
        )?))
    }

    /// Wrap an existing state, starting Idle
    pub fn from_state(state: SimulationState) -> Self {
        Self {
            state,
            phase: RunPhase::Idle,
        }
    }

    #[inline]
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    #[inline]
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }

    /// Begin (or resume) applying ticks
    ///
    /// Starting a terminated run is allowed; its next step reports
    /// `Terminated` again without touching the count.
    pub fn start(&mut self) {
        if self.phase != RunPhase::Running {
            log::info!(
                "Run started (exponent {}, {} collisions so far)",
                self.state.mass_ratio_exponent(),
                self.state.collision_count()
            );
            self.phase = RunPhase::Running;
        }
    }

    /// Pause a running simulation; other phases are unchanged
    pub fn stop(&mut self) {
        if self.phase == RunPhase::Running {
            log::info!(
                "Run stopped at tick {} with {} collisions",
                self.state.time_ticks(),
                self.state.collision_count()
            );
            self.phase = RunPhase::Idle;
        }
    }

    /// Stop any run and rebuild the state
    ///
    /// On error the previous state is kept, and the stepper is left Idle
    /// (or Terminated) rather than Running.
    pub fn reset(
        &mut self,
        mass_ratio_exponent: u32,
        arena_width: f64,
        arena_height: f64,
    ) -> Result<()> {
        self.stop();
        if let Err(e) = self
            .state
            .reset(mass_ratio_exponent, arena_width, arena_height)
        {
            log::warn!("Rejected configuration: {e}");
            return Err(e);
        }
        self.phase = RunPhase::Idle;
        log::info!(
            "Reset: exponent {mass_ratio_exponent}, arena {arena_width}x{arena_height}"
        );
        Ok(())
    }

    /// Apply one tick if running
    ///
    /// An invalid speed reports `NotAdvanced` in every phase, same as `tick`.
    /// Otherwise an Idle stepper reports `NotAdvanced` and a Terminated one
    /// reports `Terminated`. None of these touch the state.
    pub fn step(&mut self, speed_factor: f64) -> StepOutcome {
        if !valid_speed(speed_factor) {
            log::warn!("Speed factor {speed_factor} is not a finite non-negative number, not advancing");
            return StepOutcome::NotAdvanced;
        }
        match self.phase {
            RunPhase::Idle => return StepOutcome::NotAdvanced,
            RunPhase::Terminated => return StepOutcome::Terminated,
            RunPhase::Running => {}
        }

        let outcome = tick(&mut self.state, speed_factor);
        if outcome.is_terminated() {
            self.phase = RunPhase::Terminated;
            log::info!(
                "Run terminated after {} ticks: {} collisions",
                self.state.time_ticks(),
                self.state.collision_count()
            );
        }
        outcome
    }
}
