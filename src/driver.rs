//! Control surface for a front end
//!
//! Mirrors the controls a user sees (start/stop button, reset button, mass
//! slider, speed input, anti-aliasing toggle) and provides the tick source
//! that feeds the stepper.

use crate::error::Result;
use crate::renderer::Frame;
use crate::settings::Settings;
use crate::sim::{RunPhase, SimulationState, StepOutcome, Stepper};

/// Shown by the "what is this?" button
pub const ABOUT_TEXT: &str = "What is this program:\n\n\
This program calculates digits of Pi by colliding squares with mass and velocity \
and counting the number of collisions in the negative direction.\n\n\
This may seem arbitrary but it's a graphical representation of a simple mathematical proof.\n\n\
The slider allows you to choose how many digits of Pi you will get.\n\n\
The numbers on the squares show their mass.\n\n\
The animation speed value controls how far the squares move per update.\n\n\
This doesn't affect the result.";

/// Result of running a configuration with the built-in tick source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Ticks that advanced positions during this call
    pub ticks: u64,
    pub collision_count: u64,
    /// False if the tick budget ran out or the speed was invalid
    pub terminated: bool,
}

/// Stepper plus the settings the controls edit
#[derive(Debug, Clone)]
pub struct Driver {
    stepper: Stepper,
    settings: Settings,
}

impl Driver {
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;
        let stepper = Stepper::new(
            settings.mass_ratio_exponent,
            settings.arena_width,
            settings.arena_height,
        )?;
        Ok(Self { stepper, settings })
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn state(&self) -> &SimulationState {
        self.stepper.state()
    }

    #[inline]
    pub fn phase(&self) -> RunPhase {
        self.stepper.phase()
    }

    /// Label for the start/stop toggle
    pub fn button_label(&self) -> &'static str {
        if self.stepper.is_running() {
            "Stop"
        } else {
            "Start"
        }
    }

    /// Slider and speed input are disabled while a run is in progress
    #[inline]
    pub fn controls_locked(&self) -> bool {
        self.stepper.is_running()
    }

    /// Start/stop button
    pub fn toggle_run(&mut self) {
        if self.stepper.is_running() {
            self.stepper.stop();
        } else {
            self.stepper.start();
        }
    }

    /// Reset button: stop, restore starting positions, zero the counter
    pub fn reset(&mut self) -> Result<()> {
        self.stepper.reset(
            self.settings.mass_ratio_exponent,
            self.settings.arena_width,
            self.settings.arena_height,
        )
    }

    /// Mass slider; returns false if locked or out of range
    ///
    /// The new mass takes effect through an implicit reset.
    pub fn set_mass_ratio_exponent(&mut self, exponent: u32) -> bool {
        if self.controls_locked() {
            return false;
        }
        let candidate = Settings {
            mass_ratio_exponent: exponent,
            ..self.settings.clone()
        };
        if let Err(e) = candidate.validate() {
            log::warn!("Ignoring mass ratio exponent {exponent}: {e}");
            return false;
        }
        self.settings = candidate;
        if let Some(msg) = self.settings.notice().message() {
            log::info!("{msg}");
        }
        self.reset().is_ok()
    }

    /// Speed input; returns the clamped speed, or None if locked
    pub fn set_speed(&mut self, speed: f64) -> Option<f64> {
        if self.controls_locked() {
            return None;
        }
        Some(self.settings.set_speed(speed))
    }

    /// Anti-aliasing checkbox (display only, allowed mid-run)
    pub fn set_anti_aliasing(&mut self, enabled: bool) {
        self.settings.anti_aliasing = enabled;
    }

    /// Window resize: restarts the run in the new arena
    pub fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        self.stepper.reset(self.settings.mass_ratio_exponent, width, height)?;
        self.settings.arena_width = width;
        self.settings.arena_height = height;
        Ok(())
    }

    /// One tick at the current speed
    pub fn tick(&mut self) -> StepOutcome {
        self.stepper.step(self.settings.speed)
    }

    /// Current display snapshot
    pub fn frame(&self) -> Frame {
        Frame::capture(self.stepper.state(), self.settings.anti_aliasing)
    }

    /// Start (if needed) and tick back-to-back until termination
    ///
    /// Stops early after `max_ticks` advancing ticks, or as soon as a tick
    /// is refused for an invalid speed. Stopping early leaves the run Idle.
    pub fn run_until_terminated(&mut self, max_ticks: Option<u64>) -> RunSummary {
        self.stepper.start();
        let mut ticks = 0u64;
        let terminated = loop {
            if max_ticks.is_some_and(|max| ticks >= max) {
                self.stepper.stop();
                break false;
            }
            match self.tick() {
                StepOutcome::Advanced(_) => ticks += 1,
                StepOutcome::Terminated => break true,
                StepOutcome::NotAdvanced => {
                    self.stepper.stop();
                    break false;
                }
            }
        };

        RunSummary {
            ticks,
            collision_count: self.state().collision_count(),
            terminated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_labels() {
        let mut driver = Driver::new(Settings::default()).unwrap();
        assert_eq!(driver.button_label(), "Start");
        assert!(!driver.controls_locked());

        driver.toggle_run();
        assert_eq!(driver.button_label(), "Stop");
        assert!(driver.controls_locked());

        driver.toggle_run();
        assert_eq!(driver.button_label(), "Start");
        assert_eq!(driver.phase(), RunPhase::Idle);
    }

    #[test]
    fn test_controls_locked_while_running() {
        let mut driver = Driver::new(Settings::default()).unwrap();
        driver.toggle_run();

        assert!(!driver.set_mass_ratio_exponent(2));
        assert_eq!(driver.set_speed(10.0), None);
        assert_eq!(driver.settings().mass_ratio_exponent, 1);
        assert_eq!(driver.settings().speed, 50.0);

        // Display-only toggle still works
        driver.set_anti_aliasing(true);
        assert!(driver.settings().anti_aliasing);
    }

    #[test]
    fn test_slider_reconfigures_mass() {
        let mut driver = Driver::new(Settings::default()).unwrap();
        assert!(driver.set_mass_ratio_exponent(3));
        assert_eq!(driver.state().heavy().mass(), 160_000.0);
        assert!(!driver.set_mass_ratio_exponent(0));
        assert!(!driver.set_mass_ratio_exponent(9));
        assert_eq!(driver.settings().mass_ratio_exponent, 3);
    }

    #[test]
    fn test_run_until_terminated() {
        let mut driver = Driver::new(Settings::default()).unwrap();
        let summary = driver.run_until_terminated(None);

        assert!(summary.terminated);
        assert_eq!(summary.collision_count, 3);
        assert_eq!(driver.phase(), RunPhase::Terminated);
        assert_eq!(driver.button_label(), "Start");
        assert!(!driver.controls_locked());
        assert_eq!(driver.frame().title, "Collisions: 3");
    }

    #[test]
    fn test_tick_budget() {
        let mut driver = Driver::new(Settings::default()).unwrap();
        let summary = driver.run_until_terminated(Some(10));

        assert!(!summary.terminated);
        assert_eq!(summary.ticks, 10);
        assert_eq!(driver.phase(), RunPhase::Idle);
    }

    #[test]
    fn test_nan_speed_stalls() {
        let mut driver = Driver::new(Settings::default()).unwrap();
        driver.set_speed(f64::NAN);

        let summary = driver.run_until_terminated(None);

        assert!(!summary.terminated);
        assert_eq!(summary.ticks, 0);
        assert_eq!(driver.state().time_ticks(), 0);
    }

    #[test]
    fn test_resize_restarts() {
        let mut driver = Driver::new(Settings::default()).unwrap();
        driver.run_until_terminated(Some(2000));
        driver.toggle_run();

        driver.resize(1024.0, 768.0).unwrap();

        assert_eq!(driver.phase(), RunPhase::Idle);
        assert_eq!(driver.state().collision_count(), 0);
        assert_eq!(driver.state().arena().width, 1024.0);
        assert_eq!(driver.settings().arena_width, 1024.0);
        assert!(driver.resize(-1.0, 768.0).is_err());
        assert_eq!(driver.settings().arena_width, 1024.0);
    }
}
