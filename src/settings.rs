//! Run settings and preferences
//!
//! Persisted as JSON next to the binary (or wherever `--settings` points).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Heads-up shown when picking a large mass ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExponentNotice {
    None,
    /// The run is slow enough to notice
    Note,
    /// The run takes a long time; `estimate` is a human-readable duration
    Warning { estimate: &'static str },
}

impl ExponentNotice {
    pub fn for_exponent(exponent: u32) -> Self {
        match exponent {
            3 => ExponentNotice::Note,
            4 => ExponentNotice::Warning {
                estimate: "30 seconds",
            },
            5 => ExponentNotice::Warning {
                estimate: "5 minutes",
            },
            _ => ExponentNotice::None,
        }
    }

    pub fn message(&self) -> Option<String> {
        match self {
            ExponentNotice::None => None,
            ExponentNotice::Note => {
                Some("Note: this one takes a little while to finish.".to_string())
            }
            ExponentNotice::Warning { estimate } => Some(format!(
                "Warning: this can take around {estimate} to finish."
            )),
        }
    }
}

/// User-facing simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Heavy mass is `16 * 100^(exponent - 1)`; the count gets `exponent` digits of Pi
    pub mass_ratio_exponent: u32,

    // === Animation ===
    /// Speed factor passed to every tick
    pub speed: f64,
    /// Lowest speed the input accepts
    pub speed_min: f64,
    /// Highest speed the input accepts
    pub speed_max: f64,
    /// Draw blocks at exact positions instead of whole pixels
    pub anti_aliasing: bool,

    // === Arena ===
    pub arena_width: f64,
    pub arena_height: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mass_ratio_exponent: MIN_MASS_RATIO_EXPONENT,

            speed: DEFAULT_SPEED,
            speed_min: DEFAULT_SPEED_MIN,
            speed_max: DEFAULT_SPEED_MAX,
            anti_aliasing: false,

            arena_width: DEFAULT_ARENA_WIDTH,
            arena_height: DEFAULT_ARENA_HEIGHT,
        }
    }
}

impl Settings {
    /// Clamp a requested speed to `[speed_min, speed_max]`
    ///
    /// NaN passes through so the tick can refuse it.
    pub fn clamp_speed(&self, speed: f64) -> f64 {
        if speed < self.speed_min {
            self.speed_min
        } else if speed > self.speed_max {
            self.speed_max
        } else {
            speed
        }
    }

    /// Store a requested speed after clamping; returns the stored value
    pub fn set_speed(&mut self, speed: f64) -> f64 {
        self.speed = self.clamp_speed(speed);
        self.speed
    }

    /// Heads-up for the current exponent
    pub fn notice(&self) -> ExponentNotice {
        ExponentNotice::for_exponent(self.mass_ratio_exponent)
    }

    /// Heavy block mass implied by the current exponent
    pub fn heavy_mass(&self) -> f64 {
        crate::heavy_mass_for_exponent(self.mass_ratio_exponent)
    }

    /// Check every field against the ranges the controls allow
    pub fn validate(&self) -> Result<()> {
        if !(MIN_MASS_RATIO_EXPONENT..=MAX_MASS_RATIO_EXPONENT).contains(&self.mass_ratio_exponent)
        {
            return Err(Error::invalid(format!(
                "mass ratio exponent must be in {MIN_MASS_RATIO_EXPONENT}..={MAX_MASS_RATIO_EXPONENT} (got {})",
                self.mass_ratio_exponent
            )));
        }
        if !self.speed_min.is_finite()
            || !self.speed_max.is_finite()
            || self.speed_min < 0.0
            || self.speed_min > self.speed_max
        {
            return Err(Error::invalid(format!(
                "speed range [{}, {}] is not a valid non-negative range",
                self.speed_min, self.speed_max
            )));
        }
        for (name, value) in [("width", self.arena_width), ("height", self.arena_height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::invalid(format!(
                    "arena {name} must be finite and > 0 (got {value})"
                )));
            }
        }
        Ok(())
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let mut settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        settings.speed = settings.clamp_speed(settings.speed);
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults if the file is missing or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => settings,
            Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring settings at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
