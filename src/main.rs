//! Pi Collisions entry point
//!
//! Headless driver: runs one configuration to termination and reports the
//! collision count next to the digits of Pi it should match.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use pi_collisions::{Driver, Settings, expected_count};

#[derive(Parser, Debug)]
#[command(version, about = "Count block collisions to compute digits of Pi")]
struct Args {
    /// Settings file (JSON); missing file means defaults
    #[arg(long, default_value = "pi_collisions.json")]
    settings: PathBuf,

    /// Mass ratio exponent: heavy mass is 16 * 100^(n-1)
    #[arg(short, long)]
    exponent: Option<u32>,

    /// Speed factor per tick (clamped to the configured range)
    #[arg(short, long)]
    speed: Option<f64>,

    /// Arena width
    #[arg(long)]
    width: Option<f64>,

    /// Arena height
    #[arg(long)]
    height: Option<f64>,

    /// Report exact positions instead of whole pixels
    #[arg(long)]
    anti_aliasing: bool,

    /// Give up after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    save_settings: bool,
}

impl Args {
    fn apply(&self, settings: &mut Settings) {
        if let Some(exponent) = self.exponent {
            settings.mass_ratio_exponent = exponent;
        }
        if let Some(width) = self.width {
            settings.arena_width = width;
        }
        if let Some(height) = self.height {
            settings.arena_height = height;
        }
        if let Some(speed) = self.speed {
            settings.set_speed(speed);
        }
        if self.anti_aliasing {
            settings.anti_aliasing = true;
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = Settings::load_or_default(&args.settings);
    args.apply(&mut settings);
    settings
        .validate()
        .context("invalid settings after applying command line")?;

    if let Some(msg) = settings.notice().message() {
        println!("{msg}");
    }
    if args.save_settings {
        settings
            .save(&args.settings)
            .with_context(|| format!("saving settings to {}", args.settings.display()))?;
    }

    log::info!(
        "Pi Collisions starting: exponent {}, speed {}, arena {}x{}",
        settings.mass_ratio_exponent,
        settings.speed,
        settings.arena_width,
        settings.arena_height
    );

    let exponent = settings.mass_ratio_exponent;
    let mut driver = Driver::new(settings)?;
    let summary = driver.run_until_terminated(args.max_ticks);

    let frame = driver.frame();
    println!("{}", frame.title);
    for block in &frame.blocks {
        println!("  mass {:>12} at x = {}", block.label, block.display_x);
    }

    if !summary.terminated {
        println!("Stopped after {} ticks before the heavy block left the arena", summary.ticks);
        return Ok(());
    }

    println!("Finished in {} ticks", summary.ticks);
    if let Some(expected) = expected_count(exponent) {
        let verdict = if expected == summary.collision_count {
            "matches"
        } else {
            "differs from"
        };
        println!("Count {} {verdict} Pi digits {expected}", summary.collision_count);
    }

    Ok(())
}
