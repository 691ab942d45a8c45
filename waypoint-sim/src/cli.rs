use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use waypoint_core::SimConfig;

use crate::TraceFormat;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Two groups of entities moving toward random targets", long_about = None)]
pub struct Settings {
    /// Entities per group
    #[arg(short = 'n', long, default_value_t = 5)]
    pub count: usize,

    /// Distance an entity covers per step
    #[arg(long, default_value_t = 1.0)]
    pub step: f64,

    /// Pause between steps in milliseconds
    #[arg(long, default_value_t = 500)]
    pub pace_ms: u64,

    /// Plane width
    #[arg(long, default_value_t = 10.0)]
    pub width: f64,

    /// Plane height
    #[arg(long, default_value_t = 10.0)]
    pub height: f64,

    /// Seed for start and target placement (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Trace output format
    #[arg(short, long, value_enum, default_value_t = TraceFormat::Text)]
    pub format: TraceFormat,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

impl Settings {
    pub fn to_config(&self) -> Result<SimConfig> {
        if !(self.step > 0.0 && self.step.is_finite()) {
            bail!("Step size must be a positive number, got {}", self.step);
        }
        if !(self.width > 0.0 && self.width.is_finite()) {
            bail!("Plane width must be a positive number, got {}", self.width);
        }
        if !(self.height > 0.0 && self.height.is_finite()) {
            bail!("Plane height must be a positive number, got {}", self.height);
        }
        // Each group gets half the plane along both axes.
        if !(self.width / 2.0 > 0.0 && self.height / 2.0 > 0.0) {
            bail!("Plane {}x{} is too small to split into quadrants", self.width, self.height);
        }
        let min_step = self.width.max(self.height) * f64::EPSILON * 4.0;
        if self.step < min_step {
            bail!(
                "Step size {} is too small for a {}x{} plane (minimum {})",
                self.step,
                self.width,
                self.height,
                min_step
            );
        }

        Ok(SimConfig {
            width: self.width,
            height: self.height,
            step: self.step,
            entity_count: self.count,
            pace: Duration::from_millis(self.pace_ms),
        })
    }
}
