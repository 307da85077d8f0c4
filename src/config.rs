//! Simulation settings loaded from TOML.

use std::{fs, path::Path, time::Duration};

use serde::Deserialize;
use tracing::info;

use crate::error::{Error, Result};

/// Settings for a simulation run. Missing keys fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub width: i32,
    pub height: i32,
    /// Number of random draws used to seed the first generation.
    pub initial_population: usize,
    pub ticks_per_second: f32,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            width: 160,
            height: 100,
            initial_population: 100,
            ticks_per_second: 10.0,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        info!(path = %path.display(), "loaded simulation config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(Error::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.ticks_per_second.is_finite() && self.ticks_per_second > 0.0) {
            return Err(Error::InvalidTickRate(self.ticks_per_second));
        }
        Ok(())
    }

    /// Time between two generations at the configured rate.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.ticks_per_second))
    }
}
