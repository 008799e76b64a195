//! Simulation run configuration and boundary validation.
//!
//! Invalid input is refused here, before a run starts — never discovered
//! mid-loop.

use radon_core::{DetectorMode, SamplingMethod};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Chamber volume of the reference instrument, m³ (1 L sensing volume).
pub const DEFAULT_CHAMBER_VOLUME_M3: f64 = 1e-3;

/// Reference time step, seconds.
pub const DEFAULT_TIME_STEP_SECS: f64 = 60.0;

/// Rejected configurations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Ambient concentration below zero.
    #[error("ambient concentration must be non-negative, got {0} Bq/m³")]
    NegativeConcentration(f64),

    /// Cycle length of zero or less.
    #[error("cycle length must be positive, got {0} s")]
    NonPositiveCycle(f64),

    /// Measurement duration of zero or less.
    #[error("measurement duration must be positive, got {0} s")]
    NonPositiveDuration(f64),

    /// Time step of zero or less.
    #[error("time step must be positive, got {0} s")]
    NonPositiveTimeStep(f64),

    /// Chamber volume of zero or less.
    #[error("chamber volume must be positive, got {0} m³")]
    NonPositiveVolume(f64),
}

/// Configuration for one measurement run. Immutable for the run's duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Ambient radon concentration being sampled, Bq/m³.
    pub ambient_bq_m3: f64,

    /// Sensing chamber volume, m³.
    pub chamber_volume_m3: f64,

    /// Hold the Rn222 population constant across steps, modeling an
    /// undepleting external source.
    pub continuous_source: bool,

    /// Simulation time step, seconds.
    pub time_step_secs: f64,

    /// Measurement cycle length, seconds. Should be a positive multiple of
    /// the time step; the runner warns when it is not, since boundaries
    /// may then never be reached.
    pub cycle_secs: f64,

    /// Total measurement duration, seconds.
    pub duration_secs: f64,

    /// Detector operating mode.
    pub mode: DetectorMode,

    /// Decay sampling method.
    pub method: SamplingMethod,

    /// Master seed; the same seed reproduces a run exactly.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            ambient_bq_m3: 200.0,
            chamber_volume_m3: DEFAULT_CHAMBER_VOLUME_M3,
            continuous_source: true,
            time_step_secs: DEFAULT_TIME_STEP_SECS,
            cycle_secs: 15.0 * 60.0,
            duration_secs: 180.0 * 60.0,
            mode: DetectorMode::Sniff,
            method: SamplingMethod::Binomial,
            seed: 42,
        }
    }
}

impl SimulationConfig {
    /// Checks the configuration, returning the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ambient_bq_m3 < 0.0 {
            return Err(ConfigError::NegativeConcentration(self.ambient_bq_m3));
        }
        if self.cycle_secs <= 0.0 {
            return Err(ConfigError::NonPositiveCycle(self.cycle_secs));
        }
        if self.duration_secs <= 0.0 {
            return Err(ConfigError::NonPositiveDuration(self.duration_secs));
        }
        if self.time_step_secs <= 0.0 {
            return Err(ConfigError::NonPositiveTimeStep(self.time_step_secs));
        }
        if self.chamber_volume_m3 <= 0.0 {
            return Err(ConfigError::NonPositiveVolume(self.chamber_volume_m3));
        }
        Ok(())
    }

    /// Cycle length in minutes, the unit the aggregation formulas use.
    pub fn cycle_minutes(&self) -> f64 {
        self.cycle_secs / 60.0
    }
}
