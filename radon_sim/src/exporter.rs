//! JSON exporter for finished runs.
//!
//! Packages a [`SimulationResult`] into the tables the display shell
//! consumes and writes them as pretty-printed JSON.

use radon_core::CycleRecord;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;

use crate::runner::{SimulationResult, StepRecord};

/// Complete run export: everything the display shell charts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunExport {
    /// Run identifier.
    pub run_id: String,

    /// Seed used.
    pub seed: u64,

    /// Ambient concentration configured, Bq/m³.
    pub ambient_bq_m3: f64,

    /// Simulated duration actually covered, seconds.
    pub duration_secs: f64,

    /// Number of completed cycles.
    pub cycle_count: usize,

    /// Per-cycle measurement table (the primary chart).
    pub cycles: Vec<CycleRecord>,

    /// Per-step diagnostic rate series.
    pub step_series: Vec<StepRecord>,
}

impl RunExport {
    /// Assembles an export from a finished run.
    pub fn from_result(result: &SimulationResult) -> Self {
        Self {
            run_id: result.run_id.to_string(),
            seed: result.config.seed,
            ambient_bq_m3: result.config.ambient_bq_m3,
            duration_secs: result.elapsed_secs,
            cycle_count: result.cycles.len(),
            cycles: result.cycles.clone(),
            step_series: result.step_series.clone(),
        }
    }

    /// Writes to a JSON file.
    pub fn write_to_file(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
