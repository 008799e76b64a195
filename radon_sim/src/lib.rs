//! Radon measurement simulation harness.
//!
//! Drives the `radon_core` decay chain over a full measurement run and
//! turns detected decay events into periodic concentration estimates:
//!
//! ```text
//! ambient Bq/m³ ──► unit converter ──► ChainState
//!                                         │  step(dt), once per time step
//!                                         ▼
//!                       step series + CycleAccumulator
//!                                         │  at each cycle boundary
//!                                         ▼
//!                        CycleRecord table ──► display shell / export
//! ```
//!
//! All randomness flows from the single 64-bit seed in
//! [`SimulationConfig`], through a ChaCha8 generator, so identical
//! configurations reproduce identical runs.
//!
//! # Usage
//!
//! ```
//! use radon_sim::{SimulationConfig, SimulationRunner};
//!
//! let config = SimulationConfig {
//!     ambient_bq_m3: 200.0,
//!     seed: 42,
//!     ..Default::default()
//! };
//!
//! let result = SimulationRunner::new(config).unwrap().run();
//! assert_eq!(result.cycles.len(), 12);
//! ```

pub mod config;
pub mod exporter;
pub mod presets;
pub mod runner;

pub use config::{ConfigError, SimulationConfig};
pub use exporter::RunExport;
pub use presets::AmbientPreset;
pub use runner::{SimulationResult, SimulationRunner, StepRecord};
