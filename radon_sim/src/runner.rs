//! Simulation loop.
//!
//! Drives the chain stepper over the full measurement duration, recording
//! per-step decay rates and emitting one measurement record per completed
//! cycle. Only whole time steps run: a step that would overrun the
//! configured duration never executes, and a partial tail cycle that never
//! reaches a boundary is discarded rather than emitted.

use radon_core::{
    aggregate, concentration_to_atoms, ChainState, CycleAccumulator, CycleRecord, Isotope,
    CHAIN_LEN,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::{ConfigError, SimulationConfig};

/// Per-step diagnostic sample for the progeny concentration curves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    /// Step start time, seconds.
    pub time_secs: f64,

    /// Per-isotope decay rate over the step (decays per second), in chain
    /// order; the terminal entry is carried for completeness only.
    pub decay_rates: [f64; CHAIN_LEN],

    /// Po218 population at the start of the step.
    pub po218_atoms: u64,

    /// Po214 population at the start of the step.
    pub po214_atoms: u64,
}

/// Output of one completed measurement run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Identifies this run in logs and exports.
    pub run_id: Uuid,

    /// The configuration the run was started with.
    pub config: SimulationConfig,

    /// Diagnostic rate series, one entry per time step.
    pub step_series: Vec<StepRecord>,

    /// One measurement per completed cycle, in emission order.
    pub cycles: Vec<CycleRecord>,

    /// Chain populations at the end of the run.
    pub final_state: ChainState,

    /// Simulated seconds actually covered (whole steps only).
    pub elapsed_secs: f64,
}

/// Runs measurement simulations.
///
/// A runner owns nothing but the validated configuration; each call to
/// [`run`](Self::run) is an independent run with its own chain state,
/// accumulator, and seeded generator.
pub struct SimulationRunner {
    config: SimulationConfig,
}

impl SimulationRunner {
    /// Creates a runner, rejecting invalid configurations up front.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Executes one full measurement run.
    pub fn run(&self) -> SimulationResult {
        let config = self.config.clone();
        let run_id = Uuid::new_v4();
        let dt = config.time_step_secs;

        if config.cycle_secs % dt != 0.0 {
            warn!(
                "cycle length {} s is not a multiple of the {} s time step; \
                 cycle boundaries may never be reached",
                config.cycle_secs, dt
            );
        }

        let initial_atoms = concentration_to_atoms(
            config.ambient_bq_m3,
            Isotope::Rn222.decay_constant(),
            config.chamber_volume_m3,
        );

        let total_steps = (config.duration_secs / dt) as u64;

        info!(
            "run {}: {} Bq/m³ → {} Rn222 atoms, {} steps of {} s, {} mode",
            run_id, config.ambient_bq_m3, initial_atoms, total_steps, dt, config.mode
        );

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut state = ChainState::with_radon(initial_atoms);
        let mut accumulator = CycleAccumulator::new();
        let mut step_series = Vec::with_capacity(total_steps as usize);
        let mut cycles = Vec::new();

        for k in 1..=total_steps {
            let time_secs = (k - 1) as f64 * dt;
            let po218_atoms = state.population(Isotope::Po218);
            let po214_atoms = state.population(Isotope::Po214);

            let decays = state.step(dt, config.continuous_source, config.method, &mut rng);

            let mut decay_rates = [0.0; CHAIN_LEN];
            for (rate, count) in decay_rates.iter_mut().zip(decays.counts()) {
                *rate = count as f64 / dt;
            }
            step_series.push(StepRecord {
                time_secs,
                decay_rates,
                po218_atoms,
                po214_atoms,
            });

            accumulator.record(decays.of(Isotope::Po218), decays.of(Isotope::Po214));

            let step_end_secs = k as f64 * dt;
            if step_end_secs % config.cycle_secs == 0.0 {
                let (po218_sum, po214_sum) = accumulator.drain();
                let record = aggregate(
                    po218_sum,
                    po214_sum,
                    config.cycle_minutes(),
                    config.mode,
                    step_end_secs,
                );
                debug!(
                    "cycle {} @ {:.0} min: {:.1} ± {:.1} Bq/m³ ({} mode)",
                    cycles.len() + 1,
                    record.time_mins,
                    record.radon,
                    record.radon_2sigma,
                    record.mode
                );
                cycles.push(record);
            }
        }

        let elapsed_secs = total_steps as f64 * dt;
        info!(
            "run {} complete: {} cycles over {:.0} simulated minutes",
            run_id,
            cycles.len(),
            elapsed_secs / 60.0
        );

        SimulationResult {
            run_id,
            config,
            step_series,
            cycles,
            final_state: state,
            elapsed_secs,
        }
    }
}
