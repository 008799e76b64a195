//! Decay-chain stepping.
//!
//! Applies the decay engine across all six isotopes in chain order for one
//! time step. Decays of isotope i become the production term feeding
//! isotope i + 1 within the same step, so atoms are conserved between
//! adjacent isotopes.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::decay::{decay, SamplingMethod};
use crate::isotopes::{Isotope, CHAIN, CHAIN_LEN};

/// Atom populations for the whole chain, indexed by chain position.
///
/// Populations are unsigned, so non-negativity holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainState {
    populations: [u64; CHAIN_LEN],
}

/// Per-isotope decay counts for one time step.
///
/// `counts[i]` is the number of decays of `CHAIN[i]` during the step. The
/// terminal entry (Pb210) feeds no further population and is recorded for
/// completeness only: at a ~22 year half-life it is a negligible sink on
/// any simulated timescale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDecays {
    counts: [u64; CHAIN_LEN],
}

impl StepDecays {
    /// Decays of the given isotope during the step.
    pub fn of(&self, isotope: Isotope) -> u64 {
        self.counts[isotope.chain_index()]
    }

    /// Raw per-isotope counts in chain order.
    pub fn counts(&self) -> [u64; CHAIN_LEN] {
        self.counts
    }
}

impl ChainState {
    /// Chain with all populations zero.
    pub fn empty() -> Self {
        Self {
            populations: [0; CHAIN_LEN],
        }
    }

    /// Chain seeded with the given number of Rn222 atoms and no progeny —
    /// the state of a freshly purged chamber at the start of a measurement.
    pub fn with_radon(atoms: u64) -> Self {
        let mut populations = [0; CHAIN_LEN];
        populations[0] = atoms;
        Self { populations }
    }

    /// Chain with explicit per-isotope populations, in chain order.
    pub fn from_populations(populations: [u64; CHAIN_LEN]) -> Self {
        Self { populations }
    }

    /// Population of the given isotope.
    pub fn population(&self, isotope: Isotope) -> u64 {
        self.populations[isotope.chain_index()]
    }

    /// Per-isotope populations in chain order.
    pub fn populations(&self) -> [u64; CHAIN_LEN] {
        self.populations
    }

    /// Total atoms currently tracked across the chain.
    pub fn total_atoms(&self) -> u64 {
        self.populations.iter().sum()
    }

    /// Advances the whole chain by one time step.
    ///
    /// Each isotope's population is split into survivors and decays; the
    /// decays flow into the daughter's population within the same step.
    /// With `continuous_source` set, the head (Rn222) population is
    /// restored to its pre-step value, modeling an undepleting external
    /// radon supply; otherwise the head depletes naturally.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        dt_secs: f64,
        continuous_source: bool,
        method: SamplingMethod,
        rng: &mut R,
    ) -> StepDecays {
        let mut counts = [0u64; CHAIN_LEN];
        let mut next = [0u64; CHAIN_LEN];
        let mut inflow = 0u64;

        for (i, isotope) in CHAIN.iter().enumerate() {
            let outcome = decay(
                isotope.half_life_secs(),
                self.populations[i],
                dt_secs,
                method,
                rng,
            );
            counts[i] = outcome.decays;

            next[i] = if i == 0 {
                if continuous_source {
                    self.populations[0]
                } else {
                    outcome.survivors
                }
            } else {
                inflow + outcome.survivors
            };

            inflow = outcome.decays;
        }

        self.populations = next;
        StepDecays { counts }
    }
}
