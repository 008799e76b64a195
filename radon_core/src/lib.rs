//! Radon decay-chain physics for the measurement simulator.
//!
//! This library models the stochastic core of an alpha-particle radon
//! monitor:
//! - **Registry**: fixed half-lives and decay constants for the six-isotope
//!   chain Rn222 → Po218 → Pb214 → Bi214 → Po214 → Pb210
//! - **Decay engine**: clamped per-atom decay probability, sampled as one
//!   binomial draw or per-atom Bernoulli trials
//! - **Chain stepper**: one coupled time step across the whole chain
//! - **Cycle aggregation**: detected counts → CPM → concentration ± 2σ
//! - **Unit conversion**: ambient Bq/m³ → chamber atom population
//!
//! The library performs no I/O and holds no global state; all randomness
//! enters through an explicit caller-provided generator.

pub mod chain;
pub mod decay;
pub mod isotopes;
pub mod measure;
pub mod units;

// Re-export key types for convenience
pub use chain::{ChainState, StepDecays};
pub use decay::{decay, DecayOutcome, SamplingMethod};
pub use isotopes::{Isotope, CHAIN, CHAIN_LEN};
pub use measure::{aggregate, CycleAccumulator, CycleRecord, DetectorMode};
pub use units::concentration_to_atoms;
