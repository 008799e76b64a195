//! Stochastic decay engine.
//!
//! Advances a single isotope population by one time step, splitting it into
//! survivors and decays. Sampling is either one binomial draw (production
//! mode, O(1) in population size) or one Bernoulli trial per atom
//! (reference mode, exact at the individual-particle level).

use rand::Rng;
use rand_distr::{Binomial, Distribution};
use serde::{Deserialize, Serialize};

/// How per-step decay counts are sampled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SamplingMethod {
    /// One draw from Binomial(N, p). Statistically equivalent to
    /// independent per-atom trials in mean and variance.
    #[default]
    Binomial,

    /// One Bernoulli trial per atom. O(N) per call; kept as a validation
    /// reference for the binomial mode.
    Atom,
}

impl SamplingMethod {
    /// Returns the method name.
    pub fn name(&self) -> &'static str {
        match self {
            SamplingMethod::Binomial => "binomial",
            SamplingMethod::Atom => "atom",
        }
    }
}

impl std::fmt::Display for SamplingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for SamplingMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "binomial" => Ok(SamplingMethod::Binomial),
            "atom" => Ok(SamplingMethod::Atom),
            _ => Err(format!("Unknown sampling method: {}", s)),
        }
    }
}

/// Result of one decay step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecayOutcome {
    /// Atoms remaining after the step.
    pub survivors: u64,

    /// Atoms that decayed during the step.
    pub decays: u64,
}

/// Per-atom decay probability for one step, clamped to [0, 1].
///
/// λ·dt is a first-order approximation of 1 − exp(−λ·dt). For half-lives
/// far shorter than the time step it exceeds 1, meaning the whole
/// population decays within the step; the clamp makes that a valid
/// probability rather than an error.
pub fn decay_probability(half_life_secs: f64, dt_secs: f64) -> f64 {
    let lambda = std::f64::consts::LN_2 / half_life_secs;
    (lambda * dt_secs).clamp(0.0, 1.0)
}

/// Advances a single isotope population by one time step.
///
/// Both methods satisfy `survivors + decays == population` exactly, and for
/// the same (N, p) their decay counts agree in mean and variance up to
/// Monte Carlo noise.
pub fn decay<R: Rng + ?Sized>(
    half_life_secs: f64,
    population: u64,
    dt_secs: f64,
    method: SamplingMethod,
    rng: &mut R,
) -> DecayOutcome {
    let p = decay_probability(half_life_secs, dt_secs);

    let decays = match method {
        SamplingMethod::Binomial => {
            let dist = Binomial::new(population, p)
                .expect("decay probability is clamped to [0, 1]");
            dist.sample(rng)
        }
        SamplingMethod::Atom => (0..population).filter(|_| rng.gen_bool(p)).count() as u64,
    };

    DecayOutcome {
        survivors: population - decays,
        decays,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isotopes::Isotope;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_probability_clamped() {
        // Po214 at a 60 s step: λ·dt ≈ 2.5e5, must clamp to exactly 1
        let p = decay_probability(Isotope::Po214.half_life_secs(), 60.0);
        assert_eq!(p, 1.0);

        // Pb210 at a 60 s step: λ·dt ≈ 5.9e-8, stays a tiny valid probability
        let p = decay_probability(Isotope::Pb210.half_life_secs(), 60.0);
        assert!(p > 0.0 && p < 1e-6);

        // Zero-length step decays nothing
        assert_eq!(decay_probability(1608.0, 0.0), 0.0);
    }

    #[test]
    fn test_conservation_both_methods() {
        let mut rng = StdRng::seed_from_u64(7);

        for &method in &[SamplingMethod::Binomial, SamplingMethod::Atom] {
            for &population in &[0u64, 1, 17, 5000] {
                let outcome = decay(185.88, population, 60.0, method, &mut rng);
                assert_eq!(outcome.survivors + outcome.decays, population);
            }
        }
    }

    #[test]
    fn test_saturated_probability_decays_everything() {
        let mut rng = StdRng::seed_from_u64(7);

        for &method in &[SamplingMethod::Binomial, SamplingMethod::Atom] {
            let outcome = decay(Isotope::Po214.half_life_secs(), 1234, 60.0, method, &mut rng);
            assert_eq!(outcome.decays, 1234);
            assert_eq!(outcome.survivors, 0);
        }
    }

    #[test]
    fn test_empty_population() {
        let mut rng = StdRng::seed_from_u64(7);

        for &method in &[SamplingMethod::Binomial, SamplingMethod::Atom] {
            let outcome = decay(185.88, 0, 60.0, method, &mut rng);
            assert_eq!(outcome.survivors, 0);
            assert_eq!(outcome.decays, 0);
        }
    }

    #[test]
    fn test_binomial_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        let a = decay(1608.0, 10_000, 60.0, SamplingMethod::Binomial, &mut rng1);
        let b = decay(1608.0, 10_000, 60.0, SamplingMethod::Binomial, &mut rng2);

        assert_eq!(a, b);
    }

    #[test]
    fn test_methods_statistically_equivalent() {
        // N = 10_000 with p ≈ 0.1: expected decays 1000, single-draw σ = 30.
        // Averaged over 200 repetitions the mean has σ ≈ 2.1, so the two
        // method means should land within a few counts of each other.
        let half_life = 60.0 * std::f64::consts::LN_2 / 0.1; // λ·dt = 0.1
        let reps = 200;
        let population = 10_000u64;

        let mut rng = StdRng::seed_from_u64(1234);
        let mean = |method: SamplingMethod, rng: &mut StdRng| -> f64 {
            let total: u64 = (0..reps)
                .map(|_| decay(half_life, population, 60.0, method, rng).decays)
                .sum();
            total as f64 / reps as f64
        };

        let binomial_mean = mean(SamplingMethod::Binomial, &mut rng);
        let atom_mean = mean(SamplingMethod::Atom, &mut rng);

        assert!((binomial_mean - 1000.0).abs() < 15.0, "binomial mean {}", binomial_mean);
        assert!((atom_mean - 1000.0).abs() < 15.0, "atom mean {}", atom_mean);
        assert!((binomial_mean - atom_mean).abs() < 25.0);
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!("binomial".parse::<SamplingMethod>(), Ok(SamplingMethod::Binomial));
        assert_eq!("Atom".parse::<SamplingMethod>(), Ok(SamplingMethod::Atom));
        assert!("poisson".parse::<SamplingMethod>().is_err());
    }
}
