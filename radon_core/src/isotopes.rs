//! Isotope registry for the Rn222 decay chain.
//!
//! Fixed physical constants for the six-isotope chain
//! Rn222 → Po218 → Pb214 → Bi214 → Po214 → Pb210. Half-lives are empirical
//! values in seconds; decay constants are derived as λ = ln2 / T½.

use serde::{Deserialize, Serialize};

/// Number of isotopes in the simulated chain.
pub const CHAIN_LEN: usize = 6;

/// One isotope of the radon decay chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Isotope {
    /// Radon-222, the chain head (gas phase).
    Rn222,

    /// Polonium-218, first alpha-emitting progeny.
    Po218,

    /// Lead-214.
    Pb214,

    /// Bismuth-214 (beta emitter, invisible to the alpha counter).
    Bi214,

    /// Polonium-214, second alpha-emitting progeny.
    Po214,

    /// Lead-210, terminal for simulation purposes (~22 year half-life).
    Pb210,
}

/// The six isotopes in chain order. Decays of `CHAIN[i]` feed `CHAIN[i + 1]`.
pub const CHAIN: [Isotope; CHAIN_LEN] = [
    Isotope::Rn222,
    Isotope::Po218,
    Isotope::Pb214,
    Isotope::Bi214,
    Isotope::Po214,
    Isotope::Pb210,
];

impl Isotope {
    /// Half-life in seconds.
    pub fn half_life_secs(&self) -> f64 {
        match self {
            Isotope::Rn222 => 3.3035e5,
            Isotope::Po218 => 185.88,
            Isotope::Pb214 => 1608.0,
            Isotope::Bi214 => 1194.0,
            Isotope::Po214 => 1.643e-4,
            Isotope::Pb210 => 7.0325e8,
        }
    }

    /// Decay constant λ = ln2 / half-life, per second.
    pub fn decay_constant(&self) -> f64 {
        std::f64::consts::LN_2 / self.half_life_secs()
    }

    /// Position in the chain (0 = Rn222 ... 5 = Pb210).
    pub fn chain_index(&self) -> usize {
        *self as usize
    }

    /// The isotope this one decays into, if it is still within the chain.
    pub fn daughter(&self) -> Option<Isotope> {
        CHAIN.get(self.chain_index() + 1).copied()
    }

    /// Short display name.
    pub fn name(&self) -> &'static str {
        match self {
            Isotope::Rn222 => "Rn222",
            Isotope::Po218 => "Po218",
            Isotope::Pb214 => "Pb214",
            Isotope::Bi214 => "Bi214",
            Isotope::Po214 => "Po214",
            Isotope::Pb210 => "Pb210",
        }
    }
}

impl std::fmt::Display for Isotope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_chain_order() {
        assert_eq!(CHAIN[0], Isotope::Rn222);
        assert_eq!(CHAIN[5], Isotope::Pb210);

        for (i, isotope) in CHAIN.iter().enumerate() {
            assert_eq!(isotope.chain_index(), i);
        }

        let names: Vec<&str> = CHAIN.iter().map(|i| i.name()).collect();
        assert_eq!(
            names,
            ["Rn222", "Po218", "Pb214", "Bi214", "Po214", "Pb210"]
        );
    }

    #[test]
    fn test_daughter_navigation() {
        assert_eq!(Isotope::Rn222.daughter(), Some(Isotope::Po218));
        assert_eq!(Isotope::Po214.daughter(), Some(Isotope::Pb210));
        assert_eq!(Isotope::Pb210.daughter(), None);
    }

    #[test]
    fn test_decay_constants() {
        // λ = ln2 / T½; Rn222 is the value the unit converter depends on
        assert_relative_eq!(
            Isotope::Rn222.decay_constant(),
            2.0982e-6,
            max_relative = 1e-4
        );

        // Po214 is the fast extreme: λ·dt ≫ 1 for any practical time step
        assert!(Isotope::Po214.decay_constant() > 4000.0);
    }
}
