//! Concentration/population unit conversion.

/// Converts an ambient activity concentration into the integer atom count
/// initially present in the sensing chamber.
///
/// Activity in the chamber is `concentration × volume` (Bq); at the instant
/// of conversion activity equals N·λ, so N = activity / λ. Truncation is
/// intentional — populations are discrete atom counts.
pub fn concentration_to_atoms(
    concentration_bq_m3: f64,
    decay_constant: f64,
    chamber_volume_m3: f64,
) -> u64 {
    (chamber_volume_m3 * concentration_bq_m3 / decay_constant) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isotopes::Isotope;

    #[test]
    fn test_reference_chamber_conversion() {
        // 200 Bq/m³ in the 1 L reference chamber
        let lambda = Isotope::Rn222.decay_constant();
        let atoms = concentration_to_atoms(200.0, lambda, 1e-3);

        let expected = (1e-3 * 200.0 / lambda).floor() as u64;
        assert_eq!(atoms, expected);
        // λ ≈ 2.098e-6 s⁻¹ puts the count just above 95k atoms
        assert!((95_000..95_500).contains(&atoms));
    }

    #[test]
    fn test_truncates_toward_zero() {
        // N·λ slightly under the next integer must round down
        let atoms = concentration_to_atoms(1.0, 0.3, 1.0);
        assert_eq!(atoms, 3);
    }

    #[test]
    fn test_zero_concentration_is_empty_chamber() {
        let lambda = Isotope::Rn222.decay_constant();
        assert_eq!(concentration_to_atoms(0.0, lambda, 1e-3), 0);
    }
}
