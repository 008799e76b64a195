//! Named ambient-concentration presets.
//!
//! Reference radon levels a run can be pointed at instead of a raw Bq/m³
//! figure, spanning the nine orders of magnitude between a radio-pure
//! underground lab and the worst residential reading on record.

/// Reference ambient radon concentrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmbientPreset {
    /// Typical outdoor air.
    Outdoors,

    /// US EPA action level (≈ 4 pCi/L).
    EpaActionLevel,

    /// Poorly ventilated uranium mine workings.
    UraniumMine,

    /// The 1984 Stanley Watras basement reading.
    WatrasBasement,

    /// Radio-pure air in an underground dark-matter laboratory.
    DarkMatterLab,
}

impl AmbientPreset {
    /// Returns a list of all presets.
    pub fn all() -> Vec<AmbientPreset> {
        vec![
            AmbientPreset::Outdoors,
            AmbientPreset::EpaActionLevel,
            AmbientPreset::UraniumMine,
            AmbientPreset::WatrasBasement,
            AmbientPreset::DarkMatterLab,
        ]
    }

    /// Ambient concentration, Bq/m³.
    pub fn concentration_bq_m3(&self) -> f64 {
        match self {
            AmbientPreset::Outdoors => 10.0,
            AmbientPreset::EpaActionLevel => 148.0,
            AmbientPreset::UraniumMine => 10_000.0,
            AmbientPreset::WatrasBasement => 100_000.0,
            AmbientPreset::DarkMatterLab => 0.001,
        }
    }

    /// Returns the preset name.
    pub fn name(&self) -> &'static str {
        match self {
            AmbientPreset::Outdoors => "outdoors",
            AmbientPreset::EpaActionLevel => "epa_action_level",
            AmbientPreset::UraniumMine => "uranium_mine",
            AmbientPreset::WatrasBasement => "watras_basement",
            AmbientPreset::DarkMatterLab => "dark_matter_lab",
        }
    }

    /// Returns a description of the preset.
    pub fn description(&self) -> &'static str {
        match self {
            AmbientPreset::Outdoors => "Typical outdoor air, ~10 Bq/m³",
            AmbientPreset::EpaActionLevel => "EPA action level, ~148 Bq/m³ (≈4 pCi/L)",
            AmbientPreset::UraniumMine => "Uranium mine workings, >10,000 Bq/m³",
            AmbientPreset::WatrasBasement => "Stanley Watras' basement, >100,000 Bq/m³",
            AmbientPreset::DarkMatterLab => "Dark matter lab air, <0.001 Bq/m³",
        }
    }
}

impl std::fmt::Display for AmbientPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for AmbientPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "outdoors" | "outdoor" => Ok(AmbientPreset::Outdoors),
            "epa_action_level" | "epa" => Ok(AmbientPreset::EpaActionLevel),
            "uranium_mine" | "mine" => Ok(AmbientPreset::UraniumMine),
            "watras_basement" | "watras" => Ok(AmbientPreset::WatrasBasement),
            "dark_matter_lab" | "lab" => Ok(AmbientPreset::DarkMatterLab),
            _ => Err(format!("Unknown preset: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_parsing() {
        assert_eq!("outdoors".parse::<AmbientPreset>(), Ok(AmbientPreset::Outdoors));
        assert_eq!("watras".parse::<AmbientPreset>(), Ok(AmbientPreset::WatrasBasement));
        assert!("venus".parse::<AmbientPreset>().is_err());
    }

    #[test]
    fn test_presets_span_expected_range() {
        for preset in AmbientPreset::all() {
            assert!(preset.concentration_bq_m3() > 0.0);
        }
        assert!(
            AmbientPreset::DarkMatterLab.concentration_bq_m3()
                < AmbientPreset::Outdoors.concentration_bq_m3()
        );
        assert!(
            AmbientPreset::Outdoors.concentration_bq_m3()
                < AmbientPreset::WatrasBasement.concentration_bq_m3()
        );
    }
}
