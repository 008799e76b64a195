//! Cycle aggregation: detected counts → counts-per-minute → estimated
//! radon concentration with a Poisson-counting uncertainty bound.
//!
//! The detector registers the alpha decays of Po218 (6.00 MeV window) and
//! Po214 (7.69 MeV window). Sniff mode reads only the short-lived Po218
//! channel for fast response; Normal mode reads both once secular
//! equilibrium with Po214 is approached; Auto starts in Sniff and switches
//! to Normal after a fixed elapsed-time threshold.

use serde::{Deserialize, Serialize};

/// Counts-per-minute sensitivity in normal (two-progeny) mode.
pub const NORMAL_SENSITIVITY: f64 = 0.014;

/// Counts-per-minute sensitivity in sniff (Po218-only) mode.
pub const SNIFF_SENSITIVITY: f64 = 0.0068;

/// Empirical instrument scale factor.
pub const CALIBRATION_FACTOR: f64 = 8.7;

/// Elapsed time after which Auto mode switches from Sniff to Normal (3 h).
pub const AUTO_SNIFF_WINDOW_SECS: f64 = 10_800.0;

/// Detector operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetectorMode {
    /// Counts Po218 only; fast response, appropriate before the chamber
    /// approaches secular equilibrium.
    Sniff,

    /// Counts both alpha-emitting progeny; appropriate once equilibrium
    /// with Po214 is established.
    Normal,

    /// Sniff for the first three hours of a measurement, Normal after.
    Auto,
}

impl DetectorMode {
    /// Returns a list of all modes.
    pub fn all() -> Vec<DetectorMode> {
        vec![DetectorMode::Sniff, DetectorMode::Normal, DetectorMode::Auto]
    }

    /// Returns the mode name.
    pub fn name(&self) -> &'static str {
        match self {
            DetectorMode::Sniff => "sniff",
            DetectorMode::Normal => "normal",
            DetectorMode::Auto => "auto",
        }
    }

    /// Resolves Auto to the concrete mode in effect at the given elapsed
    /// time; Sniff and Normal resolve to themselves.
    pub fn resolve(&self, elapsed_secs: f64) -> DetectorMode {
        match self {
            DetectorMode::Auto => {
                if elapsed_secs <= AUTO_SNIFF_WINDOW_SECS {
                    DetectorMode::Sniff
                } else {
                    DetectorMode::Normal
                }
            }
            other => *other,
        }
    }
}

impl std::fmt::Display for DetectorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DetectorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sniff" => Ok(DetectorMode::Sniff),
            "normal" => Ok(DetectorMode::Normal),
            "auto" => Ok(DetectorMode::Auto),
            _ => Err(format!("Unknown detector mode: {}", s)),
        }
    }
}

/// Running decay-count sums for the current measurement cycle.
///
/// Exactly one exists per run, owned by the simulation loop: `record` once
/// per time step, `drain` once per cycle boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleAccumulator {
    po218: u64,
    po214: u64,
}

impl CycleAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one step's detected decay counts.
    pub fn record(&mut self, po218_decays: u64, po214_decays: u64) {
        self.po218 += po218_decays;
        self.po214 += po214_decays;
    }

    /// Returns the accumulated (Po218, Po214) sums and resets both to zero.
    pub fn drain(&mut self) -> (u64, u64) {
        let sums = (self.po218, self.po214);
        self.po218 = 0;
        self.po214 = 0;
        sums
    }
}

/// One emitted measurement: the aggregate of a completed cycle.
///
/// Both mode estimates are always carried — the display shell's table shows
/// all four concentration columns — alongside the headline values for the
/// configured mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleRecord {
    /// Simulated time at the end of the cycle, seconds.
    pub time_secs: f64,

    /// Same instant in minutes (the display shell's axis unit).
    pub time_mins: f64,

    /// Po218 counts per minute over the cycle.
    pub cpm_po218: f64,

    /// Po214 counts per minute over the cycle.
    pub cpm_po214: f64,

    /// Normal-mode concentration estimate, Bq/m³.
    pub radon_normal: f64,

    /// Normal-mode ±2σ bound, Bq/m³.
    pub radon_normal_2sigma: f64,

    /// Sniff-mode concentration estimate, Bq/m³.
    pub radon_sniff: f64,

    /// Sniff-mode ±2σ bound, Bq/m³.
    pub radon_sniff_2sigma: f64,

    /// Headline estimate under the configured mode, Bq/m³.
    pub radon: f64,

    /// Headline ±2σ bound, Bq/m³.
    pub radon_2sigma: f64,

    /// Mode the headline values were computed with (Auto resolved).
    pub mode: DetectorMode,
}

/// ±2σ Poisson-counting bound on a concentration estimate.
///
/// The `+ 1` keeps a zero-count cycle from claiming a zero-width interval.
fn two_sigma(total_counts: u64, sensitivity: f64, cycle_minutes: f64) -> f64 {
    2.0 * (1.0 + ((total_counts as f64) + 1.0).sqrt())
        / (sensitivity * CALIBRATION_FACTOR * cycle_minutes)
}

/// Converts one cycle's accumulated counts into a measurement record.
///
/// `cycle_minutes` must be positive; the simulation loop only reaches a
/// cycle boundary for positive cycle lengths. `cycle_end_secs` is the
/// elapsed simulated time at the boundary, which Auto mode uses to decide
/// between the Sniff and Normal formulas.
pub fn aggregate(
    po218_sum: u64,
    po214_sum: u64,
    cycle_minutes: f64,
    mode: DetectorMode,
    cycle_end_secs: f64,
) -> CycleRecord {
    let cpm_po218 = po218_sum as f64 / cycle_minutes;
    let cpm_po214 = po214_sum as f64 / cycle_minutes;

    let radon_sniff = cpm_po218 / (SNIFF_SENSITIVITY * CALIBRATION_FACTOR);
    let radon_normal = (cpm_po218 + cpm_po214) / (NORMAL_SENSITIVITY * CALIBRATION_FACTOR);
    let radon_sniff_2sigma = two_sigma(po218_sum, SNIFF_SENSITIVITY, cycle_minutes);
    let radon_normal_2sigma = two_sigma(po218_sum + po214_sum, NORMAL_SENSITIVITY, cycle_minutes);

    let resolved = mode.resolve(cycle_end_secs);
    let (radon, radon_2sigma) = match resolved {
        DetectorMode::Sniff => (radon_sniff, radon_sniff_2sigma),
        _ => (radon_normal, radon_normal_2sigma),
    };

    CycleRecord {
        time_secs: cycle_end_secs,
        time_mins: cycle_end_secs / 60.0,
        cpm_po218,
        cpm_po214,
        radon_normal,
        radon_normal_2sigma,
        radon_sniff,
        radon_sniff_2sigma,
        radon,
        radon_2sigma,
        mode: resolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_accumulator_record_and_drain() {
        let mut acc = CycleAccumulator::new();
        acc.record(10, 3);
        acc.record(5, 0);

        assert_eq!(acc.drain(), (15, 3));
        // Drained accumulator starts the next cycle from zero
        assert_eq!(acc.drain(), (0, 0));
    }

    #[test]
    fn test_cpm_and_estimates() {
        // 150 Po218 counts and 60 Po214 counts over a 15 minute cycle
        let record = aggregate(150, 60, 15.0, DetectorMode::Normal, 900.0);

        assert_relative_eq!(record.cpm_po218, 10.0);
        assert_relative_eq!(record.cpm_po214, 4.0);
        assert_relative_eq!(
            record.radon_sniff,
            10.0 / (SNIFF_SENSITIVITY * CALIBRATION_FACTOR),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            record.radon_normal,
            14.0 / (NORMAL_SENSITIVITY * CALIBRATION_FACTOR),
            max_relative = 1e-12
        );
        assert_eq!(record.mode, DetectorMode::Normal);
        assert_relative_eq!(record.radon, record.radon_normal);
    }

    #[test]
    fn test_two_sigma_formula() {
        let record = aggregate(150, 60, 15.0, DetectorMode::Sniff, 900.0);

        let expected_sniff =
            2.0 * (1.0 + (151.0f64).sqrt()) / (SNIFF_SENSITIVITY * CALIBRATION_FACTOR * 15.0);
        let expected_normal =
            2.0 * (1.0 + (211.0f64).sqrt()) / (NORMAL_SENSITIVITY * CALIBRATION_FACTOR * 15.0);

        assert_relative_eq!(record.radon_sniff_2sigma, expected_sniff, max_relative = 1e-12);
        assert_relative_eq!(record.radon_normal_2sigma, expected_normal, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_count_cycle_has_finite_width() {
        let record = aggregate(0, 0, 5.0, DetectorMode::Sniff, 300.0);

        assert_eq!(record.radon, 0.0);
        // The +1 guard keeps the interval from collapsing to zero width
        assert!(record.radon_2sigma > 0.0);
    }

    #[test]
    fn test_auto_mode_switch() {
        // At exactly the threshold, Auto still uses the Sniff formula
        let at_threshold = aggregate(100, 100, 5.0, DetectorMode::Auto, 10_800.0);
        assert_eq!(at_threshold.mode, DetectorMode::Sniff);
        assert_relative_eq!(at_threshold.radon, at_threshold.radon_sniff);
        assert_relative_eq!(at_threshold.radon_2sigma, at_threshold.radon_sniff_2sigma);

        // One cycle later it has switched to Normal
        let past_threshold = aggregate(100, 100, 5.0, DetectorMode::Auto, 10_860.0);
        assert_eq!(past_threshold.mode, DetectorMode::Normal);
        assert_relative_eq!(past_threshold.radon, past_threshold.radon_normal);
        assert_relative_eq!(past_threshold.radon_2sigma, past_threshold.radon_normal_2sigma);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("sniff".parse::<DetectorMode>(), Ok(DetectorMode::Sniff));
        assert_eq!("NORMAL".parse::<DetectorMode>(), Ok(DetectorMode::Normal));
        assert_eq!("auto".parse::<DetectorMode>(), Ok(DetectorMode::Auto));
        assert!("fast".parse::<DetectorMode>().is_err());

        for mode in DetectorMode::all() {
            assert_eq!(mode.name().parse::<DetectorMode>(), Ok(mode));
        }
    }
}
