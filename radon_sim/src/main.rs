//! Radon Measurement Simulator CLI
//!
//! Run simulated measurement protocols against a configurable ambient
//! radon level and print the per-cycle concentration estimates.

use clap::Parser;
use radon_core::{DetectorMode, SamplingMethod};
use radon_sim::{AmbientPreset, RunExport, SimulationConfig, SimulationRunner};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Radon decay-chain measurement simulator
#[derive(Parser, Debug)]
#[command(name = "radon-sim")]
#[command(about = "Simulate a radon monitor measurement run", long_about = None)]
struct Args {
    /// Ambient radon concentration in Bq/m³
    #[arg(short, long, default_value = "200")]
    concentration: f64,

    /// Named ambient preset (outdoors, epa_action_level, uranium_mine,
    /// watras_basement, dark_matter_lab); overrides --concentration
    #[arg(short, long)]
    preset: Option<String>,

    /// Let the radon source deplete instead of holding it constant
    #[arg(long)]
    depleting_source: bool,

    /// Cycle time in minutes
    #[arg(long, default_value = "15")]
    cycle: f64,

    /// Total measurement time in minutes
    #[arg(short, long, default_value = "180")]
    duration: f64,

    /// Detector mode (sniff, normal, auto)
    #[arg(short, long, default_value = "sniff")]
    mode: String,

    /// Decay sampling method (binomial, atom)
    #[arg(long, default_value = "binomial")]
    method: String,

    /// Master seed for determinism
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// JSON summary on stdout instead of the log table
    #[arg(long)]
    json: bool,

    /// Export the full run (cycle table + step series) to a JSON file
    #[arg(long)]
    export: Option<String>,
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let mode: DetectorMode = args.mode.parse().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Available modes: sniff, normal, auto");
        std::process::exit(1);
    });

    let method: SamplingMethod = args.method.parse().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Available methods: binomial, atom");
        std::process::exit(1);
    });

    let ambient_bq_m3 = match &args.preset {
        Some(name) => {
            let preset: AmbientPreset = name.parse().unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                eprintln!(
                    "Available presets: {}",
                    AmbientPreset::all()
                        .iter()
                        .map(AmbientPreset::name)
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                std::process::exit(1);
            });
            info!("Preset {}: {}", preset, preset.description());
            preset.concentration_bq_m3()
        }
        None => args.concentration,
    };

    let config = SimulationConfig {
        ambient_bq_m3,
        continuous_source: !args.depleting_source,
        cycle_secs: args.cycle * 60.0,
        duration_secs: args.duration * 60.0,
        mode,
        method,
        seed: args.seed,
        ..Default::default()
    };

    let runner = SimulationRunner::new(config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let result = runner.run();

    if args.json {
        // JSON output for scripting
        let summary = serde_json::json!({
            "run_id": result.run_id,
            "seed": result.config.seed,
            "ambient_bq_m3": result.config.ambient_bq_m3,
            "mode": result.config.mode.name(),
            "elapsed_secs": result.elapsed_secs,
            "cycles": result.cycles.iter().map(|c| {
                serde_json::json!({
                    "time_mins": c.time_mins,
                    "cpm_po218": c.cpm_po218,
                    "cpm_po214": c.cpm_po214,
                    "radon_bq_m3": c.radon,
                    "radon_2sigma": c.radon_2sigma,
                    "mode": c.mode.name(),
                })
            }).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&summary).unwrap());
    } else {
        info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        info!(
            "{:>8} {:>12} {:>12} {:>16} {:>12}",
            "t (min)", "Po218 CPM", "Po214 CPM", "radon (Bq/m³)", "±2σ"
        );
        for record in &result.cycles {
            info!(
                "{:>8.0} {:>12.2} {:>12.2} {:>16.1} {:>12.1}",
                record.time_mins,
                record.cpm_po218,
                record.cpm_po214,
                record.radon,
                record.radon_2sigma
            );
        }
        info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        if result.cycles.is_empty() {
            info!("No completed cycles: duration shorter than one cycle");
        }
    }

    if let Some(export_path) = &args.export {
        let export = RunExport::from_result(&result);
        if let Err(e) = export.write_to_file(export_path) {
            error!("Failed to write export: {:?}", e);
            std::process::exit(1);
        }
        info!("Exported {} cycles to {}", export.cycle_count, export_path);
    }
}
