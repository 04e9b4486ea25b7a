//! Headless runner for the skirmish simulation.
//!
//! Builds the two-craft pursuit scenario from command-line arguments,
//! runs it to resolution, and prints the result. `--json` dumps the
//! full report to stdout for the external trajectory renderer.

use clap::Parser;

use skirmish_core::enums::{CraftMode, Outcome};
use skirmish_core::types::Vec3;
use skirmish_sim::engine::{ScenarioConfig, Simulation};

/// Two-craft pursuit: a neutral drifter chased by an offense pursuer.
#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(about = "Headless 3D craft engagement simulation", long_about = None)]
struct Args {
    /// Sight half-angle threshold in radians
    #[arg(long, default_value_t = 0.1)]
    alpha: f64,

    /// Engagement range threshold
    #[arg(long, default_value_t = 0.2)]
    beta: f64,

    /// Drifter speed (per-step displacement)
    #[arg(long, default_value_t = 2.0)]
    drifter_speed: f64,

    /// Pursuer speed (per-step displacement)
    #[arg(long, default_value_t = 1.0)]
    pursuer_speed: f64,

    /// Drifter starting position as x,y,z
    #[arg(long, default_value = "10,0,0", value_parser = parse_vec3)]
    drifter_at: Vec3,

    /// Pursuer starting position as x,y,z
    #[arg(long, default_value = "0,0,0", value_parser = parse_vec3)]
    pursuer_at: Vec3,

    /// Step budget
    #[arg(short, long, default_value_t = 10)]
    time_limit: u32,

    /// RNG seed for drift initialisation
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Dump the full report as JSON to stdout
    #[arg(long)]
    json: bool,
}

fn parse_vec3(raw: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = raw.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z, got `{raw}`"));
    }
    let mut xyz = [0.0; 3];
    for (slot, part) in xyz.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("bad component `{part}`: {e}"))?;
    }
    Ok(Vec3::new(xyz[0], xyz[1], xyz[2]))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = ScenarioConfig {
        alpha: args.alpha,
        beta: args.beta,
        speeds: vec![args.drifter_speed, args.pursuer_speed],
        modes: vec![CraftMode::Neutral, CraftMode::Offense],
        positions: vec![args.drifter_at, args.pursuer_at],
        time_limit: args.time_limit,
        seed: args.seed,
    };

    let report = Simulation::new(config)?.run()?;

    if args.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        let result = match report.outcome {
            Outcome::Peace => "peace",
            Outcome::Destruction => "destruction",
        };
        println!(
            "simulation resolved at step {}, resulting in {result}",
            report.end_step
        );
    }

    Ok(())
}
