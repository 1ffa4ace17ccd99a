//! UN-EX Fusion Simulator
//!
//! Evaluates the UN-EX diffusion model for one set of plasma parameters and
//! compares its energy confinement time with Bohm and neoclassical scaling.
//!
//! # Usage
//! ```sh
//! cargo run --bin unex-sim -- --temperature 12 --harmonic-energy 2.5
//! cargo run --bin unex-sim -- --json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use unex::application::simulation::simulate;
use unex::domain::physics::{ModelCoefficients, PlasmaParameters};
use unex::infrastructure::observability::init_tracing;

#[derive(Parser)]
#[command(author, version, about = "UN-EX Fusion Simulator", long_about = None)]
struct Cli {
    /// Plasma temperature T [keV] (1.0-50.0)
    #[arg(long, default_value_t = 10.0)]
    temperature: f64,

    /// Magnetic field B [T] (0.5-20.0)
    #[arg(long, default_value_t = 5.0)]
    magnetic_field: f64,

    /// Harmonic feedback energy (0.0-10.0)
    #[arg(long, default_value_t = 1.0)]
    harmonic_energy: f64,

    /// Local entropy proxy S, normalized turbulence (0.0-1.0)
    #[arg(long, default_value_t = 0.5)]
    local_entropy: f64,

    /// Coefficient alpha for the T/B term (0.1-10.0)
    #[arg(long, default_value_t = 1.0)]
    alpha: f64,

    /// Coefficient beta for the harmonic energy term (0.0-5.0)
    #[arg(long, default_value_t = 1.0)]
    beta: f64,

    /// Coefficient gamma for the entropy term (0.0-5.0)
    #[arg(long, default_value_t = 1.0)]
    gamma: f64,

    /// Small stability constant delta (0.001-0.1)
    #[arg(long, default_value_t = 0.01)]
    delta: f64,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn parameters(&self) -> PlasmaParameters {
        PlasmaParameters {
            temperature_kev: self.temperature,
            magnetic_field_t: self.magnetic_field,
            harmonic_energy: self.harmonic_energy,
            local_entropy: self.local_entropy,
        }
    }

    fn coefficients(&self) -> ModelCoefficients {
        ModelCoefficients {
            alpha: self.alpha,
            beta: self.beta,
            gamma: self.gamma,
            delta: self.delta,
        }
    }
}

fn main() -> Result<()> {
    // .env may carry RUST_LOG
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    info!("UN-EX simulator {} starting", env!("CARGO_PKG_VERSION"));

    let report =
        simulate(cli.parameters(), cli.coefficients()).context("Invalid simulation parameters")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        for line in report.summary_lines() {
            println!("{}", line);
        }
    }
    Ok(())
}
