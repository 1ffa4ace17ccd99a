//! UN-EX performance chart
//!
//! Renders the fixed Baseline vs. Tuned metrics as a grouped bar chart and
//! writes `unex_performance_comparison.png` (300 DPI, tight-cropped) to the
//! current directory. Takes no arguments.

use anyhow::{Context, Result};
use unex::application::chart::comparison::{baseline_series, tuned_series};
use unex::application::chart::render_comparison;
use unex::config::ChartConfig;
use unex::infrastructure::observability::init_tracing;

fn main() -> Result<()> {
    init_tracing();

    let config = ChartConfig::default();
    let out_dir = std::env::current_dir().context("Failed to resolve working directory")?;

    render_comparison(&baseline_series(), &tuned_series(), &config, &out_dir)
        .with_context(|| format!("Failed to render {}", config.output_file))?;

    println!("Graph saved as {}", config.output_file);
    Ok(())
}
