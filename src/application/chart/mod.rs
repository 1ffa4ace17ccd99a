//! Baseline vs. Tuned grouped bar chart.
//!
//! Pipeline: pair the two series into bar groups, lay them out, draw into an
//! in-memory canvas, crop to content and write a 300 DPI PNG.

pub mod comparison;
pub mod layout;
pub mod renderer;

use crate::config::ChartConfig;
use crate::domain::errors::ChartError;
use crate::domain::metrics::{MetricSeries, pair_series};
use crate::infrastructure::observability::StageTimer;
use crate::infrastructure::png_export::write_png;
use layout::ChartLayout;
use std::path::{Path, PathBuf};
use tracing::info;

/// Render `baseline` vs `tuned` and write the image into `out_dir`.
///
/// Returns the path of the written file.
pub fn render_comparison(
    baseline: &MetricSeries,
    tuned: &MetricSeries,
    cfg: &ChartConfig,
    out_dir: &Path,
) -> Result<PathBuf, ChartError> {
    let groups = pair_series(baseline, tuned)?;
    let layout = ChartLayout::build(&groups, cfg);
    info!(
        "Rendering {} bar groups ({} bars) at {} DPI",
        layout.slot_count(),
        layout.bars.len(),
        cfg.dpi
    );

    let canvas = {
        let _timer = StageTimer::new("render");
        renderer::render_to_raster(&layout, cfg)?
    };

    let image = {
        let _timer = StageTimer::new("crop");
        canvas.crop_to_content(renderer::BACKGROUND, cfg.crop_padding_px())
    };

    let path = cfg.output_path(out_dir);
    {
        let _timer = StageTimer::new("export");
        write_png(&image, cfg.dpi, &path)?;
    }
    info!(
        "Wrote {}x{} image to {}",
        image.width,
        image.height,
        path.display()
    );
    Ok(path)
}
