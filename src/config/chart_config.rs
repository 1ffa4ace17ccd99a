use std::path::{Path, PathBuf};

/// Legend label and fill colour for one series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStyle {
    pub label: String,
    pub rgb: (u8, u8, u8),
}

/// Fixed rendering constants for the comparison chart.
///
/// There is no loader: the chart is not configurable, so the only way to
/// build one is `ChartConfig::default()`. Tests adjust fields directly.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub output_file: String,
    pub dpi: u32,
    /// Figure size in inches (width, height)
    pub figure_size_in: (f64, f64),
    /// Bar width in category units; each bar sits half a width from the slot centre
    pub bar_width: f64,
    pub title: String,
    pub y_label: String,
    pub baseline: SeriesStyle,
    pub tuned: SeriesStyle,
    pub grid_opacity: f64,
    /// Vertical gap between a bar top and its value label, in points
    pub annotation_offset_pt: f64,
    pub font_size_pt: f64,
    pub title_font_size_pt: f64,
    /// Padding kept around the cropped content, in inches
    pub crop_pad_in: f64,
    /// Value axis top as a multiple of the tallest bar
    pub headroom: f64,
    pub y_ticks: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            output_file: "unex_performance_comparison.png".to_string(),
            dpi: 300,
            figure_size_in: (10.0, 6.0),
            bar_width: 0.35,
            title: "UN-EX Performance: Baseline vs Tuned".to_string(),
            y_label: "Value".to_string(),
            baseline: SeriesStyle {
                label: "Baseline".to_string(),
                rgb: (135, 206, 235),
            },
            tuned: SeriesStyle {
                label: "Tuned".to_string(),
                rgb: (250, 128, 114),
            },
            grid_opacity: 0.7,
            annotation_offset_pt: 3.0,
            font_size_pt: 10.0,
            title_font_size_pt: 14.0,
            crop_pad_in: 0.1,
            headroom: 1.15,
            y_ticks: 8,
        }
    }
}

impl ChartConfig {
    /// Canvas size in pixels before cropping.
    pub fn canvas_size(&self) -> (u32, u32) {
        let (w, h) = self.figure_size_in;
        (
            (w * self.dpi as f64).round() as u32,
            (h * self.dpi as f64).round() as u32,
        )
    }

    /// Convert typographic points (1/72 inch) to pixels at the configured DPI.
    pub fn points_to_px(&self, points: f64) -> f64 {
        points * self.dpi as f64 / 72.0
    }

    pub fn crop_padding_px(&self) -> u32 {
        (self.crop_pad_in * self.dpi as f64).round() as u32
    }

    pub fn output_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.output_file)
    }
}
