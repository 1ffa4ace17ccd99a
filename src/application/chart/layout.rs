use crate::config::ChartConfig;
use crate::domain::metrics::BarGroup;
use std::ops::Range;

/// Space left between the outermost bars and the plot edge, in category units.
const X_MARGIN: f64 = 0.25;

/// Tolerance for deciding an axis key point sits on a category slot.
const SLOT_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Baseline,
    Tuned,
}

/// One drawable bar with its value annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSpec {
    pub kind: SeriesKind,
    pub slot: usize,
    pub x_center: f64,
    pub x_left: f64,
    pub x_right: f64,
    pub height: f64,
    pub label: String,
}

/// Everything the renderer needs, computed without touching a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub category_labels: Vec<String>,
    /// All baseline bars in slot order, then all tuned bars
    pub bars: Vec<BarSpec>,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
}

/// One legend swatch and its label, in backend pixels.
///
/// `x` is the swatch's left edge, `y` the row's vertical centre.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub kind: SeriesKind,
    pub label: String,
    pub x: i32,
    pub y: i32,
}

/// Lay legend entries out left to right in a single row whose right edge
/// is `right` and whose centre line is `y`.
///
/// Each entry is a `2 * swatch` wide colour box, a `swatch / 2` gap and its
/// label (`text_width` pixels); entries are separated by `swatch` pixels.
pub fn legend_row(
    entries: &[(SeriesKind, &str, i32)],
    right: i32,
    y: i32,
    swatch: i32,
) -> Vec<LegendEntry> {
    let entry_width = |text_width: i32| swatch * 2 + swatch / 2 + text_width;
    let total: i32 = entries.iter().map(|(_, _, w)| entry_width(*w)).sum::<i32>()
        + swatch * (entries.len() as i32 - 1).max(0);

    let mut x = right - total;
    entries
        .iter()
        .map(|(kind, label, text_width)| {
            let entry = LegendEntry {
                kind: *kind,
                label: label.to_string(),
                x,
                y,
            };
            x += entry_width(*text_width) + swatch;
            entry
        })
        .collect()
}

/// Value annotation text: always two decimal places.
pub fn format_value(value: f64) -> String {
    format!("{:.2}", value)
}

impl ChartLayout {
    pub fn build(groups: &[BarGroup], cfg: &ChartConfig) -> Self {
        let half = cfg.bar_width / 2.0;
        let bar = |kind: SeriesKind, group: &BarGroup| {
            let (x_center, height) = match kind {
                SeriesKind::Baseline => (group.baseline_x(cfg.bar_width), group.baseline),
                SeriesKind::Tuned => (group.tuned_x(cfg.bar_width), group.tuned),
            };
            BarSpec {
                kind,
                slot: group.slot,
                x_center,
                x_left: x_center - half,
                x_right: x_center + half,
                height,
                label: format_value(height),
            }
        };

        let mut bars = Vec::with_capacity(groups.len() * 2);
        for kind in [SeriesKind::Baseline, SeriesKind::Tuned] {
            bars.extend(groups.iter().map(|g| bar(kind, g)));
        }

        let last_slot = groups.len().saturating_sub(1) as f64;
        let edge = cfg.bar_width + X_MARGIN;
        let x_range = -edge..last_slot + edge;

        Self {
            category_labels: groups.iter().map(|g| g.metric.clone()).collect(),
            y_range: value_range(&bars, cfg.headroom),
            bars,
            x_range,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.category_labels.len()
    }

    /// Tick label for an x key point: the metric name on a slot, blank elsewhere.
    pub fn category_label(&self, x: f64) -> String {
        let nearest = x.round();
        if (x - nearest).abs() > SLOT_EPSILON || nearest < 0.0 {
            return String::new();
        }
        self.category_labels
            .get(nearest as usize)
            .cloned()
            .unwrap_or_default()
    }

    pub fn bars_of(&self, kind: SeriesKind) -> impl Iterator<Item = &BarSpec> {
        self.bars.iter().filter(move |b| b.kind == kind)
    }

    /// Annotation strings in drawing order.
    pub fn annotations(&self) -> Vec<&str> {
        self.bars.iter().map(|b| b.label.as_str()).collect()
    }
}

/// Value axis spanning zero and every bar, stretched by `headroom` so the
/// annotations above the tallest bar stay inside the plot.
fn value_range(bars: &[BarSpec], headroom: f64) -> Range<f64> {
    let top = bars.iter().map(|b| b.height).fold(0.0, f64::max) * headroom;
    let bottom = bars.iter().map(|b| b.height).fold(0.0, f64::min) * headroom;
    if top - bottom <= 0.0 {
        return 0.0..1.0;
    }
    bottom..top
}
