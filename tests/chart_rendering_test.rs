use std::fs::File;
use std::path::{Path, PathBuf};
use unex::application::chart::comparison::{baseline_series, tuned_series};
use unex::application::chart::layout::{ChartLayout, SeriesKind};
use unex::application::chart::render_comparison;
use unex::config::ChartConfig;
use unex::domain::errors::ChartError;
use unex::domain::metrics::{MetricSeries, pair_series};
use unex::infrastructure::png_export::{RasterImage, write_png};

fn fixed_layout() -> ChartLayout {
    let groups = pair_series(&baseline_series(), &tuned_series()).unwrap();
    ChartLayout::build(&groups, &ChartConfig::default())
}

fn png_info(path: &Path) -> (u32, u32, Option<png::PixelDimensions>) {
    let decoder = png::Decoder::new(File::open(path).unwrap());
    let reader = decoder.read_info().unwrap();
    let info = reader.info();
    (info.width, info.height, info.pixel_dims)
}

/// Render into `dir`, or return `None` when the host has no usable font.
/// Any other failure fails the test.
fn render_or_skip(tuned: &MetricSeries, dir: &Path) -> Option<PathBuf> {
    match render_comparison(&baseline_series(), tuned, &ChartConfig::default(), dir) {
        Ok(path) => Some(path),
        Err(ChartError::Drawing { reason }) => {
            eprintln!("skipping: no usable font backend ({})", reason);
            None
        }
        Err(e) => panic!("render failed: {}", e),
    }
}

#[test]
fn test_fixed_annotations_are_two_decimal_values() {
    let layout = fixed_layout();
    assert_eq!(
        layout.annotations(),
        vec!["5.81", "1.73", "1.73", "4.01", "2.50", "2.50"]
    );
}

#[test]
fn test_three_slots_with_two_bars_each() {
    let layout = fixed_layout();
    assert_eq!(layout.slot_count(), 3);
    for slot in 0..layout.slot_count() {
        let in_slot: Vec<SeriesKind> = layout
            .bars
            .iter()
            .filter(|b| b.slot == slot)
            .map(|b| b.kind)
            .collect();
        assert_eq!(in_slot, vec![SeriesKind::Baseline, SeriesKind::Tuned]);
    }
}

#[test]
fn test_category_ticks_use_metric_names() {
    let layout = fixed_layout();
    let names: Vec<String> = (0..3).map(|i| layout.category_label(i as f64)).collect();
    let expected: Vec<String> = baseline_series()
        .metric_names()
        .map(str::to_string)
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn test_length_mismatch_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let short = MetricSeries::from_pairs("Tuned", &[("only", 1.0)]);

    let result = render_comparison(&baseline_series(), &short, &ChartConfig::default(), dir.path());

    assert!(matches!(
        result,
        Err(ChartError::SeriesLengthMismatch { .. })
    ));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_write_into_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir
        .path()
        .join("does-not-exist")
        .join("unex_performance_comparison.png");
    let image = RasterImage::filled(4, 4, [255, 255, 255]);

    let result = write_png(&image, 300, &target);

    match result {
        Err(ChartError::Io { path, .. }) => assert_eq!(path, target.display().to_string()),
        other => panic!("expected Io error, got {:?}", other),
    }
    assert!(!target.exists());
}

#[test]
fn test_renders_one_png_at_300_dpi() {
    let dir = tempfile::tempdir().unwrap();
    let Some(path) = render_or_skip(&tuned_series(), dir.path()) else {
        return;
    };

    let entries: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(entries, vec!["unex_performance_comparison.png".to_string()]);

    let (width, height, dims) = png_info(&path);
    let (canvas_w, canvas_h) = ChartConfig::default().canvas_size();
    assert!(width > 0 && width <= canvas_w);
    assert!(height > 0 && height <= canvas_h);
    let dims = dims.expect("pHYs chunk");
    assert_eq!((dims.xppu, dims.yppu), (11811, 11811));
}

#[test]
fn test_rerender_keeps_pixel_dimensions() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();

    let Some(a) = render_or_skip(&tuned_series(), first.path()) else {
        return;
    };
    let Some(b) = render_or_skip(&tuned_series(), second.path()) else {
        return;
    };

    let (aw, ah, _) = png_info(&a);
    let (bw, bh, _) = png_info(&b);
    assert_eq!((aw, ah), (bw, bh));
}

#[test]
fn test_mismatched_metric_names_still_render() {
    let dir = tempfile::tempdir().unwrap();
    let renamed = MetricSeries::from_pairs("Tuned", &[("a", 4.01), ("b", 2.5), ("c", 2.5)]);

    let Some(path) = render_or_skip(&renamed, dir.path()) else {
        return;
    };

    assert!(path.exists());
}
