use super::layout::{ChartLayout, SeriesKind, legend_row};
use crate::config::{ChartConfig, SeriesStyle};
use crate::domain::errors::ChartError;
use crate::infrastructure::png_export::RasterImage;
use plotters::coord::Shift;
use plotters::coord::ranged1d::Ranged;
use plotters::element::DashedPathElement;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

const FONT: &str = "sans-serif";
const GRID_GRAY: RGBColor = RGBColor(176, 176, 176);

/// Canvas background; the exporter crops everything of this colour at the edges.
pub const BACKGROUND: [u8; 3] = [255, 255, 255];

/// Render the chart into an in-memory RGB canvas of `cfg.canvas_size()`.
pub fn render_to_raster(layout: &ChartLayout, cfg: &ChartConfig) -> Result<RasterImage, ChartError> {
    let (width, height) = cfg.canvas_size();
    let mut pixels = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
        draw_chart(&root, layout, cfg).map_err(drawing_error)?;
        root.present().map_err(drawing_error)?;
    }
    Ok(RasterImage {
        width,
        height,
        pixels,
    })
}

fn drawing_error<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Drawing {
        reason: e.to_string(),
    }
}

fn series_color(style: &SeriesStyle) -> RGBColor {
    let (r, g, b) = style.rgb;
    RGBColor(r, g, b)
}

/// Draw the grouped bar chart onto any plotters backend.
pub fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    layout: &ChartLayout,
    cfg: &ChartConfig,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let [r, g, b] = BACKGROUND;
    root.fill(&RGBColor(r, g, b))?;

    let font_px = cfg.points_to_px(cfg.font_size_pt);
    let title_px = cfg.points_to_px(cfg.title_font_size_pt);
    let margin = font_px.round() as u32;

    let mut chart = ChartBuilder::on(root)
        .caption(&cfg.title, (FONT, title_px))
        .margin(margin)
        .x_label_area_size((font_px * 3.0).round() as u32)
        .y_label_area_size((font_px * 5.0).round() as u32)
        .build_cartesian_2d(layout.x_range.clone(), layout.y_range.clone())?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(layout.slot_count())
        .x_label_formatter(&|x| layout.category_label(*x))
        .y_labels(cfg.y_ticks)
        .y_label_formatter(&|y| format!("{:.1}", y))
        .y_desc(cfg.y_label.as_str())
        .label_style((FONT, font_px))
        .axis_desc_style((FONT, font_px))
        .draw()?;

    // Dashed horizontal grid on the value axis key points, beneath the bars
    let grid_style = GRID_GRAY
        .mix(cfg.grid_opacity)
        .stroke_width(cfg.points_to_px(0.8).round().max(1.0) as u32);
    let dash = cfg.points_to_px(3.7).round() as u32;
    let gap = cfg.points_to_px(1.6).round() as u32;
    let y_ticks = chart.as_coord_spec().y_spec().key_points(cfg.y_ticks);
    chart.draw_series(y_ticks.into_iter().map(|y| {
        DashedPathElement::new(
            vec![(layout.x_range.start, y), (layout.x_range.end, y)],
            dash,
            gap,
            grid_style,
        )
    }))?;

    for (kind, style) in [
        (SeriesKind::Baseline, &cfg.baseline),
        (SeriesKind::Tuned, &cfg.tuned),
    ] {
        let color = series_color(style);
        chart.draw_series(layout.bars_of(kind).map(|bar| {
            Rectangle::new([(bar.x_left, 0.0), (bar.x_right, bar.height)], color.filled())
        }))?;
    }

    // Value labels centred a fixed number of points above each bar
    let offset = cfg.points_to_px(cfg.annotation_offset_pt).round() as i32;
    let annotation_style =
        TextStyle::from((FONT, font_px).into_font()).pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(layout.bars.iter().map(|bar| {
        EmptyElement::at((bar.x_center, bar.height))
            + Text::new(bar.label.clone(), (0, -offset), annotation_style.clone())
    }))?;

    // Horizontal legend: one row in the plot's upper right corner
    let swatch = font_px.round() as i32;
    let pad = swatch / 2;
    let legend_style =
        TextStyle::from((FONT, font_px).into_font()).pos(Pos::new(HPos::Left, VPos::Center));
    let mut measured = Vec::with_capacity(2);
    for (kind, style) in [
        (SeriesKind::Baseline, &cfg.baseline),
        (SeriesKind::Tuned, &cfg.tuned),
    ] {
        let (text_width, _) = root.estimate_text_size(&style.label, &legend_style)?;
        measured.push((kind, style.label.as_str(), text_width as i32));
    }

    let (x_px, y_px) = chart.plotting_area().get_pixel_range();
    let row = legend_row(&measured, x_px.end - pad * 2, y_px.start + pad * 2 + swatch / 2, swatch);
    if let Some(first) = row.first() {
        let frame = [
            (first.x - pad, first.y - swatch / 2 - pad),
            (x_px.end - pad, first.y + swatch / 2 + pad),
        ];
        root.draw(&Rectangle::new(frame, WHITE.mix(0.8).filled()))?;
        root.draw(&Rectangle::new(frame, BLACK.mix(0.3)))?;
    }
    for entry in &row {
        let color = match entry.kind {
            SeriesKind::Baseline => series_color(&cfg.baseline),
            SeriesKind::Tuned => series_color(&cfg.tuned),
        };
        root.draw(
            &(EmptyElement::at((entry.x, entry.y))
                + Rectangle::new([(0, -swatch / 2), (swatch * 2, swatch / 2)], color.filled())
                + Text::new(entry.label.clone(), (swatch * 2 + swatch / 2, 0), legend_style.clone())),
        )?;
    }

    Ok(())
}
