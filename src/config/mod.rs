//! Configuration for the UN-EX tools.
//!
//! The chart is rendered from fixed constants; nothing is read from the
//! environment apart from `RUST_LOG`.

mod chart_config;

pub use chart_config::{ChartConfig, SeriesStyle};
