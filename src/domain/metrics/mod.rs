pub mod bar_group;
pub mod series;

pub use bar_group::{BarGroup, pair_series};
pub use series::MetricSeries;
