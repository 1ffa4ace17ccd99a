use thiserror::Error;

/// Errors raised while laying out, drawing or exporting the comparison chart
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Metric series '{series}' is empty")]
    EmptySeries { series: String },

    #[error("Series length mismatch: '{left}' has {left_len} metrics, '{right}' has {right_len}")]
    SeriesLengthMismatch {
        left: String,
        left_len: usize,
        right: String,
        right_len: usize,
    },

    #[error("Non-finite value for metric '{metric}' in series '{series}': {value}")]
    NonFiniteValue {
        series: String,
        metric: String,
        value: f64,
    },

    #[error("Drawing failed: {reason}")]
    Drawing { reason: String },

    #[error("PNG encoding failed: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to UN-EX model inputs
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("{name} = {value} is outside the allowed range [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{name} must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}
