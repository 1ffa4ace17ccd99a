use std::time::Instant;
use tracing::debug;

/// Timer for one pipeline stage (render, crop, encode).
///
/// Logs the elapsed time when dropped, so a stage is timed by holding the
/// timer for the length of a block.
///
/// # Example
///
/// ```
/// use unex::infrastructure::observability::StageTimer;
///
/// {
///     let _timer = StageTimer::new("render");
///     // ... draw ...
/// } // elapsed time logged here
/// ```
pub struct StageTimer {
    start: Instant,
    label: String,
}

impl StageTimer {
    pub fn new(label: &str) -> Self {
        debug!("Starting stage: {}", label);
        Self {
            start: Instant::now(),
            label: label.to_string(),
        }
    }

    pub fn elapsed_millis(&self) -> u128 {
        self.start.elapsed().as_millis()
    }
}

impl Drop for StageTimer {
    fn drop(&mut self) {
        debug!("Completed stage: {} in {}ms", self.label, self.elapsed_millis());
    }
}
