// Metric series and derived bar groups
pub mod metrics;

// UN-EX transport model
pub mod physics;

// Domain-specific error types
pub mod errors;
