pub mod chart;
pub mod simulation;
