pub mod unex_model;

pub use unex_model::{ModelCoefficients, PlasmaParameters};
