//! UN-EX transport model.
//!
//! A linear diffusion model in which harmonic feedback energy suppresses
//! Bohm-like transport and local turbulence (the entropy proxy) adds to it.
//! Confinement times are compared with simplified Bohm and neoclassical
//! scaling laws.

use crate::domain::errors::ModelError;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Lower bound on any diffusion coefficient (m^2/s).
pub const MIN_DIFFUSION: f64 = 1e-4;

/// Characteristic plasma minor radius `a` (m).
pub const MINOR_RADIUS_M: f64 = 1.0;

pub const BOHM_SCALING: f64 = 1.0;
pub const NEOCLASSICAL_SCALING: f64 = 0.1;

pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 1.0..=50.0;
pub const MAGNETIC_FIELD_RANGE: RangeInclusive<f64> = 0.5..=20.0;
pub const HARMONIC_ENERGY_RANGE: RangeInclusive<f64> = 0.0..=10.0;
pub const LOCAL_ENTROPY_RANGE: RangeInclusive<f64> = 0.0..=1.0;
pub const ALPHA_RANGE: RangeInclusive<f64> = 0.1..=10.0;
pub const BETA_RANGE: RangeInclusive<f64> = 0.0..=5.0;
pub const GAMMA_RANGE: RangeInclusive<f64> = 0.0..=5.0;
pub const DELTA_RANGE: RangeInclusive<f64> = 0.001..=0.1;

/// Plasma state fed into the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlasmaParameters {
    /// Core temperature T (keV)
    pub temperature_kev: f64,
    /// Confining field B (T)
    pub magnetic_field_t: f64,
    /// Energy injected into resonant modes
    pub harmonic_energy: f64,
    /// Normalized turbulence proxy S
    pub local_entropy: f64,
}

impl Default for PlasmaParameters {
    fn default() -> Self {
        Self {
            temperature_kev: 10.0,
            magnetic_field_t: 5.0,
            harmonic_energy: 1.0,
            local_entropy: 0.5,
        }
    }
}

impl PlasmaParameters {
    pub fn validate(&self) -> Result<(), ModelError> {
        check("temperature", self.temperature_kev, &TEMPERATURE_RANGE)?;
        check("magnetic_field", self.magnetic_field_t, &MAGNETIC_FIELD_RANGE)?;
        check("harmonic_energy", self.harmonic_energy, &HARMONIC_ENERGY_RANGE)?;
        check("local_entropy", self.local_entropy, &LOCAL_ENTROPY_RANGE)?;
        Ok(())
    }
}

/// Tunable response coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelCoefficients {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    /// Stability constant kept from earlier model forms; the linear model ignores it.
    pub delta: f64,
}

impl Default for ModelCoefficients {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
            gamma: 1.0,
            delta: 0.01,
        }
    }
}

impl ModelCoefficients {
    pub fn validate(&self) -> Result<(), ModelError> {
        check("alpha", self.alpha, &ALPHA_RANGE)?;
        check("beta", self.beta, &BETA_RANGE)?;
        check("gamma", self.gamma, &GAMMA_RANGE)?;
        check("delta", self.delta, &DELTA_RANGE)?;
        Ok(())
    }
}

fn check(name: &'static str, value: f64, range: &RangeInclusive<f64>) -> Result<(), ModelError> {
    if !value.is_finite() {
        return Err(ModelError::NonFinite { name, value });
    }
    if !range.contains(&value) {
        return Err(ModelError::OutOfRange {
            name,
            value,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(())
}

/// `D_UNEX = alpha*(T/B) - beta*E + gamma*max(0, S)`, floored at [`MIN_DIFFUSION`].
///
/// Usable on unvalidated parameters: a negative entropy proxy is clamped to
/// zero here, so callers that skip [`PlasmaParameters::validate`] still get a
/// physical coefficient.
pub fn unex_diffusion(params: &PlasmaParameters, coeffs: &ModelCoefficients) -> f64 {
    let entropy = params.local_entropy.max(0.0);
    let d = coeffs.alpha * (params.temperature_kev / params.magnetic_field_t)
        - coeffs.beta * params.harmonic_energy
        + coeffs.gamma * entropy;
    d.max(MIN_DIFFUSION)
}

pub fn bohm_diffusion(params: &PlasmaParameters) -> f64 {
    BOHM_SCALING * (params.temperature_kev / params.magnetic_field_t)
}

pub fn neoclassical_diffusion(params: &PlasmaParameters) -> f64 {
    NEOCLASSICAL_SCALING * (params.temperature_kev.sqrt() / params.magnetic_field_t.powi(2))
}

/// Energy confinement time `tau_E = a^2 / D` (s).
pub fn confinement_time(diffusion: f64) -> f64 {
    MINOR_RADIUS_M.powi(2) / diffusion
}
