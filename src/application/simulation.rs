use crate::domain::errors::ModelError;
use crate::domain::physics::unex_model::{
    bohm_diffusion, confinement_time, neoclassical_diffusion, unex_diffusion,
};
use crate::domain::physics::{ModelCoefficients, PlasmaParameters};
use serde::Serialize;
use tracing::{debug, info};

/// Result of one UN-EX evaluation against the reference scalings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfinementReport {
    pub parameters: PlasmaParameters,
    pub coefficients: ModelCoefficients,
    pub diffusion_unex: f64,
    pub tau_e_unex: f64,
    pub tau_e_bohm: f64,
    pub tau_e_neoclassical: f64,
    pub beats_bohm: bool,
    pub beats_neoclassical: bool,
}

/// Validate inputs, run the model and compare with Bohm and neoclassical confinement.
pub fn simulate(
    parameters: PlasmaParameters,
    coefficients: ModelCoefficients,
) -> Result<ConfinementReport, ModelError> {
    parameters.validate()?;
    coefficients.validate()?;

    let diffusion_unex = unex_diffusion(&parameters, &coefficients);
    let tau_e_unex = confinement_time(diffusion_unex);
    let tau_e_bohm = confinement_time(bohm_diffusion(&parameters));
    let tau_e_neoclassical = confinement_time(neoclassical_diffusion(&parameters));
    debug!(
        "D_UNEX={:.4e} tau_E: unex={:.4} bohm={:.4} neo={:.4}",
        diffusion_unex, tau_e_unex, tau_e_bohm, tau_e_neoclassical
    );

    let report = ConfinementReport {
        parameters,
        coefficients,
        diffusion_unex,
        tau_e_unex,
        tau_e_bohm,
        tau_e_neoclassical,
        beats_bohm: tau_e_unex > tau_e_bohm,
        beats_neoclassical: tau_e_unex > tau_e_neoclassical,
    };
    info!(
        "UN-EX confinement {:.4}s (beats Bohm: {}, beats neoclassical: {})",
        report.tau_e_unex, report.beats_bohm, report.beats_neoclassical
    );
    Ok(report)
}

/// Scientific notation with a signed, zero-padded two-digit exponent
/// (`1.5000e+00`, `1.0000e-04`).
pub fn format_scientific(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*e}", precision, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        // NaN and infinities carry no exponent
        None => formatted,
    }
}

impl ConfinementReport {
    /// Human-readable report, one line per entry.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!(
                "UN-EX Diffusion Coefficient (D_UNEX): {} m^2/s",
                format_scientific(self.diffusion_unex, 4)
            ),
            format!("UN-EX Energy Confinement Time (tau_E_UNEX): {:.4} s", self.tau_e_unex),
            format!("Bohm Confinement Time (tau_E_Bohm): {:.4} s", self.tau_e_bohm),
            format!(
                "Neoclassical Confinement Time (tau_E_Neoclassical): {:.4} s",
                self.tau_e_neoclassical
            ),
        ];

        lines.push(if self.beats_bohm {
            format!(
                "UN-EX tau_E ({:.2} s) is significantly better than Bohm tau_E ({:.2} s): active transport suppression.",
                self.tau_e_unex, self.tau_e_bohm
            )
        } else {
            format!(
                "UN-EX tau_E ({:.2} s) is comparable to or worse than Bohm tau_E ({:.2} s). Parameter tuning may be needed.",
                self.tau_e_unex, self.tau_e_bohm
            )
        });

        lines.push(if self.beats_neoclassical {
            format!(
                "UN-EX tau_E ({:.2} s) is better than Neoclassical tau_E ({:.2} s): outperforms the collisional transport limit.",
                self.tau_e_unex, self.tau_e_neoclassical
            )
        } else {
            format!(
                "UN-EX tau_E ({:.2} s) is comparable to or worse than Neoclassical tau_E ({:.2} s). Further optimization may be required.",
                self.tau_e_unex, self.tau_e_neoclassical
            )
        });

        lines
    }
}
