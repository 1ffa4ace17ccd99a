use unex::application::simulation::simulate;
use unex::domain::errors::ModelError;
use unex::domain::physics::unex_model::MIN_DIFFUSION;
use unex::domain::physics::{ModelCoefficients, PlasmaParameters};

#[test]
fn test_harmonic_feedback_improves_confinement() {
    let mut last_tau = 0.0;
    for energy in [0.0, 0.5, 1.0, 1.5, 2.0] {
        let params = PlasmaParameters {
            harmonic_energy: energy,
            ..PlasmaParameters::default()
        };
        let report = simulate(params, ModelCoefficients::default()).unwrap();
        assert!(
            report.tau_e_unex > last_tau,
            "tau_E should grow with harmonic energy (E={})",
            energy
        );
        last_tau = report.tau_e_unex;
    }
}

#[test]
fn test_strong_feedback_hits_diffusion_floor() {
    let params = PlasmaParameters {
        harmonic_energy: 10.0,
        ..PlasmaParameters::default()
    };
    let report = simulate(params, ModelCoefficients::default()).unwrap();

    assert_eq!(report.diffusion_unex, MIN_DIFFUSION);
    assert!((report.tau_e_unex - 1.0 / MIN_DIFFUSION).abs() < 1e-6);
    assert!(report.beats_bohm);
    assert!(report.beats_neoclassical);
}

#[test]
fn test_out_of_range_coefficient_is_rejected() {
    let coeffs = ModelCoefficients {
        delta: 0.5,
        ..ModelCoefficients::default()
    };
    let err = simulate(PlasmaParameters::default(), coeffs).unwrap_err();
    assert_eq!(
        err.to_string(),
        "delta = 0.5 is outside the allowed range [0.001, 0.1]"
    );
    assert!(matches!(err, ModelError::OutOfRange { name: "delta", .. }));
}

#[test]
fn test_report_json_fields() {
    let report = simulate(PlasmaParameters::default(), ModelCoefficients::default()).unwrap();
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["parameters"]["temperature_kev"], 10.0);
    assert_eq!(value["beats_bohm"], true);
    assert_eq!(value["beats_neoclassical"], false);
    assert_eq!(value["tau_e_bohm"], 0.5);
}
