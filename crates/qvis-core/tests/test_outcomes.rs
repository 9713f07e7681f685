//! End-to-end checks of the calculators through the public API.

use qvis_core::{
    AlgorithmKind, CalcError, PhaseEstimationParameters, SearchParameters, Settings,
    circuit_layout, compute_optimal_iteration_count, compute_phase_estimation_outcome,
    compute_search_outcome, compute_search_outcome_with_limit, estimate_resources,
};

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[test]
fn two_qubit_search_matches_reference_values() {
    let params = SearchParameters::new(2, "10").unwrap();
    let outcome = compute_search_outcome(&params).unwrap();

    let pairs: Vec<(&str, f64)> = outcome
        .entries
        .iter()
        .map(|e| (e.state.as_str(), e.probability))
        .collect();
    assert_eq!(pairs.len(), 4);
    for (state, probability) in pairs {
        let expected = if state == "10" { 0.9 } else { 0.1 / 3.0 };
        assert!((probability - expected).abs() < 1e-12, "{state}: {probability}");
    }
}

#[test]
fn four_qubit_iteration_count() {
    let params = SearchParameters::new(4, "0110").unwrap();
    assert_eq!(compute_optimal_iteration_count(&params).unwrap(), 3);
}

#[test]
fn out_of_range_target_is_invalid_input() {
    let err = SearchParameters::from_index(3, 8).unwrap_err();
    assert!(err.is_invalid_input());
    let err = SearchParameters::new(64, "0".repeat(63)).unwrap_err();
    assert!(matches!(err, CalcError::TargetLengthMismatch { expected: 64, got: 63, .. }));
}

#[test]
fn wide_registers_have_outcomes_and_iteration_counts() {
    let target = format!("1{}", "0".repeat(63));
    let params = SearchParameters::new(64, target.as_str()).unwrap();
    let outcome = compute_search_outcome_with_limit(&params, 16).unwrap();
    assert!(outcome.truncated);
    assert_eq!(outcome.len(), 17);
    assert_eq!(outcome.target_index, Some(1u64 << 63));
    assert_eq!(outcome.target().unwrap().state, target);
    assert!((outcome.target_probability() - 0.9).abs() < 1e-12);
    assert_eq!(compute_optimal_iteration_count(&params).unwrap(), 3_373_259_426);

    let params = SearchParameters::from_index(200, 0).unwrap();
    let outcome = compute_search_outcome_with_limit(&params, 16).unwrap();
    assert_eq!(outcome.len(), 16);
    assert!(outcome.entries[0].is_target);
    assert!(outcome.entries[1..].iter().all(|e| e.probability < 0.9));
    assert!((outcome.total_probability() + outcome.omitted_probability() - 1.0).abs() < 1e-12);
    // π/4 · 2^100 does not fit in a u64
    assert_eq!(compute_optimal_iteration_count(&params).unwrap(), u64::MAX);
}

#[test]
fn settings_limit_drives_enumeration() {
    let settings = Settings::from_yaml("enumeration_limit: 32\n").unwrap();
    let params = SearchParameters::from_index(12, 4095).unwrap();
    let outcome = compute_search_outcome_with_limit(&params, settings.enumeration_limit).unwrap();
    assert!(outcome.truncated);
    assert_eq!(outcome.len(), 33);
    assert_eq!(outcome.display_window(settings.display.search_states).len(), 10);
}

#[test]
fn search_outcome_serializes_to_json() {
    let params = SearchParameters::new(1, "1").unwrap();
    let outcome = compute_search_outcome(&params).unwrap();
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["qubit_count"], 1);
    assert_eq!(json["target_state"], "1");
    assert_eq!(json["entries"][1]["state"], "1");
    assert_eq!(json["entries"][1]["probability"], 0.9);
    assert_eq!(json["truncated"], false);
}

// ---------------------------------------------------------------------------
// Phase estimation
// ---------------------------------------------------------------------------

#[test]
fn three_bit_quarter_phase() {
    let params = PhaseEstimationParameters::new(3, 0.25).unwrap();
    let outcome = compute_phase_estimation_outcome(&params).unwrap();
    assert_eq!(outcome.numerator, 2);
    assert_eq!(outcome.denominator, 8);
    assert_eq!(outcome.binary_encoding, "010");
    assert_eq!(outcome.estimated_phase_fraction, 0.25);
    assert_eq!(outcome.absolute_error, 0.0);
}

#[test]
fn one_bit_full_phase_does_not_fail() {
    let params = PhaseEstimationParameters::new(1, 1.0).unwrap();
    let outcome = compute_phase_estimation_outcome(&params).unwrap();
    assert_eq!(outcome.binary_encoding.len(), 1);
}

#[test]
fn slider_sweep_never_widens_encoding() {
    for precision in 3..=8 {
        for percent in 0..=100 {
            let params = PhaseEstimationParameters::from_percent(precision, percent).unwrap();
            let outcome = compute_phase_estimation_outcome(&params).unwrap();
            assert_eq!(outcome.binary_encoding.len(), precision as usize);
        }
    }
}

// ---------------------------------------------------------------------------
// Supporting calculators
// ---------------------------------------------------------------------------

#[test]
fn resources_and_layout_agree_on_width() {
    let estimate = estimate_resources(AlgorithmKind::PhaseEstimation, 6, true);
    let layout = circuit_layout(AlgorithmKind::PhaseEstimation, 6).unwrap();
    assert_eq!(estimate.qubit_count, layout.qubit_count);
    // six precision wires plus the target
    assert_eq!(layout.wires.len(), 7);
}
