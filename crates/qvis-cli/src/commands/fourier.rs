//! Fourier command implementation.

use std::f64::consts::PI;

use anyhow::Result;
use console::style;
use serde::Serialize;

use qvis_core::{
    AlgorithmKind, FourierOutcome, FourierParameters, ResourceEstimate, Settings,
    compute_fourier_outcome_with_limit, estimate_resources,
};

use super::common::{format_state_count, hidden_states_note, print_json, print_resources};
use crate::cli::OutputFormat;

#[derive(Serialize)]
struct FourierReport<'a> {
    outcome: &'a FourierOutcome,
    resources: &'a ResourceEstimate,
}

/// Execute the fourier command.
pub fn execute(settings: &Settings, qubits: u32, input: u64, format: OutputFormat) -> Result<()> {
    let params = FourierParameters::new(qubits, input)?;
    let outcome = compute_fourier_outcome_with_limit(&params, settings.enumeration_limit)?;
    let resources = estimate_resources(
        AlgorithmKind::Fourier,
        qubits,
        settings.resources.optimized_timing,
    );

    match format {
        OutputFormat::Json => print_json(&FourierReport {
            outcome: &outcome,
            resources: &resources,
        }),
        OutputFormat::Table => {
            print_table(&outcome, settings.display.fourier_states);
            print_resources(&resources);
            Ok(())
        }
    }
}

fn print_table(outcome: &FourierOutcome, shown: usize) {
    println!(
        "\n{} QFT of |{}⟩ over {} states",
        style("✓").green().bold(),
        style(&outcome.input_state).cyan().bold(),
        format_state_count(outcome.qubit_count)
    );
    println!(
        "\n  {:<width$}  {:>10}  {:>8}  {:>17}",
        "state",
        "angle",
        "× π",
        "amplitude",
        width = outcome.qubit_count as usize
    );

    let window = outcome.display_window(shown);
    for phase in window {
        let label = if phase.is_input {
            style(phase.state.clone()).cyan().bold()
        } else {
            style(phase.state.clone()).cyan()
        };
        println!(
            "  {}  {:>10.4}  {:>8.4}  {:>+8.4}{:>+8.4}i",
            label,
            phase.angle,
            phase.angle / PI,
            phase.amplitude.re,
            phase.amplitude.im
        );
    }

    if let Some(note) = hidden_states_note(outcome.qubit_count, window.len()) {
        println!("  {note}");
    }
}
