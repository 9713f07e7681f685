//! Search command implementation.
//!
//! Show the post-amplification distribution of a Grover search together
//! with the optimal iteration count.

use anyhow::Result;
use console::style;
use serde::Serialize;
use tracing::info;

use qvis_core::{
    AlgorithmKind, ResourceEstimate, SearchOutcome, SearchParameters, Settings,
    compute_optimal_iteration_count, compute_search_outcome_with_limit, estimate_resources,
};

use super::common::{
    format_state_count, hidden_states_note, print_json, print_probability_row, print_resources,
};
use crate::cli::OutputFormat;

#[derive(Serialize)]
struct SearchReport<'a> {
    optimal_iterations: u64,
    outcome: &'a SearchOutcome,
    resources: &'a ResourceEstimate,
}

/// Execute the search command.
pub fn execute(
    settings: &Settings,
    qubits: u32,
    target: Option<&str>,
    index: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    let params = match (target, index) {
        (Some(bits), _) => SearchParameters::new(qubits, bits)?,
        (None, Some(index)) => SearchParameters::from_index(qubits, index)?,
        (None, None) => anyhow::bail!("Either --target or --index is required"),
    };

    let outcome = compute_search_outcome_with_limit(&params, settings.enumeration_limit)?;
    let optimal_iterations = compute_optimal_iteration_count(&params)?;
    let resources = estimate_resources(
        AlgorithmKind::Search,
        qubits,
        settings.resources.optimized_timing,
    );

    info!(
        qubits,
        target = %outcome.target_state,
        optimal_iterations,
        "search outcome ready"
    );

    match format {
        OutputFormat::Json => print_json(&SearchReport {
            optimal_iterations,
            outcome: &outcome,
            resources: &resources,
        }),
        OutputFormat::Table => {
            print_table(&outcome, optimal_iterations, settings.display.search_states);
            print_resources(&resources);
            Ok(())
        }
    }
}

fn print_table(outcome: &SearchOutcome, optimal_iterations: u64, shown: usize) {
    println!(
        "\n{} Grover search over {} states, target |{}⟩",
        style("✓").green().bold(),
        format_state_count(outcome.qubit_count),
        style(&outcome.target_state).cyan().bold()
    );
    println!(
        "  Optimal iterations: {}\n",
        style(optimal_iterations).yellow()
    );

    let window = outcome.display_window(shown);
    for entry in window {
        print_probability_row(&entry.state, entry.probability, entry.is_target);
    }

    let target_shown = window.iter().any(|e| e.is_target);
    if !target_shown {
        println!("  ...");
        print_probability_row(&outcome.target_state, outcome.target_probability(), true);
    }

    let shown = window.len() + usize::from(!target_shown);
    if let Some(note) = hidden_states_note(outcome.qubit_count, shown) {
        println!("  {note}");
    }
    if outcome.truncated {
        println!(
            "  {} enumeration stopped at {} states ({:.3}% of probability not listed)",
            style("!").yellow().bold(),
            outcome.len(),
            outcome.omitted_probability() * 100.0
        );
    }
}
