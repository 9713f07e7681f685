//! Shared helpers for CLI commands.

use anyhow::Result;
use console::style;
use serde::Serialize;

use qvis_core::{ResourceEstimate, format_memory, format_time};

/// Bar width, in characters, of a probability of 1.
const BAR_WIDTH: f64 = 40.0;

/// Print any record as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| anyhow::anyhow!("JSON serialization failed: {e}"))?;
    println!("{json}");
    Ok(())
}

/// A bar of `█` proportional to `probability`.
pub fn bar(probability: f64) -> String {
    let len = (probability.clamp(0.0, 1.0) * BAR_WIDTH).round() as usize;
    "█".repeat(len)
}

/// Widest register whose state count prints exactly.
const EXACT_COUNT_QUBITS: u32 = 52;

/// `2^n` as a plain number when small enough, otherwise as a power of two.
pub fn format_state_count(qubit_count: u32) -> String {
    if qubit_count <= EXACT_COUNT_QUBITS {
        (1u64 << qubit_count).to_string()
    } else {
        format!("2^{qubit_count}")
    }
}

/// Footer for states not shown, `None` when every state was listed.
pub fn hidden_states_note(qubit_count: u32, shown: usize) -> Option<String> {
    if qubit_count > EXACT_COUNT_QUBITS {
        return Some(format!("... and about 2^{qubit_count} more states"));
    }
    let hidden = (1u64 << qubit_count).saturating_sub(shown as u64);
    (hidden > 0).then(|| format!("... and {hidden} more states"))
}

/// Print one labelled probability row.
pub fn print_probability_row(label: &str, probability: f64, highlight: bool) {
    let bar = bar(probability);
    let bar = if highlight {
        style(bar).green()
    } else {
        style(bar).dim()
    };
    let marker = if highlight { " ←" } else { "" };
    println!(
        "  {}: {:>7.3}% {}{}",
        style(label).cyan(),
        probability * 100.0,
        bar,
        style(marker).yellow().bold()
    );
}

/// Print the resource estimate footer shared by the calculator commands.
pub fn print_resources(estimate: &ResourceEstimate) {
    println!("\n{}", style("Resources:").bold());
    println!("  Memory:       {}", style(format_memory(estimate.memory_mib)).yellow());
    println!(
        "  Compute time: {}{}",
        style(format_time(estimate.compute_time_ms)).yellow(),
        if estimate.optimized { " (optimized)" } else { "" }
    );
    println!("  Complexity:   {}", estimate.complexity);
    println!("  Demand:       {}", demand_style(estimate));
}

fn demand_style(estimate: &ResourceEstimate) -> console::StyledObject<String> {
    use qvis_core::DemandLevel;

    let label = estimate.demand.to_string();
    match estimate.demand {
        DemandLevel::Low => style(label).green(),
        DemandLevel::Medium => style(label).yellow(),
        DemandLevel::High | DemandLevel::Extreme => style(label).red().bold(),
    }
}
