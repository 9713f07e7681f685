//! Resources command implementation.

use anyhow::Result;
use console::style;

use qvis_core::{AlgorithmKind, Settings, estimate_resources};

use super::common::print_resources;

/// Execute the resources command.
///
/// `--no-optimize` wins over the configured optimized-timing setting.
pub fn execute(
    settings: &Settings,
    algorithm: AlgorithmKind,
    qubits: u32,
    no_optimize: bool,
) -> Result<()> {
    if qubits == 0 {
        anyhow::bail!("Qubit count must be at least 1");
    }

    let optimized = settings.resources.optimized_timing && !no_optimize;
    let estimate = estimate_resources(algorithm, qubits, optimized);

    println!(
        "{} Estimate for {} on {} qubits",
        style("→").cyan().bold(),
        style(algorithm).bold(),
        qubits
    );
    print_resources(&estimate);

    Ok(())
}
