//! Complexity command implementation.
//!
//! Print the classical versus quantum reference table and the query-count
//! scaling of unstructured search.

use anyhow::Result;
use console::style;

use qvis_core::{Speedup, complexity_table, scaling_comparison};

/// Execute the complexity command.
pub fn execute(sizes: &[u64]) -> Result<()> {
    println!("\n{}", style("Classical vs quantum complexity").bold());
    println!(
        "  {:<22} {:<14} {:<14} {}",
        "Problem", "Classical", "Quantum", "Speedup"
    );
    for row in complexity_table() {
        let speedup = match row.speedup {
            Speedup::Exponential => style(row.speedup.to_string()).green().bold(),
            Speedup::Quadratic => style(row.speedup.to_string()).yellow(),
        };
        println!(
            "  {:<22} {:<14} {:<14} {}",
            row.problem, row.classical, row.quantum, speedup
        );
    }

    let points = scaling_comparison(sizes);
    if points.is_empty() {
        return Ok(());
    }

    println!("\n{}", style("Unstructured search queries").bold());
    println!("  {:>14} {:>14} {:>10}", "N", "classical", "Grover");
    for point in &points {
        println!(
            "  {:>14} {:>14} {:>10}",
            point.problem_size,
            point.classical_queries,
            style(point.quantum_queries).cyan()
        );
    }

    Ok(())
}
