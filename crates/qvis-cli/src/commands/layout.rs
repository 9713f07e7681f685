//! Layout command implementation.

use anyhow::Result;
use console::style;

use qvis_core::{AlgorithmKind, circuit_layout};

/// Execute the layout command.
pub fn execute(algorithm: AlgorithmKind, qubits: u32) -> Result<()> {
    let layout = circuit_layout(algorithm, qubits)?;

    println!(
        "{} {} circuit, {} qubits{}",
        style("→").cyan().bold(),
        style(algorithm).bold(),
        qubits,
        if layout.simplified {
            style(" (simplified view)").dim().to_string()
        } else {
            String::new()
        }
    );

    println!("  Wires: {}", style(layout.wires.join(" ")).cyan());
    println!("  Gates: {}", layout.gates.join(" ─ "));

    Ok(())
}
