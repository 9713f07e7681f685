//! Wire and gate labelling for circuit diagrams.
//!
//! Diagrams stay readable by capping the number of drawn wires. Wide
//! registers are shown through representative wires: the first few, an
//! ellipsis, and the last few (search diagrams also show a middle band).

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};
use crate::resources::AlgorithmKind;

/// Most wires drawn for a search circuit.
pub const SEARCH_MAX_WIRES: u32 = 20;
/// Most precision wires drawn for Fourier and phase-estimation circuits.
pub const FOURIER_MAX_WIRES: u32 = 15;
/// Controlled-U slots drawn for phase estimation.
pub const CONTROLLED_U_SLOTS: u32 = 8;

const ELLIPSIS: &str = "...";

/// Labels needed to draw one circuit diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitLayout {
    pub algorithm: AlgorithmKind,
    /// Register width being drawn (precision qubits for phase estimation).
    pub qubit_count: u32,
    /// True when fewer wires are drawn than the register has.
    pub simplified: bool,
    /// Wire labels, top to bottom.
    pub wires: Vec<String>,
    /// Gate labels in drawing order.
    pub gates: Vec<String>,
}

/// Build the diagram layout for `algorithm` on `qubit_count` qubits.
pub fn circuit_layout(algorithm: AlgorithmKind, qubit_count: u32) -> CalcResult<CircuitLayout> {
    if qubit_count == 0 {
        return Err(CalcError::InvalidQubitCount(qubit_count));
    }
    let layout = match algorithm {
        AlgorithmKind::Search => search_layout(qubit_count),
        AlgorithmKind::Fourier => fourier_layout(qubit_count),
        AlgorithmKind::PhaseEstimation => phase_layout(qubit_count),
    };
    Ok(layout)
}

fn search_layout(n: u32) -> CircuitLayout {
    let shown = n.min(SEARCH_MAX_WIRES);
    let simplified = n > SEARCH_MAX_WIRES;
    let wires = (0..shown)
        .map(|i| {
            if !simplified || i < 5 {
                return format!("q{i}");
            }
            match i {
                5..=9 => format!("q{}", u64::from(n / 2) - 2 + u64::from(i - 5)),
                10 => ELLIPSIS.to_string(),
                _ => format!("q{}", n - (shown - i)),
            }
        })
        .collect();

    CircuitLayout {
        algorithm: AlgorithmKind::Search,
        qubit_count: n,
        simplified,
        wires,
        gates: ["H", "Oracle", "Diffusion", "M"].map(String::from).to_vec(),
    }
}

fn fourier_layout(n: u32) -> CircuitLayout {
    let (wires, simplified) = head_tail_wires('q', n);
    let shown = wires.len() as u32;
    let gates = (0..shown.saturating_sub(1))
        .map(|i| format!("R{}", i + 2))
        .collect();

    CircuitLayout {
        algorithm: AlgorithmKind::Fourier,
        qubit_count: n,
        simplified,
        wires,
        gates,
    }
}

fn phase_layout(precision: u32) -> CircuitLayout {
    let (mut wires, simplified) = head_tail_wires('p', precision);
    let shown = wires.len() as u32;
    wires.push("t".to_string());

    let gates = (0..shown.min(CONTROLLED_U_SLOTS))
        .map(|i| match i {
            5 => ELLIPSIS.to_string(),
            0..=4 => controlled_u_label(i),
            _ => controlled_u_label(precision.saturating_sub(CONTROLLED_U_SLOTS - i)),
        })
        .collect();

    CircuitLayout {
        algorithm: AlgorithmKind::PhaseEstimation,
        qubit_count: precision,
        simplified,
        wires,
        gates,
    }
}

/// First five wires, an ellipsis, then the last wires, up to [`FOURIER_MAX_WIRES`].
fn head_tail_wires(prefix: char, n: u32) -> (Vec<String>, bool) {
    let shown = n.min(FOURIER_MAX_WIRES);
    let simplified = n > FOURIER_MAX_WIRES;
    let wires = (0..shown)
        .map(|i| {
            if !simplified || i < 5 {
                format!("{prefix}{i}")
            } else if i == 5 {
                ELLIPSIS.to_string()
            } else {
                format!("{prefix}{}", n - (shown - i))
            }
        })
        .collect();
    (wires, simplified)
}

/// `U^(2^exponent)`, written `U`, `U2`, `U4`, ...
fn controlled_u_label(exponent: u32) -> String {
    match exponent {
        0 => "U".to_string(),
        1..=63 => format!("U{}", 1u64 << exponent),
        _ => format!("U2^{exponent}"),
    }
}
