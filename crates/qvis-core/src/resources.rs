//! Resource estimate shown next to each algorithm run.
//!
//! These are display heuristics derived from the register width, not
//! measurements: state-vector memory, a nominal compute time, the
//! asymptotic complexity label, and a coarse demand level.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CalcError;

/// Widths above this get a flat memory figure instead of `2^q · 16` bytes.
const FULL_STATE_VECTOR_MAX_QUBITS: u32 = 30;
/// Display cap on memory, in MiB (64 GiB).
const MEMORY_CAP_MIB: f64 = 1024.0 * 64.0;
/// Display cap on compute time, in ms.
const COMPUTE_TIME_CAP_MS: f64 = 100_000.0;
/// Multiplier applied to compute time when optimized timing is enabled.
pub const OPTIMIZED_TIME_FACTOR: f64 = 0.625;

/// Algorithms the calculators cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    /// Grover search.
    Search,
    /// Quantum Fourier Transform.
    Fourier,
    /// Quantum phase estimation.
    PhaseEstimation,
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmKind::Search => write!(f, "search"),
            AlgorithmKind::Fourier => write!(f, "fourier"),
            AlgorithmKind::PhaseEstimation => write!(f, "phase"),
        }
    }
}

impl FromStr for AlgorithmKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "search" | "grover" => Ok(AlgorithmKind::Search),
            "fourier" | "qft" => Ok(AlgorithmKind::Fourier),
            "phase" | "qpe" => Ok(AlgorithmKind::PhaseEstimation),
            _ => Err(CalcError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Coarse computational demand bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandLevel {
    /// Up to 20 qubits.
    Low,
    /// Up to 100 qubits.
    Medium,
    /// Up to 1000 qubits.
    High,
    /// More than 1000 qubits.
    Extreme,
}

impl DemandLevel {
    /// Bucket for a register width.
    pub fn for_qubits(qubit_count: u32) -> Self {
        match qubit_count {
            0..=20 => DemandLevel::Low,
            21..=100 => DemandLevel::Medium,
            101..=1000 => DemandLevel::High,
            _ => DemandLevel::Extreme,
        }
    }
}

impl fmt::Display for DemandLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DemandLevel::Low => "LOW",
            DemandLevel::Medium => "MEDIUM",
            DemandLevel::High => "HIGH",
            DemandLevel::Extreme => "EXTREME",
        };
        f.write_str(s)
    }
}

/// Estimated cost of running an algorithm at a given width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceEstimate {
    /// Algorithm the estimate is for.
    pub algorithm: AlgorithmKind,
    /// Qubit count (precision qubits for phase estimation).
    pub qubit_count: u32,
    /// State-vector memory in MiB.
    pub memory_mib: f64,
    /// Nominal compute time in ms.
    pub compute_time_ms: f64,
    /// Whether the optimized-timing discount was applied.
    pub optimized: bool,
    /// Asymptotic complexity label.
    pub complexity: String,
    /// Demand bucket.
    pub demand: DemandLevel,
}

/// Estimate resources for `algorithm` on `qubit_count` qubits.
pub fn estimate_resources(
    algorithm: AlgorithmKind,
    qubit_count: u32,
    optimized: bool,
) -> ResourceEstimate {
    let q = f64::from(qubit_count);

    let memory_mib = if qubit_count > FULL_STATE_VECTOR_MAX_QUBITS {
        1024.0 * (1.0 + q / 10.0).floor()
    } else {
        // 2^q complex amplitudes at 16 bytes each
        (2f64.powf(q) * 16.0 / (1024.0 * 1024.0)).min(MEMORY_CAP_MIB)
    };

    let mut compute_time_ms = match algorithm {
        AlgorithmKind::Search if qubit_count < 20 => 2f64.powf(q / 2.0) * 0.01,
        AlgorithmKind::Search => q.powi(2) * 50.0,
        AlgorithmKind::Fourier => q.powi(2) * 0.5,
        AlgorithmKind::PhaseEstimation => q.powi(3) * 0.2,
    };
    if optimized {
        compute_time_ms *= OPTIMIZED_TIME_FACTOR;
    }
    let compute_time_ms = compute_time_ms.min(COMPUTE_TIME_CAP_MS);

    let complexity = match algorithm {
        AlgorithmKind::Search => format!("O(√N) = O(√2^{qubit_count}) ≈ O(2^{})", q / 2.0),
        AlgorithmKind::Fourier => format!("O(n²) = O({qubit_count}²)"),
        AlgorithmKind::PhaseEstimation => format!("O(n³) = O({qubit_count}³)"),
    };

    debug!(%algorithm, qubit_count, memory_mib, compute_time_ms, "estimated resources");

    ResourceEstimate {
        algorithm,
        qubit_count,
        memory_mib,
        compute_time_ms,
        optimized,
        complexity,
        demand: DemandLevel::for_qubits(qubit_count),
    }
}

/// Format a MiB figure as KB, MB or GB with one decimal.
pub fn format_memory(mib: f64) -> String {
    if mib < 1.0 {
        format!("{:.1} KB", mib * 1024.0)
    } else if mib < 1024.0 {
        format!("{mib:.1} MB")
    } else {
        format!("{:.1} GB", mib / 1024.0)
    }
}

/// Format a millisecond figure as μs, ms or s.
pub fn format_time(ms: f64) -> String {
    if ms < 1.0 {
        format!("{:.1} μs", ms * 1000.0)
    } else if ms < 1000.0 {
        format!("{ms:.1} ms")
    } else {
        format!("{:.2} s", ms / 1000.0)
    }
}
