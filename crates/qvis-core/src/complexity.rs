//! Classical versus quantum complexity reference data.

use serde::{Deserialize, Serialize};

use crate::search::iterations_for_states;

/// Kind of advantage a quantum algorithm offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speedup {
    /// Polynomial, square-root style advantage.
    Quadratic,
    /// Exponential advantage.
    Exponential,
}

impl std::fmt::Display for Speedup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Speedup::Quadratic => f.write_str("Quadratic"),
            Speedup::Exponential => f.write_str("Exponential"),
        }
    }
}

/// One row of the comparison table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplexityRow {
    pub problem: &'static str,
    pub classical: &'static str,
    pub quantum: &'static str,
    pub speedup: Speedup,
}

const TABLE: [ComplexityRow; 5] = [
    ComplexityRow {
        problem: "Unstructured Search",
        classical: "O(N)",
        quantum: "O(√N) (Grover)",
        speedup: Speedup::Quadratic,
    },
    ComplexityRow {
        problem: "Integer Factorization",
        classical: "O(e^(log N)^(1/3))",
        quantum: "O((log N)^3) (Shor)",
        speedup: Speedup::Exponential,
    },
    ComplexityRow {
        problem: "Discrete Logarithm",
        classical: "O(√N)",
        quantum: "O((log N)^3) (Shor)",
        speedup: Speedup::Exponential,
    },
    ComplexityRow {
        problem: "Quantum Simulation",
        classical: "O(2^N)",
        quantum: "O(N^k)",
        speedup: Speedup::Exponential,
    },
    ComplexityRow {
        problem: "Linear Systems",
        classical: "O(N^3)",
        quantum: "O(log N) (HHL)",
        speedup: Speedup::Exponential,
    },
];

/// The static comparison table.
pub fn complexity_table() -> &'static [ComplexityRow] {
    &TABLE
}

/// Query counts for unstructured search over `problem_size` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalingPoint {
    pub problem_size: u64,
    /// Linear scan, `N`.
    pub classical_queries: u64,
    /// Grover iterations, `round(π/4 · sqrt(N))`, at least 1.
    pub quantum_queries: u64,
}

/// Classical versus Grover query counts for each size. Zero sizes are skipped.
pub fn scaling_comparison(sizes: &[u64]) -> Vec<ScalingPoint> {
    sizes
        .iter()
        .filter(|&&n| n > 0)
        .map(|&n| ScalingPoint {
            problem_size: n,
            classical_queries: n,
            quantum_queries: iterations_for_states(n as f64).max(1),
        })
        .collect()
}
