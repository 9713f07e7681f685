//! Quantum Fourier Transform of a computational basis state.
//!
//! The QFT maps `|x⟩` on `n` qubits to an equal superposition whose
//! `k`-th amplitude carries the phase `2π · x · k / 2^n`:
//!
//! ```text
//!   QFT|x⟩ = 1/sqrt(2^n) · Σ_k e^{2πi·x·k/2^n} |k⟩
//! ```
//!
//! Every basis state has the same magnitude, so the interesting output is
//! the phase of each amplitude, drawn as a phasor per state.

use std::f64::consts::PI;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bits::{check_index, enumerated_states, format_bits, index_bound, state_count};
use crate::error::{CalcError, CalcResult};
use crate::search::DEFAULT_ENUMERATION_LIMIT;

/// Input to the Fourier calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourierParameters {
    qubit_count: u32,
    input_index: u64,
}

impl FourierParameters {
    /// Create validated parameters; `input_index` must be below `2^qubit_count`.
    pub fn new(qubit_count: u32, input_index: u64) -> CalcResult<Self> {
        check_index(input_index, qubit_count)?;
        Ok(Self {
            qubit_count,
            input_index,
        })
    }

    /// Register width.
    pub fn qubit_count(&self) -> u32 {
        self.qubit_count
    }

    /// Index of the input basis state.
    pub fn input_index(&self) -> u64 {
        self.input_index
    }
}

/// Amplitude of one basis state after the transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FourierPhase {
    /// Basis state label.
    pub state: String,
    /// Basis state index `k`.
    pub index: u64,
    /// Phase angle in radians, in `[0, 2π)`.
    pub angle: f64,
    /// `e^{i·angle} / sqrt(2^n)`.
    pub amplitude: Complex64,
    /// Whether this state is the transform's input.
    pub is_input: bool,
}

/// Transformed state, enumerated in index order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FourierOutcome {
    /// Register width.
    pub qubit_count: u32,
    /// Input basis state label.
    pub input_state: String,
    /// `2^qubit_count` (infinite from 1024 qubits on).
    pub total_states: f64,
    /// True when fewer than `total_states` phases were enumerated.
    pub truncated: bool,
    /// Phases in index order.
    pub phases: Vec<FourierPhase>,
}

impl FourierOutcome {
    /// First `k` phases, for display.
    pub fn display_window(&self, k: usize) -> &[FourierPhase] {
        &self.phases[..k.min(self.phases.len())]
    }

    /// Sum of `|amplitude|²` over the enumerated states.
    pub fn total_probability(&self) -> f64 {
        self.phases.iter().map(|p| p.amplitude.norm_sqr()).sum()
    }
}

/// Transform `|input_index⟩` with the default enumeration limit.
pub fn compute_fourier_outcome(params: &FourierParameters) -> CalcResult<FourierOutcome> {
    compute_fourier_outcome_with_limit(params, DEFAULT_ENUMERATION_LIMIT)
}

/// Transform `|input_index⟩`, enumerating at most `limit` output states.
pub fn compute_fourier_outcome_with_limit(
    params: &FourierParameters,
    limit: usize,
) -> CalcResult<FourierOutcome> {
    if limit == 0 {
        return Err(CalcError::InvalidDisplayLimit {
            name: "enumeration limit",
            min: 1,
            got: limit,
        });
    }
    check_index(params.input_index, params.qubit_count)?;

    let n = params.qubit_count;
    let x = params.input_index;
    let total_states = state_count(n);
    let enumerated = enumerated_states(n, limit);
    let truncated = index_bound(n).is_none_or(|total| enumerated < total);
    // 2^(-n/2), finite well past the width where 2^n overflows
    let magnitude = (-f64::from(n) / 2.0).exp2();

    debug!(
        qubit_count = n,
        input_index = x,
        enumerated,
        "computing fourier outcome"
    );

    let phases = (0..enumerated)
        .map(|k| {
            let angle = phase_angle(x, k, n);
            FourierPhase {
                state: format_bits(k, n),
                index: k,
                angle,
                amplitude: Complex64::from_polar(magnitude, angle),
                is_input: k == x,
            }
        })
        .collect();

    Ok(FourierOutcome {
        qubit_count: n,
        input_state: format_bits(x, n),
        total_states,
        truncated,
        phases,
    })
}

/// `2π · ((x · k) mod 2^n) / 2^n`, reduced exactly before converting to `f64`.
fn phase_angle(x: u64, k: u64, qubit_count: u32) -> f64 {
    let product = u128::from(x) * u128::from(k);
    // from 128 qubits on the product is already below 2^n
    let turns = 1u128
        .checked_shl(qubit_count)
        .map_or(product, |total| product % total);
    2.0 * PI * turns as f64 * (-f64::from(qubit_count)).exp2()
}
