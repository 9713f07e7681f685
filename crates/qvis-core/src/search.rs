//! Grover search outcome: post-amplification distribution and iteration count.
//!
//! This is not an amplitude simulation. A fully converged amplitude
//! amplification run is modelled by assigning the marked state a fixed
//! probability of [`TARGET_PROBABILITY`] and spreading the remaining mass
//! uniformly over the other `2^n - 1` basis states:
//!
//! ```text
//!   p(t) = 0.9
//!   p(i) = (1 - 0.9) / (2^n - 1)      for i != t
//! ```
//!
//! The optimal iteration count is the textbook `round(π/4 · sqrt(2^n))`,
//! rounding half away from zero.
//!
//! Any register width is accepted. State counts are carried as `f64`, at
//! most `limit` states are enumerated, and a marked state whose index does
//! not fit in a `u64` is appended by label alone.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::bits::{
    check_index, enumerated_states, format_bits, index_bound, parse_bits, state_count,
    validate_qubit_count,
};
use crate::error::{CalcError, CalcResult};

/// Probability assigned to the marked state.
pub const TARGET_PROBABILITY: f64 = 0.9;

/// Default cap on enumerated basis states (2^20).
///
/// Registers of up to 20 qubits are always enumerated in full.
pub const DEFAULT_ENUMERATION_LIMIT: usize = 1 << 20;

/// Input to the search calculators: register width and marked state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchParameters {
    qubit_count: u32,
    target_state: String,
}

impl SearchParameters {
    /// Create validated search parameters.
    ///
    /// `target_state` must be a bit-string of exactly `qubit_count` digits.
    pub fn new(qubit_count: u32, target_state: impl Into<String>) -> CalcResult<Self> {
        let params = Self {
            qubit_count,
            target_state: target_state.into(),
        };
        params.target_index()?;
        Ok(params)
    }

    /// Create search parameters marking the state at `index`.
    pub fn from_index(qubit_count: u32, index: u64) -> CalcResult<Self> {
        check_index(index, qubit_count)?;
        Ok(Self {
            qubit_count,
            target_state: format_bits(index, qubit_count),
        })
    }

    /// Register width.
    pub fn qubit_count(&self) -> u32 {
        self.qubit_count
    }

    /// Marked state as a bit-string.
    pub fn target_state(&self) -> &str {
        &self.target_state
    }

    /// Validate and return the index of the marked state, `None` when it
    /// does not fit in a `u64`.
    ///
    /// Parameters can arrive through deserialization, so every calculator
    /// re-runs this check.
    pub fn target_index(&self) -> CalcResult<Option<u64>> {
        validate_qubit_count(self.qubit_count)?;
        let digits = self.target_state.chars().count();
        if digits != self.qubit_count as usize {
            return Err(CalcError::TargetLengthMismatch {
                target: self.target_state.clone(),
                expected: self.qubit_count,
                got: digits,
            });
        }
        parse_bits(&self.target_state)
    }
}

/// One bar of a search outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasisProbability {
    /// Basis state label, `qubit_count` binary digits.
    pub state: String,
    /// Index of the basis state; `None` only for a marked state wider than 64 bits.
    pub index: Option<u64>,
    /// Measurement probability.
    pub probability: f64,
    /// Whether this is the marked state.
    pub is_target: bool,
}

/// Distribution over basis states after amplitude amplification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Register width.
    pub qubit_count: u32,
    /// Marked state label.
    pub target_state: String,
    /// Marked state index, when it fits in a `u64`.
    pub target_index: Option<u64>,
    /// `2^qubit_count` (infinite from 1024 qubits on).
    pub total_states: f64,
    /// True when `entries` holds fewer than `total_states` states.
    pub truncated: bool,
    /// Entries in index order. When truncated, the target is always present
    /// (appended last if it lies beyond the enumerated prefix).
    pub entries: Vec<BasisProbability>,
}

impl SearchOutcome {
    /// Number of enumerated entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries were enumerated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First `k` entries, for bar-chart display.
    pub fn display_window(&self, k: usize) -> &[BasisProbability] {
        &self.entries[..k.min(self.entries.len())]
    }

    /// The marked state's entry.
    pub fn target(&self) -> Option<&BasisProbability> {
        self.entries.iter().find(|e| e.is_target)
    }

    /// Probability of the marked state.
    pub fn target_probability(&self) -> f64 {
        self.target().map_or(0.0, |e| e.probability)
    }

    /// Sum of the enumerated probabilities. 1 for a full enumeration.
    pub fn total_probability(&self) -> f64 {
        self.entries.iter().map(|e| e.probability).sum()
    }

    /// Probability mass carried by states left out of a truncated outcome.
    pub fn omitted_probability(&self) -> f64 {
        (1.0 - self.total_probability()).max(0.0)
    }
}

/// Compute the post-amplification distribution with the default enumeration limit.
pub fn compute_search_outcome(params: &SearchParameters) -> CalcResult<SearchOutcome> {
    compute_search_outcome_with_limit(params, DEFAULT_ENUMERATION_LIMIT)
}

/// Compute the post-amplification distribution, enumerating at most `limit`
/// states in index order plus the marked state.
pub fn compute_search_outcome_with_limit(
    params: &SearchParameters,
    limit: usize,
) -> CalcResult<SearchOutcome> {
    if limit == 0 {
        return Err(CalcError::InvalidDisplayLimit {
            name: "enumeration limit",
            min: 1,
            got: limit,
        });
    }
    let target_index = params.target_index()?;
    let qubit_count = params.qubit_count;
    let total_states = state_count(qubit_count);
    let enumerated = enumerated_states(qubit_count, limit);
    let truncated = index_bound(qubit_count).is_none_or(|total| enumerated < total);

    debug!(
        qubit_count,
        target = %params.target_state, total_states, enumerated, "computing search outcome"
    );
    if truncated {
        warn!(
            qubit_count,
            limit, "search outcome truncated to enumeration limit"
        );
    }

    let residual = residual_share(total_states);
    let mut entries: Vec<BasisProbability> = (0..enumerated)
        .map(|index| {
            let is_target = target_index == Some(index);
            BasisProbability {
                state: format_bits(index, qubit_count),
                index: Some(index),
                probability: if is_target { TARGET_PROBABILITY } else { residual },
                is_target,
            }
        })
        .collect();

    if target_index.is_none_or(|index| index >= enumerated) {
        entries.push(BasisProbability {
            state: params.target_state.clone(),
            index: target_index,
            probability: TARGET_PROBABILITY,
            is_target: true,
        });
    }

    Ok(SearchOutcome {
        qubit_count,
        target_state: params.target_state.clone(),
        target_index,
        total_states,
        truncated,
        entries,
    })
}

/// Optimal number of Grover iterations, `round(π/4 · sqrt(2^n))`.
///
/// Saturates at `u64::MAX` once the count no longer fits, from 129 qubits on.
pub fn compute_optimal_iteration_count(params: &SearchParameters) -> CalcResult<u64> {
    params.target_index()?;
    let iterations = iterations_for_states(state_count(params.qubit_count));
    debug!(
        qubit_count = params.qubit_count,
        iterations, "computed optimal iteration count"
    );
    Ok(iterations)
}

/// `round(π/4 · sqrt(n_states))`, half away from zero, saturating.
pub(crate) fn iterations_for_states(n_states: f64) -> u64 {
    (PI / 4.0 * n_states.sqrt()).round() as u64
}

/// Probability of each non-target state; zero once `2^n` is infinite.
fn residual_share(total_states: f64) -> f64 {
    (1.0 - TARGET_PROBABILITY) / (total_states - 1.0)
}
