//! `qvis-core`: deterministic outcome calculators for quantum algorithm
//! visualizations.
//!
//! Given algorithm parameters, the calculators produce the records a
//! renderer turns into bar charts, phasor diagrams and labels:
//!
//! - **Grover search**: post-amplification distribution over basis states
//!   and the optimal iteration count
//! - **Phase estimation**: best binary-fraction estimate of a phase, its
//!   fixed-width encoding, error and a display confidence
//! - **Quantum Fourier Transform**: per-state phase of a transformed basis state
//!
//! plus resource estimates, a complexity reference table and circuit wire
//! layouts. None of this simulates amplitudes gate by gate; the search
//! distribution in particular is a fixed stand-in for a converged run.
//!
//! Every function is pure: identical inputs give identical outputs and no
//! state is shared between calls.
//!
//! # Quick start
//!
//! ```rust
//! use qvis_core::{
//!     PhaseEstimationParameters, SearchParameters, compute_optimal_iteration_count,
//!     compute_phase_estimation_outcome, compute_search_outcome,
//! };
//!
//! let params = SearchParameters::new(2, "10").unwrap();
//! let outcome = compute_search_outcome(&params).unwrap();
//! assert_eq!(outcome.len(), 4);
//! assert_eq!(outcome.entries[2].probability, 0.9);
//!
//! let params = SearchParameters::new(4, "0110").unwrap();
//! assert_eq!(compute_optimal_iteration_count(&params).unwrap(), 3);
//!
//! let params = PhaseEstimationParameters::new(3, 0.25).unwrap();
//! let qpe = compute_phase_estimation_outcome(&params).unwrap();
//! assert_eq!(qpe.binary_encoding, "010");
//! ```

pub mod bits;
pub mod complexity;
pub mod config;
pub mod error;
pub mod fourier;
pub mod layout;
pub mod phase;
pub mod resources;
pub mod search;

pub use complexity::{ComplexityRow, ScalingPoint, Speedup, complexity_table, scaling_comparison};
pub use config::{ConfigError, Settings};
pub use error::{CalcError, CalcResult};
pub use fourier::{
    FourierOutcome, FourierParameters, FourierPhase, compute_fourier_outcome,
    compute_fourier_outcome_with_limit,
};
pub use layout::{CircuitLayout, circuit_layout};
pub use phase::{
    MAX_PRECISION_BITS, PhaseEstimationOutcome, PhaseEstimationParameters,
    compute_phase_estimation_outcome,
};
pub use resources::{
    AlgorithmKind, DemandLevel, ResourceEstimate, estimate_resources, format_memory, format_time,
};
pub use search::{
    BasisProbability, DEFAULT_ENUMERATION_LIMIT, SearchOutcome, SearchParameters,
    TARGET_PROBABILITY, compute_optimal_iteration_count, compute_search_outcome,
    compute_search_outcome_with_limit,
};
