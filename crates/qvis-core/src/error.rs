//! Error types for the outcome calculators.

use thiserror::Error;

/// Errors produced when a parameter record violates its constraints.
///
/// Every variant is an invalid-input condition: the calculators are pure
/// functions, so there is nothing transient to retry and no partial result.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CalcError {
    /// Qubit count must be at least 1.
    #[error("qubit count must be at least 1, got {0}")]
    InvalidQubitCount(u32),

    /// A bit-string contains a character other than '0' or '1'.
    #[error("invalid bit-string '{value}': character '{found}' at position {position}")]
    InvalidBitString {
        /// The offending input.
        value: String,
        /// First character that is not a binary digit.
        found: char,
        /// Character position of `found`.
        position: usize,
    },

    /// Target bit-string length does not match the qubit count.
    #[error("target state '{target}' has {got} digits but qubit count is {expected}")]
    TargetLengthMismatch {
        /// The target bit-string.
        target: String,
        /// Expected length (the qubit count).
        expected: u32,
        /// Actual length.
        got: usize,
    },

    /// A basis-state index does not fit in the register.
    #[error("index {index} out of range for {qubit_count} qubits")]
    IndexOutOfRange {
        /// The offending index.
        index: u64,
        /// Register width.
        qubit_count: u32,
    },

    /// Precision bits outside `1..=max`.
    #[error("precision bits must be in 1..={max}, got {got}")]
    InvalidPrecision {
        /// Requested precision.
        got: u32,
        /// Largest supported precision.
        max: u32,
    },

    /// Phase fraction is not a finite number in `[0, 1]`.
    #[error("phase fraction must be a finite value in [0, 1], got {0}")]
    PhaseOutOfRange(f64),

    /// Display or enumeration limit too small.
    #[error("{name} must be at least {min}, got {got}")]
    InvalidDisplayLimit {
        /// Name of the limit.
        name: &'static str,
        /// Smallest accepted value.
        min: usize,
        /// Provided value.
        got: usize,
    },

    /// Algorithm name not recognised.
    #[error("unknown algorithm '{0}'; expected search, fourier or phase")]
    UnknownAlgorithm(String),
}

impl CalcError {
    /// Whether this error belongs to the invalid-input category.
    ///
    /// Always true today; callers that only care about the category should
    /// use this instead of matching on variants.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidQubitCount(_)
                | CalcError::InvalidBitString { .. }
                | CalcError::TargetLengthMismatch { .. }
                | CalcError::IndexOutOfRange { .. }
                | CalcError::InvalidPrecision { .. }
                | CalcError::PhaseOutOfRange(_)
                | CalcError::InvalidDisplayLimit { .. }
                | CalcError::UnknownAlgorithm(_)
        )
    }
}

/// Result type for calculator operations.
pub type CalcResult<T> = Result<T, CalcError>;
