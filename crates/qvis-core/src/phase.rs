//! Quantum phase estimation outcome.
//!
//! With `p` precision qubits, phase estimation reads out the best `p`-bit
//! binary fraction `m / 2^p` approximating the true phase (given here as a
//! fraction of π). The calculator returns that fraction, its fixed-width
//! binary encoding, the absolute error, and a cosmetic confidence figure.
//!
//! Rounding is to the nearest integer with ties away from zero. A phase
//! that rounds up to the full denominator (e.g. `1.0` at any precision) is
//! clamped to `2^p - 1` so the encoding stays exactly `p` digits wide.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bits::format_bits;
use crate::error::{CalcError, CalcResult};

/// Largest precision for which `fraction · 2^p` is exact in an `f64` mantissa.
pub const MAX_PRECISION_BITS: u32 = 52;

/// Input to the phase-estimation calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseEstimationParameters {
    precision_bits: u32,
    true_phase_fraction: f64,
}

impl PhaseEstimationParameters {
    /// Create validated parameters. The phase fraction must lie in `[0, 1]`.
    pub fn new(precision_bits: u32, true_phase_fraction: f64) -> CalcResult<Self> {
        let params = Self {
            precision_bits,
            true_phase_fraction,
        };
        params.validate()?;
        Ok(params)
    }

    /// Create parameters from a phase given in whole percent of π (0 to 100).
    pub fn from_percent(precision_bits: u32, percent: u32) -> CalcResult<Self> {
        Self::new(precision_bits, f64::from(percent) / 100.0)
    }

    /// Number of precision qubits.
    pub fn precision_bits(&self) -> u32 {
        self.precision_bits
    }

    /// True phase as a fraction of π.
    pub fn true_phase_fraction(&self) -> f64 {
        self.true_phase_fraction
    }

    fn validate(&self) -> CalcResult<()> {
        if self.precision_bits == 0 || self.precision_bits > MAX_PRECISION_BITS {
            return Err(CalcError::InvalidPrecision {
                got: self.precision_bits,
                max: MAX_PRECISION_BITS,
            });
        }
        if !self.true_phase_fraction.is_finite() || !(0.0..=1.0).contains(&self.true_phase_fraction)
        {
            return Err(CalcError::PhaseOutOfRange(self.true_phase_fraction));
        }
        Ok(())
    }
}

/// Result of a phase-estimation readout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseEstimationOutcome {
    /// Number of precision qubits.
    pub precision_bits: u32,
    /// Input phase, as a fraction of π.
    pub true_phase_fraction: f64,
    /// `numerator / denominator`.
    pub estimated_phase_fraction: f64,
    /// `numerator` in base 2, exactly `precision_bits` digits.
    pub binary_encoding: String,
    /// Readout register value.
    pub numerator: u64,
    /// `2^precision_bits`.
    pub denominator: u64,
    /// `|true - estimated|`.
    pub absolute_error: f64,
    /// Display-only figure in `0..=100`; not a statistical confidence.
    pub display_confidence_percent: u8,
    /// Whether the numerator was clamped from `denominator` to `denominator - 1`.
    pub clamped: bool,
}

impl PhaseEstimationOutcome {
    /// Smallest phase step resolvable at this precision, `1 / 2^p`.
    pub fn resolution(&self) -> f64 {
        1.0 / self.denominator as f64
    }

    /// `"<numerator>/<denominator> = <estimate>"`.
    pub fn fraction_label(&self) -> String {
        format!(
            "{}/{} = {}",
            self.numerator, self.denominator, self.estimated_phase_fraction
        )
    }

    /// Estimated phase with two decimals, e.g. `"0.25"`.
    pub fn estimate_label(&self) -> String {
        format!("{:.2}", self.estimated_phase_fraction)
    }

    /// Remaining share of the confidence bar.
    pub fn others_percent(&self) -> u8 {
        100 - self.display_confidence_percent
    }
}

/// Compute the phase-estimation readout for the given parameters.
pub fn compute_phase_estimation_outcome(
    params: &PhaseEstimationParameters,
) -> CalcResult<PhaseEstimationOutcome> {
    params.validate()?;
    let precision_bits = params.precision_bits;
    let true_phase = params.true_phase_fraction;

    let denominator = 1u64 << precision_bits;
    let rounded = (true_phase * denominator as f64).round() as u64;
    let clamped = rounded >= denominator;
    let numerator = if clamped { denominator - 1 } else { rounded };

    let estimated_phase_fraction = numerator as f64 / denominator as f64;
    let absolute_error = (true_phase - estimated_phase_fraction).abs();
    let display_confidence_percent = display_confidence(absolute_error, precision_bits);

    debug!(
        precision_bits,
        true_phase, numerator, clamped, absolute_error, "computed phase estimation outcome"
    );

    Ok(PhaseEstimationOutcome {
        precision_bits,
        true_phase_fraction: true_phase,
        estimated_phase_fraction,
        binary_encoding: format_bits(numerator, precision_bits),
        numerator,
        denominator,
        absolute_error,
        display_confidence_percent,
        clamped,
    })
}

/// `clamp(round(100 - 100·error - 20/p), 0, 100)`.
fn display_confidence(absolute_error: f64, precision_bits: u32) -> u8 {
    let raw = 100.0 - 100.0 * absolute_error - 20.0 / f64::from(precision_bits);
    raw.round().clamp(0.0, 100.0) as u8
}
