//! Basis-state labels: bit-strings and their integer indices.
//!
//! A register of `n` qubits has `2^n` basis states. States are labelled with
//! their index rendered as an `n`-digit binary string, most significant bit
//! first, so `|0110⟩` is index 6 of a 4-qubit register.
//!
//! Register width is unbounded. Indices are materialized as `u64` only where
//! they fit; wider labels stay bit-strings.

use crate::error::{CalcError, CalcResult};

/// Significant digits an index can have.
const INDEX_BITS: u32 = u64::BITS;

/// Check that `qubit_count` is at least 1.
pub fn validate_qubit_count(qubit_count: u32) -> CalcResult<()> {
    if qubit_count == 0 {
        return Err(CalcError::InvalidQubitCount(qubit_count));
    }
    Ok(())
}

/// Number of basis states, `2^qubit_count`, as a float.
///
/// Exact for every width below 1024; wider registers give `+inf`.
pub fn state_count(qubit_count: u32) -> f64 {
    2f64.powi(i32::try_from(qubit_count).unwrap_or(i32::MAX))
}

/// `2^qubit_count` when it fits in a `u64`.
pub fn index_bound(qubit_count: u32) -> Option<u64> {
    1u64.checked_shl(qubit_count)
}

/// Number of states enumerated for a register under `limit`: `min(limit, 2^n)`.
pub fn enumerated_states(qubit_count: u32, limit: usize) -> u64 {
    let limit = u64::try_from(limit).unwrap_or(u64::MAX);
    index_bound(qubit_count).map_or(limit, |total| total.min(limit))
}

/// Parse a bit-string into its index.
///
/// The string must be non-empty and contain only `'0'` and `'1'`. Returns
/// `None` when the value does not fit in a `u64`; leading zeros are free.
pub fn parse_bits(bits: &str) -> CalcResult<Option<u64>> {
    if let Some((position, found)) = bits.chars().enumerate().find(|(_, c)| *c != '0' && *c != '1')
    {
        return Err(CalcError::InvalidBitString {
            value: bits.to_string(),
            found,
            position,
        });
    }
    if bits.is_empty() {
        return Err(CalcError::InvalidQubitCount(0));
    }

    let significant = bits.trim_start_matches('0');
    if significant.len() > INDEX_BITS as usize {
        return Ok(None);
    }
    Ok(Some(
        significant
            .bytes()
            .fold(0u64, |acc, b| (acc << 1) | u64::from(b == b'1')),
    ))
}

/// Render `index` as a binary string zero-padded to `width` digits.
pub fn format_bits(index: u64, width: u32) -> String {
    format!("{index:0width$b}", width = width as usize)
}

/// Check that `index` addresses a state of a `qubit_count`-qubit register.
pub fn check_index(index: u64, qubit_count: u32) -> CalcResult<()> {
    validate_qubit_count(qubit_count)?;
    if index_bound(qubit_count).is_some_and(|total| index >= total) {
        return Err(CalcError::IndexOutOfRange { index, qubit_count });
    }
    Ok(())
}
