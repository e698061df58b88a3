//! Batch terminator sentinels
//!
//! Batches are conventionally closed by a one-element array holding `0`
//! (most endpoints) or `-1` (order listings). Terminators are dropped before
//! decoding.

use serde_json::Value;

/// Default terminator values
pub const DEFAULT_TERMINATORS: &[i64] = &[0, -1];

/// The set of values that mark a one-element raw array as a terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminatorSet {
    values: Vec<i64>,
}

impl TerminatorSet {
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        let mut values: Vec<i64> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();
        Self { values }
    }

    /// A set that recognizes no terminators.
    pub fn none() -> Self {
        Self { values: Vec::new() }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Returns true if `raw` is a one-element array holding a terminator value.
    pub fn is_terminator(&self, raw: &Value) -> bool {
        let Some([only]) = raw.as_array().map(Vec::as_slice) else {
            return false;
        };

        let Value::Number(n) = only else {
            return false;
        };

        let value = n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        });

        value.map_or(false, |v| self.values.binary_search(&v).is_ok())
    }
}

impl Default for TerminatorSet {
    fn default() -> Self {
        Self::new(DEFAULT_TERMINATORS.iter().copied())
    }
}
