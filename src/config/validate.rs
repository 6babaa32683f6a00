//! Semantic checks on derived settings.
//!
//! These are pure functions: they never touch a [`Config`](super::Config)
//! and take the allow-list as an argument.

use std::collections::HashSet;

use super::error::ConfigError;
use super::option::Field;
use super::sort::SortKeys;

/// Highest percentile accepted.
const MAX_PERCENTILE: i64 = 100;

/// Checks that `candidate` is a member of `allowed`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidSort`] naming the candidate and the
/// permitted values.
pub fn validate_sort(candidate: &str, allowed: &SortKeys) -> Result<(), ConfigError> {
    if allowed.contains(candidate) {
        return Ok(());
    }

    Err(ConfigError::InvalidSort {
        value: candidate.to_string(),
        allowed: allowed.to_string(),
    })
}

/// Parses a comma-separated percentile list and validates it.
///
/// Blank input yields an empty list (no percentile columns).
///
/// # Errors
///
/// - [`ConfigError::Parse`] if a token is not an integer
/// - [`ConfigError::InvalidPercentile`] / [`ConfigError::DuplicatePercentile`]
///   from [`validate_percentiles`]
pub fn parse_percentiles(raw: &str) -> Result<Vec<u8>, ConfigError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let values = raw
        .split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<i64>().map_err(|e| ConfigError::Parse {
                field: Field::Percentiles.key(),
                value: token.to_string(),
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    validate_percentiles(&values)
}

/// Checks that every value is in `[0, 100]` and appears once.
///
/// Returns the values narrowed to `u8`, order preserved.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPercentile`] for the first out-of-range
/// value, or [`ConfigError::DuplicatePercentile`] for the first repeat.
pub fn validate_percentiles(values: &[i64]) -> Result<Vec<u8>, ConfigError> {
    let mut seen = HashSet::with_capacity(values.len());
    let mut percentiles = Vec::with_capacity(values.len());

    for &value in values {
        if !(0..=MAX_PERCENTILE).contains(&value) {
            return Err(ConfigError::InvalidPercentile { value });
        }
        if !seen.insert(value) {
            return Err(ConfigError::DuplicatePercentile { value });
        }
        // Range already checked above.
        percentiles.push(u8::try_from(value).unwrap_or(u8::MAX));
    }

    Ok(percentiles)
}
