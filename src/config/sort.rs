//! Sort key allow-list and the active sort selection.

use std::fmt;

use super::error::ConfigError;
use super::validate::validate_sort;

/// Metrics that slp aggregates per query.
const METRICS: [&str; 4] = ["query-time", "lock-time", "rows-sent", "rows-examined"];

/// Aggregations available for every metric.
const AGGREGATES: [&str; 4] = ["min", "max", "sum", "avg"];

/// The closed set of values the `sort` field may take.
///
/// Always passed explicitly to the validators so resolution does not
/// depend on process-wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKeys {
    keys: Vec<String>,
}

impl SortKeys {
    /// Creates an allow-list from arbitrary keys, preserving their order.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// The keys understood by the slp aggregator.
    ///
    /// `count`, `query`, then `<aggregate>-<metric>` for every pair.
    #[must_use]
    pub fn builtin() -> Self {
        let mut keys = vec!["count".to_string(), "query".to_string()];
        for aggregate in AGGREGATES {
            for metric in METRICS {
                keys.push(format!("{aggregate}-{metric}"));
            }
        }
        Self { keys }
    }

    /// Returns true if `key` is allowed.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Iterates over the allowed keys.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Number of allowed keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if no key is allowed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Default for SortKeys {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Display for SortKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.keys.join(", "))
    }
}

/// Active sort key, checked against an allow-list on every assignment.
#[derive(Debug, Clone)]
pub struct SortState {
    keys: SortKeys,
    key: Option<String>,
}

impl SortState {
    /// Creates a state with no key selected yet.
    #[must_use]
    pub const fn new(keys: SortKeys) -> Self {
        Self { keys, key: None }
    }

    /// Validates `candidate` and, if allowed, makes it the active key.
    ///
    /// On failure the previous key is kept.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSort`] if `candidate` is not allowed.
    pub fn set_and_validate(&mut self, candidate: &str) -> Result<(), ConfigError> {
        validate_sort(candidate, &self.keys)?;
        self.key = Some(candidate.to_string());
        Ok(())
    }

    /// The active key, if one has been accepted.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The allow-list this state validates against.
    #[must_use]
    pub const fn keys(&self) -> &SortKeys {
        &self.keys
    }
}
