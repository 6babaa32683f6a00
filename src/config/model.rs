//! The resolved configuration record.

use std::fmt;

use super::defaults;

/// Runtime configuration for a single `slp` invocation.
///
/// A `Config` starts from [`Config::default`] and is overlaid by the
/// resolver. Once [`resolve`](super::resolve()) returns it, downstream
/// stages only read it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)] // mirrors the boolean CLI flags
pub struct Config {
    /// Input log path, or `-` for standard input
    pub file: String,

    /// Output format identifier
    pub format: String,

    /// Active sort key (member of the sort allow-list)
    pub sort: String,

    /// Reverse the sort order
    pub reverse: bool,

    /// Omit table headers
    pub no_headers: bool,

    /// Print table footers
    pub show_footers: bool,

    /// Maximum number of result rows
    pub limit: i64,

    /// Output column selection
    pub output: String,

    /// Raw matching-group expressions (comma separated)
    pub matching_groups: String,

    /// Raw filter expression
    pub filters: String,

    /// Position (checkpoint) file path
    pub pos: String,

    /// Do not persist the read position
    pub no_save_pos: bool,

    /// Percentile columns, in the order given, each in `[0, 100]`
    pub percentiles: Vec<u8>,

    /// Collapse `WHERE ... IN (...)` lists when abstracting queries
    pub bundle_where_in: bool,

    /// Collapse `VALUES (...), (...)` lists when abstracting queries
    pub bundle_values: bool,

    /// Keep literal values instead of abstracting queries
    pub no_abstract: bool,

    /// Rows per page
    pub pagination_limit: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: defaults::FILE.to_string(),
            format: defaults::FORMAT.to_string(),
            sort: defaults::SORT.to_string(),
            reverse: false,
            no_headers: false,
            show_footers: false,
            limit: defaults::LIMIT,
            output: defaults::OUTPUT.to_string(),
            matching_groups: String::new(),
            filters: String::new(),
            pos: String::new(),
            no_save_pos: false,
            percentiles: Vec::new(),
            bundle_where_in: false,
            bundle_values: false,
            no_abstract: false,
            pagination_limit: defaults::PAGINATION_LIMIT,
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let percentiles = self
            .percentiles
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");

        write!(
            f,
            "Config {{ file: {}, format: {}, sort: {}, reverse: {}, limit: {}, page: {}, \
             percentiles: [{}], pos: {}, nosave_pos: {} }}",
            self.file,
            self.format,
            self.sort,
            self.reverse,
            self.limit,
            self.pagination_limit,
            percentiles,
            if self.pos.is_empty() { "none" } else { self.pos.as_str() },
            self.no_save_pos,
        )
    }
}
