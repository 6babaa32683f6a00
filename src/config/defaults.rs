//! Default values for configuration options.
//!
//! Centralized constants to avoid magic values scattered across the codebase.

/// Default input file (`-` reads standard input).
pub const FILE: &str = "-";

/// Default output format.
pub const FORMAT: &str = "table";

/// Default sort key.
pub const SORT: &str = "count";

/// Default maximum number of result rows.
pub const LIMIT: i64 = 5000;

/// Default number of rows per page.
pub const PAGINATION_LIMIT: i64 = 100;

/// Default output column selection (empty selects every column).
pub const OUTPUT: &str = "";

/// Default configuration file name written by `slp init`.
pub const CONFIG_FILE_NAME: &str = "slp.toml";
