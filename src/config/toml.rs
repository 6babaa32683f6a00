//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde. Keys mirror
//! the [`Config`](super::Config) field names; unknown keys are ignored so
//! that files written for newer or older releases still load.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;
use super::option::ConfigOption;
use super::validate::validate_percentiles;

/// Partial configuration read from a TOML file.
///
/// Every field is optional: only keys present in the file overlay the
/// values beneath them.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    /// Input log path
    pub file: Option<String>,

    /// Output format
    pub format: Option<String>,

    /// Sort key
    pub sort: Option<String>,

    /// Reverse the sort order
    pub reverse: Option<bool>,

    /// Omit table headers
    #[serde(alias = "noheaders")]
    pub no_headers: Option<bool>,

    /// Print table footers
    pub show_footers: Option<bool>,

    /// Maximum number of result rows
    pub limit: Option<i64>,

    /// Output column selection
    pub output: Option<String>,

    /// Raw matching-group expressions
    pub matching_groups: Option<String>,

    /// Raw filter expression
    pub filters: Option<String>,

    /// Position file path
    #[serde(alias = "pos_file")]
    pub pos: Option<String>,

    /// Do not persist the read position
    #[serde(alias = "nosave_pos")]
    pub no_save_pos: Option<bool>,

    /// Percentile columns
    pub percentiles: Option<Vec<i64>>,

    /// Collapse `WHERE ... IN (...)` lists
    pub bundle_where_in: Option<bool>,

    /// Collapse `VALUES (...)` lists
    pub bundle_values: Option<bool>,

    /// Keep literal values instead of abstracting queries
    #[serde(alias = "noabstract")]
    pub no_abstract: Option<bool>,

    /// Rows per page
    #[serde(alias = "page")]
    pub pagination_limit: Option<i64>,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    ///
    /// The file is read to completion and closed before parsing starts.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or a known key has the
    /// wrong value type.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    /// Converts the keys present in the file into options, in canonical
    /// field order.
    ///
    /// # Errors
    ///
    /// Returns an error if the percentile list is out of range or has
    /// duplicates.
    pub fn options(&self) -> Result<Vec<ConfigOption>, ConfigError> {
        let percentiles = self
            .percentiles
            .as_deref()
            .map(validate_percentiles)
            .transpose()?;

        let options = [
            self.file.clone().map(ConfigOption::File),
            self.format.clone().map(ConfigOption::Format),
            self.sort.clone().map(ConfigOption::Sort),
            self.reverse.map(ConfigOption::Reverse),
            self.no_headers.map(ConfigOption::NoHeaders),
            self.show_footers.map(ConfigOption::ShowFooters),
            self.limit.map(ConfigOption::Limit),
            self.output.clone().map(ConfigOption::Output),
            self.matching_groups.clone().map(ConfigOption::MatchingGroups),
            self.filters.clone().map(ConfigOption::Filters),
            self.pos.clone().map(ConfigOption::Pos),
            self.no_save_pos.map(ConfigOption::NoSavePos),
            percentiles.map(ConfigOption::Percentiles),
            self.bundle_where_in.map(ConfigOption::BundleWhereIn),
            self.bundle_values.map(ConfigOption::BundleValues),
            self.no_abstract.map(ConfigOption::NoAbstract),
            self.pagination_limit.map(ConfigOption::PaginationLimit),
        ];

        Ok(options.into_iter().flatten().collect())
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, default_config_template()).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# slp configuration file
#
# Precedence (highest first): explicit command-line flags, this file,
# built-in defaults. Keys left commented out keep their default.

# Slow query log to read ("-" reads standard input)
# file = "/var/log/mysql/slow.log"

# Output format: "table", "markdown", "tsv", "csv", "html"
# format = "table"

# Sort key: count, query, or <min|max|sum|avg>-<query-time|lock-time|rows-sent|rows-examined>
sort = "count"

# Reverse the sort order
# reverse = false

# Omit table headers
# no_headers = false

# Print table footers
# show_footers = false

# Maximum number of result rows
limit = 5000

# Columns to display, comma separated (empty = all)
# output = ""

# Regular expressions that group queries, comma separated
# matching_groups = ""

# Filter expression
# filters = ""

# Position file for incremental reads
# pos = "/tmp/slp.pos"

# Do not update the position file
# no_save_pos = false

# Percentile columns, each between 0 and 100, no duplicates
# percentiles = [50, 90, 99]

# Collapse WHERE ... IN (...) and VALUES (...) lists
# bundle_where_in = false
# bundle_values = false

# Keep literal values instead of abstracting queries
# no_abstract = false

# Rows per page
# pagination_limit = 100
"#
    .to_string()
}
