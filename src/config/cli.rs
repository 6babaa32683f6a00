//! CLI argument parsing using clap.
//!
//! Every setting flag is an `Option`: `None` means the user did not pass
//! the flag in this invocation, so the built-in default applies and the
//! config file may override it. `Some` is an explicit value that beats
//! every other source.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use super::defaults;
use super::error::ConfigError;
use super::model::Config;
use super::option::{ConfigOption, Field};
use super::sort::SortKeys;
use super::validate::{parse_percentiles, validate_sort};

/// slp: slow query log profiler
///
/// Aggregates MySQL slow query logs and prints per-query statistics.
#[derive(Debug, Parser)]
#[command(name = "slp")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Slow query log to read ("-" for standard input)
    #[arg(long, short)]
    pub file: Option<String>,

    /// Output format (table, markdown, tsv, csv, html)
    #[arg(long)]
    pub format: Option<String>,

    /// Sort key
    #[arg(long)]
    pub sort: Option<String>,

    /// Reverse the sort order
    #[arg(long, short, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub reverse: Option<bool>,

    /// Omit table headers
    #[arg(long = "noheaders", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub no_headers: Option<bool>,

    /// Print table footers
    #[arg(long = "show-footers", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub show_footers: Option<bool>,

    /// Maximum number of result rows
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Columns to display, comma separated
    #[arg(long, short)]
    pub output: Option<String>,

    /// Regular expressions that group queries, comma separated
    #[arg(long = "matching-groups", short = 'm', value_name = "PATTERNS")]
    pub matching_groups: Option<String>,

    /// Filter expression
    #[arg(long)]
    pub filters: Option<String>,

    /// Position file for incremental reads
    #[arg(long, value_name = "PATH")]
    pub pos: Option<String>,

    /// Do not update the position file
    #[arg(long = "nosave-pos", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub no_save_pos: Option<bool>,

    /// Percentile columns, comma separated (e.g. 50,90,99)
    #[arg(long, value_name = "LIST")]
    pub percentiles: Option<String>,

    /// Collapse WHERE ... IN (...) lists
    #[arg(long = "bundle-where-in", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub bundle_where_in: Option<bool>,

    /// Collapse VALUES (...), (...) lists
    #[arg(long = "bundle-values", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub bundle_values: Option<bool>,

    /// Keep literal values instead of abstracting queries
    #[arg(long = "noabstract", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub no_abstract: Option<bool>,

    /// Rows per page
    #[arg(long = "page", allow_negative_numbers = true)]
    pub pagination_limit: Option<i64>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for slp
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE_NAME)]
        output: PathBuf,
    },
}

/// Options collected from the command line, split by how they were set.
///
/// Both lists are in canonical field order and together cover every field
/// exactly once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliOptions {
    /// Fields the user left alone, carrying their default value
    pub defaults: Vec<ConfigOption>,

    /// Fields the user set explicitly in this invocation
    pub explicit: Vec<ConfigOption>,
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Parses CLI arguments from an iterator without exiting on failure.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FlagRead`] if the arguments are malformed.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter).map_err(ConfigError::from)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }

    /// The config file path with a leading `~` expanded to the home directory.
    #[must_use]
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.as_deref().map(expand_tilde)
    }

    /// Splits the setting flags into default and explicit options.
    ///
    /// The sort value the command line ends up with (explicit or default)
    /// is checked against `sort_keys`, and the percentile list is parsed.
    ///
    /// # Errors
    ///
    /// Returns an error if the sort key is not allowed or the percentile
    /// list is malformed or invalid.
    pub fn options(&self, sort_keys: &SortKeys) -> Result<CliOptions, ConfigError> {
        validate_sort(self.sort.as_deref().unwrap_or(defaults::SORT), sort_keys)?;

        let percentiles = self
            .percentiles
            .as_deref()
            .map(parse_percentiles)
            .transpose()?;

        let flags = [
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

        let base = Config::default();
        let mut collected = CliOptions::default();

        for (field, flag) in Field::ALL.into_iter().zip(flags) {
            match flag {
                Some(option) => {
                    debug_assert_eq!(option.field(), field);
                    collected.explicit.push(option);
                }
                None => collected
                    .defaults
                    .push(ConfigOption::from_config(field, &base)),
            }
        }

        Ok(collected)
    }
}

fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest))
}
