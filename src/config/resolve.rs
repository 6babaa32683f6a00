//! Precedence merge of defaults, config file and explicit CLI options.
//!
//! Resolution runs in three fixed steps:
//!
//! 1. apply the default options onto [`Config::default`]
//! 2. overlay the keys present in the config file, if one was given
//! 3. apply the explicit CLI options
//!
//! Later steps overwrite earlier ones, so explicit flags always win. The
//! sort key is validated after each step because every step can change it.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use super::cli::Cli;
use super::error::ConfigError;
use super::model::Config;
use super::option::{ConfigOption, Field};
use super::sort::{SortKeys, SortState};
use super::toml::FileConfig;
use super::validate::validate_percentiles;

/// Where a resolved field value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Built-in default (the flag was not passed)
    Default,

    /// Configuration file; the path is known when loaded from disk
    File(Option<PathBuf>),

    /// Flag passed explicitly on the command line
    Cli,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::File(Some(path)) => write!(f, "file:{}", path.display()),
            Self::File(None) => f.write_str("file"),
            Self::Cli => f.write_str("cli"),
        }
    }
}

/// Per-field record of which source produced the resolved value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Provenance {
    sources: BTreeMap<Field, Source>,
}

impl Provenance {
    /// Records that `field` was last written by `source`.
    pub fn track(&mut self, field: Field, source: Source) {
        self.sources.insert(field, source);
    }

    /// The source of `field`, if it was written at all.
    #[must_use]
    pub fn source(&self, field: Field) -> Option<&Source> {
        self.sources.get(&field)
    }

    /// Fields whose value did not come from a default.
    pub fn overridden(&self) -> impl Iterator<Item = (Field, &Source)> {
        self.sources
            .iter()
            .filter(|(_, source)| **source != Source::Default)
            .map(|(field, source)| (*field, source))
    }

    /// Human-readable list of overridden fields, one per line.
    #[must_use]
    pub fn summary(&self) -> String {
        let lines: Vec<String> = self
            .overridden()
            .map(|(field, source)| format!("  {field} <- {source}"))
            .collect();

        if lines.is_empty() {
            "all fields at defaults".to_string()
        } else {
            format!("overridden fields:\n{}", lines.join("\n"))
        }
    }
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone)]
pub struct Resolved {
    /// The final configuration
    pub config: Config,

    /// Which source produced each field
    pub provenance: Provenance,
}

/// Resolves a configuration from option lists and an optional file document.
///
/// `defaults` are the values of every field the user did not set (the
/// caller has already chosen between CLI default and built-in default).
/// `file` is the raw TOML text of the config file, or `None` when no file
/// was named; blank text overlays nothing.
///
/// # Errors
///
/// Returns an error if the file cannot be parsed, or if the sort key or
/// percentile list is invalid after any step.
pub fn resolve(
    defaults: &[ConfigOption],
    explicit: &[ConfigOption],
    file: Option<&str>,
    sort_keys: &SortKeys,
) -> Result<Resolved, ConfigError> {
    let mut resolver = Resolver::new(sort_keys.clone());
    resolver.apply_defaults(defaults)?;

    if let Some(content) = file {
        if content.trim().is_empty() {
            tracing::debug!("Config file is empty, nothing to overlay");
        } else {
            let overlay = FileConfig::parse(content)?;
            resolver.apply_file(&overlay, None)?;
        }
    }

    resolver.apply_explicit(explicit)?;
    resolver.finish()
}

/// Stateful driver of the three resolution steps.
///
/// Use [`resolve`] or [`Resolver::load`] unless the steps need to be
/// driven individually.
#[derive(Debug)]
pub struct Resolver {
    config: Config,
    provenance: Provenance,
    sort: SortState,
}

impl Resolver {
    /// Creates a resolver starting from the built-in defaults.
    #[must_use]
    pub fn new(sort_keys: SortKeys) -> Self {
        let mut provenance = Provenance::default();
        for field in Field::ALL {
            provenance.track(field, Source::Default);
        }

        Self {
            config: Config::default(),
            provenance,
            sort: SortState::new(sort_keys),
        }
    }

    /// Resolves the configuration for a parsed command line.
    ///
    /// Reads the file named by `--config`, if any. Without `--config` the
    /// file loader is never invoked.
    ///
    /// # Errors
    ///
    /// Returns an error if the flags are invalid, the file cannot be read
    /// or parsed, or validation fails.
    pub fn load(cli: &Cli, sort_keys: &SortKeys) -> Result<Resolved, ConfigError> {
        let options = cli.options(sort_keys)?;
        tracing::debug!(
            explicit = options.explicit.len(),
            defaults = options.defaults.len(),
            "Collected command-line options"
        );

        let mut resolver = Self::new(sort_keys.clone());
        resolver.apply_defaults(&options.defaults)?;

        if let Some(path) = cli.config_path() {
            resolver.load_file(&path)?;
        }

        resolver.apply_explicit(&options.explicit)?;
        resolver.finish()
    }

    /// Step 1: applies the default options.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting sort key is not allowed.
    pub fn apply_defaults(&mut self, defaults: &[ConfigOption]) -> Result<(), ConfigError> {
        self.apply(defaults, &Source::Default);
        self.sort.set_and_validate(&self.config.sort)
    }

    /// Step 2: reads and overlays a config file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or its
    /// values are invalid.
    pub fn load_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        tracing::debug!("Loading config file: {}", path.display());
        let overlay = FileConfig::load(path)?;
        self.apply_file(&overlay, Some(path.to_path_buf()))
    }

    /// Step 2: overlays the keys present in a parsed config file.
    ///
    /// Keys absent from the file keep the value from step 1.
    ///
    /// # Errors
    ///
    /// Returns an error if the file's percentile list or the resulting
    /// sort key is invalid.
    pub fn apply_file(
        &mut self,
        overlay: &FileConfig,
        path: Option<PathBuf>,
    ) -> Result<(), ConfigError> {
        let options = overlay.options()?;
        self.apply(&options, &Source::File(path));
        self.sort.set_and_validate(&self.config.sort)
    }

    /// Step 3: applies the explicit options, overriding everything beneath.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting sort key is not allowed.
    pub fn apply_explicit(&mut self, explicit: &[ConfigOption]) -> Result<(), ConfigError> {
        self.apply(explicit, &Source::Cli);
        self.sort.set_and_validate(&self.config.sort)
    }

    /// Runs the final checks and hands out the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the percentile list is invalid.
    pub fn finish(self) -> Result<Resolved, ConfigError> {
        let values: Vec<i64> = self.config.percentiles.iter().map(|&p| i64::from(p)).collect();
        validate_percentiles(&values)?;

        tracing::debug!("{}", self.provenance.summary());

        Ok(Resolved {
            config: self.config,
            provenance: self.provenance,
        })
    }

    /// The configuration as resolved so far.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The sort state tracking the last accepted key.
    #[must_use]
    pub const fn sort(&self) -> &SortState {
        &self.sort
    }

    fn apply(&mut self, options: &[ConfigOption], source: &Source) {
        for option in options {
            tracing::trace!(field = %option.field(), %source, "Applying option");
            option.apply(&mut self.config);
            self.provenance.track(option.field(), source.clone());
        }
    }
}
