//! Error types for configuration parsing, loading and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Every variant is fatal to resolution: no configuration is produced
/// when one of these is returned.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Command-line flags could not be read.
    #[error("Failed to read command-line flags: {0}")]
    FlagRead(#[from] clap::Error),

    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration (syntax or value type).
    #[error("Failed to parse TOML config: {0}")]
    FileParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A single field held malformed structured input.
    #[error("Invalid value '{value}' for {field}: {reason}")]
    Parse {
        /// Name of the field
        field: &'static str,
        /// The offending token
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Sort key is not in the allow-list.
    #[error("Invalid sort key '{value}': expected one of {allowed}")]
    InvalidSort {
        /// The rejected sort key
        value: String,
        /// Comma-separated list of permitted keys
        allowed: String,
    },

    /// Percentile outside `[0, 100]`.
    #[error("Invalid percentile {value}: must be between 0 and 100")]
    InvalidPercentile {
        /// The out-of-range value
        value: i64,
    },

    /// Percentile listed more than once.
    #[error("Duplicate percentile {value}")]
    DuplicatePercentile {
        /// The repeated value
        value: i64,
    },
}

/// Coarse classification of [`ConfigError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The flag layer could not be read.
    FlagRead,
    /// The config file is missing, unreadable, malformed or unwritable.
    ConfigLoad,
    /// Malformed input within a single field.
    Parse,
    /// Well-formed but semantically invalid value.
    Validation,
}

impl ConfigError {
    /// Returns the class this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::FlagRead(_) => ErrorKind::FlagRead,
            Self::FileRead { .. } | Self::FileParse(_) | Self::FileWrite { .. } => {
                ErrorKind::ConfigLoad
            }
            Self::Parse { .. } => ErrorKind::Parse,
            Self::InvalidSort { .. }
            | Self::InvalidPercentile { .. }
            | Self::DuplicatePercentile { .. } => ErrorKind::Validation,
        }
    }

    /// Returns true if this is a semantic validation failure.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation)
    }
}
