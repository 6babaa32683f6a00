//! Configuration layer for slp.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`FileConfig`])
//! - Field updates ([`ConfigOption`], [`Field`])
//! - Sort key and percentile validation ([`validate`], [`SortKeys`])
//! - Precedence resolution with provenance ([`resolve()`], [`Resolver`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Flags passed on this command line
//! 2. **TOML config file** - Keys present in the file named by `--config`
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! A key missing from the config file keeps the value beneath it; it does
//! not reset the field. This includes `percentiles`: only `percentiles = []`
//! clears the list.
//!
//! # Boolean Flag Semantics
//!
//! Boolean flags are tri-state on the command line. `--reverse` and
//! `--reverse=true` set the field explicitly, `--reverse=false` explicitly
//! clears it (overriding a `reverse = true` in the config file), and
//! omitting the flag leaves the decision to the file or the default.
//!
//! # Validation
//!
//! The sort key is checked against a caller-supplied [`SortKeys`] after
//! every step that can change it. Percentiles must lie in `[0, 100]` with
//! no duplicates.

mod cli;
pub mod defaults;
mod error;
mod model;
mod option;
mod resolve;
mod sort;
mod toml;
pub mod validate;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod resolve_tests;

pub use cli::{Cli, CliOptions, Command};
pub use error::{ConfigError, ErrorKind};
pub use model::Config;
pub use option::{ConfigOption, Field, apply_all};
pub use resolve::{Provenance, Resolved, Resolver, Source, resolve};
pub use sort::{SortKeys, SortState};
pub use toml::{FileConfig, default_config_template, write_default_config};
