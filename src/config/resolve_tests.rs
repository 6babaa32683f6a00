//! Tests for precedence resolution.

use super::ConfigError;
use super::cli::{Cli, CliOptions};
use super::model::Config;
use super::option::{ConfigOption, Field, apply_all};
use super::resolve::{Resolved, Resolver, Source, resolve};
use super::sort::SortKeys;

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["slp"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Helper to split CLI args into option lists using the builtin sort keys
fn options(args: &[&str]) -> CliOptions {
    cli(args).options(&SortKeys::builtin()).unwrap()
}

/// Helper to resolve CLI args against optional TOML text
fn resolve_with(args: &[&str], toml: Option<&str>) -> Result<Resolved, ConfigError> {
    let options = options(args);
    resolve(&options.defaults, &options.explicit, toml, &SortKeys::builtin())
}
