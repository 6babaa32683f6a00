//! slp: slow query log profiler
//!
//! Configuration resolution for the slp log analyzer: built-in defaults,
//! an optional TOML config file and command-line flags are merged with a
//! fixed precedence and validated before any log is read.

pub mod config;
