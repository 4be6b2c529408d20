//! Command-line interface for flight-filter.
//!
//! Provides commands for running the qualification pipeline and for
//! dumping the built-in fixture flights.

mod commands;

pub use commands::{parse_cli, run_with_cli, Cli, Commands};
