//! CLI module
//!
//! Command-line interface for the Terraform external data source.
//!
//! The program takes no subcommand: it reads the query object, paginates and
//! prints one JSON line. Flags only tune the run.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::{RunReport, Runner, EXIT_FAILURE, EXIT_SUCCESS};
