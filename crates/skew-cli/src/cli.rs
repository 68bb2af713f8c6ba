//! CLI argument definitions for skew.
//!
//! Uses `clap` derive macros. Each command corresponds to a handler in the
//! [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "skew",
    version,
    about = "Audit a resolved dependency graph for version skew",
    long_about = "skew inspects a resolution report and verifies that all modules of a \
                  multi-module library suite resolved to the same version, reporting \
                  which transitive caller introduced any deviation."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a resolution report for version skew
    Check {
        /// Path to the resolution report (TOML)
        input: PathBuf,
        /// Treat any version mismatch as fatal
        #[arg(long)]
        fail_on_mismatch: bool,
        /// Path to skew.toml (default: skew.toml next to the input)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Report output format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Print the known family membership sets
    Families,
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Parse the process arguments.
pub fn parse() -> Cli {
    Cli::parse()
}
