//! Ouro CLI - Inheritance cycle detection from the command line.
//!
//! Ouro reads an extracted class → parent relationship table and reports
//! any cyclic inheritance it proves.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;

/// Ouro: cyclic-inheritance detector for extracted class hierarchies.
#[derive(Parser)]
#[command(name = "ouro")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect inheritance cycles in a relationship table
    Check {
        /// Path to the JSON table ({"pkg.Class": "pkg.Parent" | null}), or - for stdin
        table: PathBuf,

        /// Exit nonzero when any cycle is found (for CI gates)
        #[arg(long)]
        fail_on_cycle: bool,
    },

    /// Print the ancestor chain of every class (or one class)
    Chains {
        /// Path to the JSON table, or - for stdin
        table: PathBuf,

        /// Only print the chain of this fully-qualified class
        #[arg(short, long)]
        class: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    // Run the appropriate command
    let result = match cli.command {
        Commands::Check {
            table,
            fail_on_cycle,
        } => cli::check::run(&table, fail_on_cycle),
        Commands::Chains { table, class } => cli::chains::run(&table, class.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}
