//! Main entry point for the assetpath CLI.
//!
//! Commands:
//! - `normalize`: Canonicalize paths
//! - `parent`: Print the canonical parent of a path
//! - `same-facility`: Compare two directories
//! - `asset-info`: Show the parts of an asset path
//! - `child`: Derive a sub-asset location
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completions

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let logger = assetpath::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        alt_separator: cli.alt_separator,
        no_config: cli.no_config,
    };

    let result = match cli.command {
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Parent(cmd) => cmd.execute(&global),
        cli::Command::SameFacility(cmd) => cmd.execute(&global),
        cli::Command::AssetInfo(cmd) => cmd.execute(&global),
        cli::Command::Child(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            logger.debug(&format!("exiting with status {}", e.exit_code()));
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
