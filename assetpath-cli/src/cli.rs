//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AssetInfoCommand, ChildCommand, CompletionsCommand, NormalizeCommand, ParentCommand,
    SameFacilityCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};

/// Canonicalize asset paths and compare asset directories.
#[derive(Parser)]
#[command(name = "assetpath")]
#[command(version, about = "Canonicalize asset paths and compare asset directories", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Recognize this character as a separator in addition to '/'
    #[arg(long, value_name = "C", global = true)]
    pub alt_separator: Option<char>,

    /// Ignore configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Canonicalize one or more paths
    Normalize(NormalizeCommand),

    /// Print the canonical parent of a path
    Parent(ParentCommand),

    /// Check whether two directories belong to the same facility
    SameFacility(SameFacilityCommand),

    /// Show the parts of an asset path
    AssetInfo(AssetInfoCommand),

    /// Print the location of a sub-asset stored beside an asset
    Child(ChildCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
