//! Build script for assetpath-cli.
//!
//! Generates the man page at build time using clap_mangen. The page is
//! written to OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared here by hand.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("assetpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Canonicalize asset paths and compare asset directories")
        .long_about(
            "Lexical asset path canonicalization, sub-asset location and facility checks for asset pipelines",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("alt-separator")
                .long("alt-separator")
                .help("Recognize this character as a separator in addition to '/'")
                .value_name("C")
                .global(true),
        )
        .arg(
            Arg::new("no-config")
                .long("no-config")
                .help("Ignore configuration files")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("normalize")
                .about("Canonicalize one or more paths")
                .long_about("Collapse separators, resolve '.' and '..', optionally sanitize segments"),
            Command::new("parent")
                .about("Print the canonical parent of a path")
                .long_about("Print the directory containing a path, failing when there is none"),
            Command::new("same-facility")
                .about("Check whether two directories belong to the same facility")
                .long_about("Succeed when one directory is reachable from the other by walking up parents"),
            Command::new("asset-info")
                .about("Show the parts of an asset path")
                .long_about("Print the canonical path, directory, file name, name and extension"),
            Command::new("child")
                .about("Print the location of a sub-asset stored beside an asset")
                .long_about("Derive {dir}/{name}{suffix} for a sub-asset of the given asset"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check an assetpath configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("assetpath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
