//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

const BIN_NAME: &str = "assetpath";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            eprintln!("# Generating {} completion script", self.shell);
            match self.shell {
                Shell::Bash => {
                    eprintln!("# Add to ~/.bashrc:");
                    eprintln!("#   eval \"$(assetpath completions bash)\"");
                }
                Shell::Zsh => {
                    eprintln!("#   assetpath completions zsh > ~/.zsh/completions/_assetpath");
                }
                Shell::Fish => {
                    eprintln!("#   assetpath completions fish | source");
                }
                Shell::PowerShell => {
                    eprintln!("#   assetpath completions powershell | Out-String | Invoke-Expression");
                }
                _ => {}
            }
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
