//! Command to print the canonical parent of a path.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;

/// Print the parent directory of a path.
#[derive(Args)]
pub struct ParentCommand {
    /// Path whose parent to print
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl ParentCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        match config.normalizer().parent_of(&self.path) {
            Some(parent) => {
                println!("{parent}");
                Ok(())
            }
            None => Err(CliError::SemanticFailure(format!(
                "'{}' has no parent",
                self.path
            ))),
        }
    }
}
