//! Command to check whether two directories share a facility.

use crate::error::CliError;
use crate::utils::{directory_key, load_configuration, GlobalOptions};
use assetpath::{init_logger, FacilityMatcher};
use clap::Args;

/// Check whether one directory is an ancestor of (or equal to) the other.
///
/// Both directories are canonicalized first. Prints `true` or `false`
/// unless `--assert` is given.
#[derive(Args)]
pub struct SameFacilityCommand {
    /// First directory
    #[arg(value_name = "DIR_A")]
    pub dir_a: String,

    /// Second directory
    #[arg(value_name = "DIR_B")]
    pub dir_b: String,

    /// Print nothing; exit with status 1 unless the directories match
    #[arg(long)]
    pub assert: bool,
}

impl SameFacilityCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = init_logger(global.verbose, global.quiet);
        let config = load_configuration(global)?;
        let normalizer = config.normalizer();

        let dir_a = directory_key(&normalizer, &self.dir_a);
        let dir_b = directory_key(&normalizer, &self.dir_b);
        logger.info(&format!("comparing {dir_a} and {dir_b}"));

        let same = FacilityMatcher::new(normalizer).is_same_facility(&dir_a, &dir_b);

        if self.assert {
            if same {
                Ok(())
            } else {
                Err(CliError::SemanticFailure(format!(
                    "Assertion failed: {dir_a} and {dir_b} are not in the same facility"
                )))
            }
        } else {
            println!("{same}");
            Ok(())
        }
    }
}
