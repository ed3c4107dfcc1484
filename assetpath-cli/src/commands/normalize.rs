//! Command to canonicalize one or more paths.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use assetpath::init_logger;
use clap::Args;

/// Canonicalize paths and print one per line.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Paths to canonicalize
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub paths: Vec<String>,

    /// Replace characters that are illegal in asset filenames
    #[arg(long)]
    pub sanitize: bool,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = init_logger(global.verbose, global.quiet);
        let config = load_configuration(global)?;
        let normalizer = config.normalizer();

        let sanitizer = if self.sanitize {
            Some(config.segment_sanitizer()?)
        } else {
            config.sanitizer()?
        };

        for raw in &self.paths {
            let normalized = match &sanitizer {
                Some(sanitizer) => normalizer.normalize_with(raw, |s| sanitizer.apply(s)),
                None => normalizer.normalize(raw),
            };
            logger.debug(&format!("{raw:?} -> {normalized:?}"));
            println!("{normalized}");
        }

        Ok(())
    }
}
