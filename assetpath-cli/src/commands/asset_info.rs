//! Command to show the parts of an asset path.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use assetpath::AssetPath;
use clap::Args;

/// Show the canonical path, directory, name and extension of an asset.
#[derive(Args)]
pub struct AssetInfoCommand {
    /// Asset path to inspect
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl AssetInfoCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let sanitizer = config.segment_sanitizer()?;
        let asset = AssetPath::new(&self.path, config.normalizer(), &sanitizer)?;

        println!("path: {}", asset.path());
        println!("dir_name: {}", asset.dir_name());
        println!("file_name: {}", asset.file_name());
        println!("name: {}", asset.name());
        println!("extension: {}", asset.extension());

        Ok(())
    }
}
