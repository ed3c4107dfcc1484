//! Command to derive a sub-asset location.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use assetpath::AssetPath;
use clap::Args;

/// Print where a sub-asset of ASSET_PATH with the given suffix is stored.
///
/// The sub-asset lives beside the asset at `{dir}/{name}{suffix}`, for
/// example `Assets/avatar.prefab` + `.MetaObject/Meta.asset` gives
/// `Assets/avatar.MetaObject/Meta.asset`.
#[derive(Args)]
pub struct ChildCommand {
    /// The main asset
    #[arg(value_name = "ASSET_PATH")]
    pub asset_path: String,

    /// Suffix appended to the asset name
    #[arg(value_name = "SUFFIX", allow_hyphen_values = true)]
    pub suffix: String,
}

impl ChildCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let sanitizer = config.segment_sanitizer()?;
        let asset = AssetPath::new(&self.asset_path, config.normalizer(), &sanitizer)?;
        let child = asset.child_with(&self.suffix, &sanitizer)?;

        println!("{child}");
        Ok(())
    }
}
