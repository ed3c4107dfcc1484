//! CLI command implementations.
//!
//! - `normalize`: Canonicalize paths
//! - `parent`: Print the canonical parent of a path
//! - `same_facility`: Compare two directories
//! - `asset_info`: Show the parts of an asset path
//! - `child`: Derive a sub-asset location
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completions

pub mod asset_info;
pub mod child;
pub mod completions;
pub mod normalize;
pub mod parent;
pub mod same_facility;
pub mod validate;

pub use asset_info::AssetInfoCommand;
pub use child::ChildCommand;
pub use completions::CompletionsCommand;
pub use normalize::NormalizeCommand;
pub use parent::ParentCommand;
pub use same_facility::SameFacilityCommand;
pub use validate::ValidateCommand;
