//! Short-circuiting construction pipelines.
//!
//! Building a composite asset is a sequence of fallible steps over a shared
//! context. Each step returns an [`Outcome`]; [`Outcome::and_then`] runs the
//! next step only when the previous one succeeded, so the final outcome is
//! either the finished value or exactly the message of the first failure.
//!
//! The pipeline itself has no side effects and no knowledge of what the
//! steps allocate. The caller owns the partially built resource, usually
//! through a [`Scoped`] guard that disposes of it unless the build is
//! committed.
//!
//! # Examples
//!
//! ```
//! use assetpath::pipeline::{Outcome, Scoped};
//! use std::cell::Cell;
//!
//! let discarded = Cell::new(false);
//! let mut prefab = Scoped::new(Vec::<String>::new(), |_| discarded.set(true));
//!
//! let outcome = Outcome::ok(())
//!     .and_then(|()| {
//!         prefab.push("Meta".to_string());
//!         Outcome::ok(())
//!     })
//!     .and_then(|()| Outcome::<()>::err("Target is not Humanoid-model"));
//!
//! let built = prefab.settle(outcome);
//! assert_eq!(built.message(), Some("Target is not Humanoid-model"));
//! assert!(discarded.get());
//! ```

pub mod outcome;
pub mod scope;
pub mod steps;

pub use outcome::Outcome;
pub use scope::Scoped;
pub use steps::{Pipeline, PipelineReport};
