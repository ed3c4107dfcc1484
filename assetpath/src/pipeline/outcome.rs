//! The success/failure value threaded through a build pipeline.

use std::fmt;

use crate::error::{Error, Result};

/// Result of one construction step.
///
/// `Ok` carries the value handed to the next step; `Err` carries the
/// human-readable message of the step that failed. The message is opaque
/// and is passed along untouched.
///
/// # Examples
///
/// ```
/// use assetpath::pipeline::Outcome;
///
/// let outcome = Outcome::ok(1)
///     .and_then(|n| Outcome::ok(n + 1))
///     .and_then(|_| Outcome::<i32>::err("boom"))
///     .and_then(|n| Outcome::ok(n * 100));
///
/// assert_eq!(outcome, Outcome::err("boom"));
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome<V> {
    /// The step succeeded.
    Ok(V),
    /// The step failed with this message.
    Err(String),
}

impl<V> Outcome<V> {
    /// A successful outcome.
    pub const fn ok(value: V) -> Self {
        Self::Ok(value)
    }

    /// A failed outcome with the given message.
    pub fn err(message: impl Into<String>) -> Self {
        Self::Err(message.into())
    }

    /// Run `f` on the success value; pass a failure through unchanged.
    ///
    /// `f` is never called once a failure has occurred upstream.
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(V) -> Outcome<U>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(message) => Outcome::Err(message),
        }
    }

    /// Transform the success value.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(message) => Outcome::Err(message),
        }
    }

    /// Check if this is a success.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Check if this is a failure.
    #[must_use]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Borrow the success value.
    #[must_use]
    pub const fn value(&self) -> Option<&V> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Take the success value.
    #[must_use]
    pub fn into_value(self) -> Option<V> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Borrow the failure message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Ok(_) => None,
            Self::Err(message) => Some(message),
        }
    }

    /// Convert into a library result so `?` can be used.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StepFailed`] carrying the step's message.
    pub fn into_result(self) -> Result<V> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(message) => Err(Error::StepFailed { message }),
        }
    }
}

impl<V> From<Outcome<V>> for std::result::Result<V, String> {
    fn from(outcome: Outcome<V>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(message) => Err(message),
        }
    }
}

impl<V, E: fmt::Display> From<std::result::Result<V, E>> for Outcome<V> {
    fn from(result: std::result::Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(e) => Self::Err(e.to_string()),
        }
    }
}
