//! Scoped ownership of a partially built resource.
//!
//! A pipeline cannot see what its steps allocate, so the caller that drives
//! it owns the resource being built. [`Scoped`] holds that resource with a
//! disposer: unless the build is committed, dropping the guard disposes of
//! the resource on every exit path, including early returns and panics.

use std::fmt;
use std::ops::{Deref, DerefMut};

use super::outcome::Outcome;

/// A resource that is disposed of unless explicitly committed.
///
/// # Examples
///
/// ```
/// use assetpath::pipeline::{Outcome, Scoped};
/// use std::cell::RefCell;
///
/// let disposed = RefCell::new(Vec::new());
///
/// let mut prefab = Scoped::new(vec!["root"], |parts| disposed.borrow_mut().extend(parts));
/// prefab.push("meta");
/// let outcome = Outcome::<()>::err("Target is not Humanoid-model");
///
/// assert_eq!(prefab.settle(outcome), Outcome::err("Target is not Humanoid-model"));
/// assert_eq!(*disposed.borrow(), vec!["root", "meta"]);
/// ```
pub struct Scoped<T, D>
where
    D: FnOnce(T),
{
    resource: Option<T>,
    dispose: Option<D>,
}

impl<T, D> Scoped<T, D>
where
    D: FnOnce(T),
{
    /// Take ownership of `resource`, to be passed to `dispose` on drop.
    pub fn new(resource: T, dispose: D) -> Self {
        Self {
            resource: Some(resource),
            dispose: Some(dispose),
        }
    }

    /// Keep the resource and disarm the disposer.
    #[must_use]
    pub fn commit(mut self) -> T {
        self.dispose = None;
        match self.resource.take() {
            Some(resource) => resource,
            None => unreachable!("resource is only taken on commit or drop"),
        }
    }

    /// Commit on success, dispose on failure.
    ///
    /// The failure message is passed through unchanged.
    pub fn settle<V>(self, outcome: Outcome<V>) -> Outcome<T> {
        match outcome {
            Outcome::Ok(_) => Outcome::Ok(self.commit()),
            Outcome::Err(message) => {
                log::debug!("disposing partially built resource: {message}");
                drop(self);
                Outcome::Err(message)
            }
        }
    }

    fn resource(&self) -> &T {
        match &self.resource {
            Some(resource) => resource,
            None => unreachable!("resource is only taken on commit or drop"),
        }
    }

    fn resource_mut(&mut self) -> &mut T {
        match &mut self.resource {
            Some(resource) => resource,
            None => unreachable!("resource is only taken on commit or drop"),
        }
    }
}

impl<T, D> Deref for Scoped<T, D>
where
    D: FnOnce(T),
{
    type Target = T;

    fn deref(&self) -> &T {
        self.resource()
    }
}

impl<T, D> DerefMut for Scoped<T, D>
where
    D: FnOnce(T),
{
    fn deref_mut(&mut self) -> &mut T {
        self.resource_mut()
    }
}

impl<T, D> Drop for Scoped<T, D>
where
    D: FnOnce(T),
{
    fn drop(&mut self) {
        if let (Some(resource), Some(dispose)) = (self.resource.take(), self.dispose.take()) {
            dispose(resource);
        }
    }
}

impl<T: fmt::Debug, D> fmt::Debug for Scoped<T, D>
where
    D: FnOnce(T),
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scoped")
            .field("resource", &self.resource)
            .field("armed", &self.dispose.is_some())
            .finish()
    }
}
