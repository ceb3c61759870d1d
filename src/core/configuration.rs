//! The resolver's success value.

use std::ops::Deref;

/// The host's active configuration object for a project, as returned by
/// [`ActiveConfigurationProvider`](super::ActiveConfigurationProvider).
///
/// The wrapped value is passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedConfiguration<C>(C);

impl<C> ResolvedConfiguration<C> {
    pub(crate) fn new(inner: C) -> Self {
        ResolvedConfiguration(inner)
    }

    /// Borrow the host configuration.
    pub fn get(&self) -> &C {
        &self.0
    }

    /// Unwrap the host configuration.
    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<C> Deref for ResolvedConfiguration<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.0
    }
}
