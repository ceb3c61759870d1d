//! Test utilities and fixtures for covconfig unit tests.
//!
//! Provides a stand-in for the host's configuration object and ready-made
//! solution/project inputs mirroring a small two-project solution.
//!
//! # Example
//!
//! ```rust,ignore
//! use covconfig::test_support::{app_contexts, app_project, vc_configuration};
//!
//! #[test]
//! fn test_example() {
//!     let project = app_project(Some(vc_configuration("Debug|Win32")));
//!     let resolved = ConfigurationResolver::new().resolve(&app_contexts(true), &project);
//!     assert!(resolved.is_ok());
//! }
//! ```

pub mod fixtures;

use std::sync::Arc;

use crate::core::{
    ActiveConfigurationProvider, ExtendedProject, ProjectConfiguration, SolutionContext,
};

// Re-export fixtures for convenience
pub use fixtures::*;

/// Opaque host configuration object.
///
/// Handed out behind an `Arc` so tests can check that the resolver passes
/// the exact instance through.
#[derive(Debug, PartialEq, Eq)]
pub struct VcConfiguration {
    pub name: String,
}

/// Create a shared host configuration object.
pub fn vc_configuration(name: impl Into<String>) -> Arc<VcConfiguration> {
    Arc::new(VcConfiguration { name: name.into() })
}

/// Solution contexts with a single `App` row under `Debug|Win32`.
pub fn app_contexts(should_build: bool) -> Vec<SolutionContext> {
    vec![SolutionContext::new("App", "Debug", "Win32").with_build(should_build)]
}

/// The `App` project declaring `Debug|Win32`, with the given active
/// configuration.
pub fn app_project(
    active: Option<Arc<VcConfiguration>>,
) -> ExtendedProject<impl ActiveConfigurationProvider<Configuration = Arc<VcConfiguration>>> {
    ExtendedProject::new("App", move || active.clone())
        .with_configurations([ProjectConfiguration::new("Debug", "Win32")])
}
