//! covconfig - effective build configuration resolution for coverage runs
//!
//! This crate decides which configuration of a solution project should be
//! instrumented, given the solution's Configuration Manager selection and
//! the project's own configurations, and explains precisely why when that
//! cannot be decided.

pub mod core;
pub mod ops;
pub mod resolver;
pub mod util;

/// Test fixtures for covconfig unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    ActiveConfigurationProvider, ExtendedProject, HostSnapshot, ProjectConfiguration,
    ResolvedConfiguration, SolutionConfigurationPair, SolutionContext,
};

pub use resolver::{solution_configuration_name, ConfigurationResolver, ResolutionError};
pub use util::context::GlobalContext;
