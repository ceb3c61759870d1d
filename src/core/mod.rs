//! Core data structures.
//!
//! - Solution-level contexts and configuration pairs
//! - Projects and the active-configuration capability
//! - The resolved configuration handle
//! - Host snapshots

pub mod configuration;
pub mod project;
pub mod snapshot;
pub mod solution;

pub use configuration::ResolvedConfiguration;
pub use project::{ActiveConfigurationProvider, ExtendedProject, ProjectConfiguration};
pub use snapshot::{HostSnapshot, SnapshotProject};
pub use solution::{SolutionConfigurationPair, SolutionContext};
