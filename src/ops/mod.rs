//! High-level operations on host snapshots.

pub mod check;
pub mod resolve;

pub use check::{check_snapshot, ProjectStatus};
pub use resolve::{find_project, resolve_project, Resolution, ResolveProjectError};
