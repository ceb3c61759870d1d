//! Resolvability check over every project of a host snapshot.

use serde::Serialize;

use crate::core::HostSnapshot;
use crate::ops::resolve::find_project;

/// Whether one project resolves, and to what.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectStatus {
    pub project: String,
    /// `Configuration|Platform`, absent when unresolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<String>,
}

impl ProjectStatus {
    pub fn is_resolved(&self) -> bool {
        self.configuration.is_some()
    }
}

/// Soft-resolve every project, in snapshot order.
pub fn check_snapshot(snapshot: &HostSnapshot) -> Vec<ProjectStatus> {
    snapshot
        .project_names()
        .map(|name| {
            let configuration = find_project(snapshot, name).map(|r| r.key());
            if configuration.is_none() {
                tracing::debug!("`{}` is not resolvable", name);
            }
            ProjectStatus {
                project: name.to_string(),
                configuration,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::SOLUTION_SNAPSHOT_TOML;

    #[test]
    fn test_check_snapshot() {
        let snapshot = HostSnapshot::from_toml(SOLUTION_SNAPSHOT_TOML).unwrap();
        let statuses = check_snapshot(&snapshot);

        let summary: Vec<_> = statuses
            .iter()
            .map(|s| (s.project.as_str(), s.is_resolved()))
            .collect();
        assert_eq!(
            summary,
            [("App", true), ("Lib", false), ("Tests", false), ("Tool", false)]
        );
        assert_eq!(statuses[0].configuration.as_deref(), Some("Debug|Win32"));
    }

    #[test]
    fn test_check_empty_snapshot() {
        assert!(check_snapshot(&HostSnapshot::default()).is_empty());
    }
}
