//! Resolve one project of a host snapshot.

use serde::Serialize;
use thiserror::Error;

use crate::core::{HostSnapshot, ProjectConfiguration, ResolvedConfiguration};
use crate::resolver::namer::KEY_SEPARATOR;
use crate::resolver::{ConfigurationResolver, ResolutionError};
use crate::util::diagnostic::{suggestions, Diagnostic};

/// Errors from resolving a project by name.
#[derive(Debug, Error)]
pub enum ResolveProjectError {
    /// The snapshot has no project with this unique name.
    #[error("{}", unknown_project_message(.name, .available))]
    UnknownProject { name: String, available: Vec<String> },

    /// The project exists but its configuration could not be resolved.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}

fn unknown_project_message(name: &str, available: &[String]) -> String {
    let mut message = format!("project `{}` not found in snapshot\n", name);
    if !available.is_empty() {
        message.push_str(&format!("available: {}\n", available.join(", ")));
    }
    message.push_str(&format!("help: {}", suggestions::PROJECT_NOT_FOUND));
    message
}

impl ResolveProjectError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ResolveProjectError::UnknownProject { name, available } => {
                let mut diag =
                    Diagnostic::error(format!("project `{}` not found in snapshot", name));
                if !available.is_empty() {
                    diag = diag.with_context(format!("available: {}", available.join(", ")));
                }
                diag.with_suggestion(suggestions::PROJECT_NOT_FOUND)
            }
            ResolveProjectError::Resolution(err) => err.to_diagnostic(),
        }
    }
}

/// A successfully resolved project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub project: String,
    pub configuration: String,
    pub platform: String,
    /// Active solution configuration key, when the snapshot records one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
}

impl Resolution {
    fn new(
        snapshot: &HostSnapshot,
        project: &str,
        resolved: ResolvedConfiguration<&ProjectConfiguration>,
    ) -> Self {
        Resolution {
            project: project.to_string(),
            configuration: resolved.configuration_name.clone(),
            platform: resolved.platform_name.clone(),
            solution: snapshot.solution_configuration_name(),
        }
    }

    /// `Configuration|Platform` of the resolved project configuration.
    pub fn key(&self) -> String {
        format!("{}{}{}", self.configuration, KEY_SEPARATOR, self.platform)
    }
}

/// Resolve `name`, reporting why resolution failed.
pub fn resolve_project(
    snapshot: &HostSnapshot,
    name: &str,
) -> Result<Resolution, ResolveProjectError> {
    let project = snapshot
        .project(name)
        .ok_or_else(|| ResolveProjectError::UnknownProject {
            name: name.to_string(),
            available: snapshot.project_names().map(String::from).collect(),
        })?;

    let extended = project.to_extended();
    let resolved = ConfigurationResolver::new().resolve(&snapshot.contexts, &extended)?;

    tracing::debug!("resolved `{}` to {}", name, resolved.get());
    Ok(Resolution::new(snapshot, name, resolved))
}

/// Resolve `name`, or `None` when it is unknown or cannot be resolved.
pub fn find_project(snapshot: &HostSnapshot, name: &str) -> Option<Resolution> {
    let project = snapshot.project(name)?;
    let extended = project.to_extended();

    ConfigurationResolver::new()
        .try_resolve(&snapshot.contexts, &extended)
        .map(|resolved| Resolution::new(snapshot, name, resolved))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::SOLUTION_SNAPSHOT_TOML;

    fn snapshot() -> HostSnapshot {
        HostSnapshot::from_toml(SOLUTION_SNAPSHOT_TOML).unwrap()
    }

    #[test]
    fn test_resolve_project() {
        let resolution = resolve_project(&snapshot(), "App").unwrap();

        assert_eq!(resolution.project, "App");
        assert_eq!(resolution.key(), "Debug|Win32");
        assert_eq!(resolution.solution.as_deref(), Some("Debug|Win32"));
    }

    #[test]
    fn test_resolve_excluded_project() {
        let err = resolve_project(&snapshot(), "Lib").unwrap_err();
        assert!(matches!(
            err,
            ResolveProjectError::Resolution(ResolutionError::ProjectExcludedFromBuild { .. })
        ));
    }

    #[test]
    fn test_resolve_without_active_configuration() {
        let err = resolve_project(&snapshot(), "Tests").unwrap_err();

        let message = err.to_string();
        assert_eq!(message.lines().count(), 4);
        assert!(message.contains("configuration: Release platform: x64"));
    }

    #[test]
    fn test_resolve_without_context() {
        let err = resolve_project(&snapshot(), "Tool").unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Cannot find Tool in project contexts."));
    }

    #[test]
    fn test_unknown_project() {
        let err = resolve_project(&snapshot(), "Missing").unwrap_err();

        let message = err.to_string();
        assert!(message.contains("project `Missing` not found"));
        assert!(message.contains("App, Lib, Tests, Tool"));

        let diag = err.to_diagnostic();
        assert_eq!(diag.context, ["available: App, Lib, Tests, Tool"]);
        assert_eq!(diag.suggestions, [suggestions::PROJECT_NOT_FOUND]);
        assert!(message.ends_with(&format!("help: {}", suggestions::PROJECT_NOT_FOUND)));
    }

    #[test]
    fn test_unknown_project_in_empty_snapshot() {
        let err = resolve_project(&HostSnapshot::default(), "App").unwrap_err();

        let message = err.to_string();
        assert!(!message.contains("available:"));
        assert_eq!(
            message.lines().collect::<Vec<_>>(),
            [
                "project `App` not found in snapshot",
                "help: Run `covconfig check` to list the known projects",
            ]
        );

        let diag = err.to_diagnostic();
        assert!(diag.context.is_empty());
        assert_eq!(diag.suggestions, [suggestions::PROJECT_NOT_FOUND]);
    }

    #[test]
    fn test_find_project() {
        let snapshot = snapshot();

        assert_eq!(
            find_project(&snapshot, "App").map(|r| r.key()),
            Some("Debug|Win32".to_string())
        );
        assert!(find_project(&snapshot, "Lib").is_none());
        assert!(find_project(&snapshot, "Tests").is_none());
        assert!(find_project(&snapshot, "Tool").is_none());
        assert!(find_project(&snapshot, "Missing").is_none());
    }

    #[test]
    fn test_resolution_json() {
        let resolution = resolve_project(&snapshot(), "App").unwrap();
        let json = serde_json::to_value(&resolution).unwrap();

        assert_eq!(json["configuration"], "Debug");
        assert_eq!(json["platform"], "Win32");
        assert_eq!(json["solution"], "Debug|Win32");
    }
}
