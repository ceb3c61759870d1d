//! Host snapshot - serialized hand-off of solution state.
//!
//! The IDE automation layer writes what it knows about the solution (the
//! active solution configuration, the Configuration Manager rows and each
//! project's declared and active configurations) so resolution can be run
//! outside the host.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{
    ActiveConfigurationProvider, ExtendedProject, ProjectConfiguration, SolutionConfigurationPair,
    SolutionContext,
};
use crate::resolver::solution_configuration_name;

/// Serialized solution state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostSnapshot {
    /// Active solution configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<SolutionConfigurationPair>,

    /// Configuration Manager rows, in host order
    #[serde(default)]
    pub contexts: Vec<SolutionContext>,

    /// Projects in the solution
    #[serde(default)]
    pub projects: Vec<SnapshotProject>,
}

/// A project entry of a [`HostSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotProject {
    pub unique_name: String,

    #[serde(default)]
    pub configurations: Vec<ProjectConfiguration>,

    /// Active configuration reported by the host, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<ProjectConfiguration>,
}

/// Active-configuration capability backed by a snapshot entry.
///
/// Hands out a reference to the stored entry rather than a copy.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotActive<'a>(&'a SnapshotProject);

impl<'a> ActiveConfigurationProvider for SnapshotActive<'a> {
    type Configuration = &'a ProjectConfiguration;

    fn active_configuration(&self) -> Option<&'a ProjectConfiguration> {
        self.0.active.as_ref()
    }
}

impl SnapshotProject {
    /// View this entry as a resolver input.
    pub fn to_extended(&self) -> ExtendedProject<SnapshotActive<'_>> {
        ExtendedProject::new(self.unique_name.clone(), SnapshotActive(self))
            .with_configurations(self.configurations.iter().cloned())
    }
}

impl HostSnapshot {
    /// Load a snapshot, picking the format from the file extension
    /// (`.json` is JSON, anything else TOML).
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot: {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let snapshot = if is_json {
            Self::from_json(&contents)
        } else {
            Self::from_toml(&contents)
        };

        snapshot.with_context(|| format!("failed to parse snapshot: {}", path.display()))
    }

    /// Parse a TOML snapshot.
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Parse a JSON snapshot.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Find a project by exact unique name.
    pub fn project(&self, unique_name: &str) -> Option<&SnapshotProject> {
        self.projects.iter().find(|p| p.unique_name == unique_name)
    }

    /// Unique names of all projects, in snapshot order.
    pub fn project_names(&self) -> impl Iterator<Item = &str> {
        self.projects.iter().map(|p| p.unique_name.as_str())
    }

    /// Composite key of the active solution configuration.
    pub fn solution_configuration_name(&self) -> Option<String> {
        self.solution.as_ref().map(solution_configuration_name)
    }
}
