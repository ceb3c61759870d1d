//! Solution-level build selection.
//!
//! A [`SolutionContext`] is one row of the solution's Configuration Manager:
//! which configuration/platform a project builds under the currently active
//! solution configuration, and whether it builds at all.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::resolver::solution_configuration_name;

/// One project's build participation under the active solution configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionContext {
    /// Unique name of the project this row refers to.
    #[serde(rename = "project")]
    pub project_name: String,

    /// Project configuration selected for the active solution configuration.
    #[serde(rename = "configuration")]
    pub configuration_name: String,

    /// Project platform selected for the active solution configuration.
    #[serde(rename = "platform")]
    pub platform_name: String,

    /// The "Build" checkbox.
    #[serde(rename = "build", default = "default_true")]
    pub should_build: bool,
}

fn default_true() -> bool {
    true
}

impl SolutionContext {
    /// Create a context that is included in the build.
    pub fn new(
        project_name: impl Into<String>,
        configuration_name: impl Into<String>,
        platform_name: impl Into<String>,
    ) -> Self {
        SolutionContext {
            project_name: project_name.into(),
            configuration_name: configuration_name.into(),
            platform_name: platform_name.into(),
            should_build: true,
        }
    }

    /// Set the build flag.
    pub fn with_build(mut self, should_build: bool) -> Self {
        self.should_build = should_build;
        self
    }
}

/// A solution configuration as selected in the IDE toolbar, e.g. `Debug`/`x64`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SolutionConfigurationPair {
    /// Solution configuration name.
    #[serde(rename = "configuration")]
    pub name: String,

    /// Solution platform name.
    #[serde(rename = "platform")]
    pub platform_name: String,
}

impl SolutionConfigurationPair {
    pub fn new(name: impl Into<String>, platform_name: impl Into<String>) -> Self {
        SolutionConfigurationPair {
            name: name.into(),
            platform_name: platform_name.into(),
        }
    }
}

impl fmt::Display for SolutionConfigurationPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&solution_configuration_name(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_defaults_to_build() {
        let ctx = SolutionContext::new("App", "Debug", "Win32");
        assert!(ctx.should_build);
        assert!(!ctx.with_build(false).should_build);
    }

    #[test]
    fn test_context_deserialize_without_build_flag() {
        let ctx: SolutionContext = toml::from_str(
            r#"
project = "App"
configuration = "Release"
platform = "x64"
"#,
        )
        .unwrap();

        assert_eq!(ctx.project_name, "App");
        assert_eq!(ctx.configuration_name, "Release");
        assert_eq!(ctx.platform_name, "x64");
        assert!(ctx.should_build);
    }

    #[test]
    fn test_pair_display() {
        let pair = SolutionConfigurationPair::new("Release", "ARM64");
        assert_eq!(pair.to_string(), "Release|ARM64");
        assert_eq!(pair.to_string(), solution_configuration_name(&pair));
    }
}
