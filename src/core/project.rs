//! Projects as known to the host build environment.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::resolver::namer::KEY_SEPARATOR;

/// A configuration/platform pair declared by the project itself
/// (for MSBuild, one `ProjectConfiguration` item).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectConfiguration {
    #[serde(rename = "configuration")]
    pub configuration_name: String,

    #[serde(rename = "platform")]
    pub platform_name: String,
}

impl ProjectConfiguration {
    pub fn new(configuration_name: impl Into<String>, platform_name: impl Into<String>) -> Self {
        ProjectConfiguration {
            configuration_name: configuration_name.into(),
            platform_name: platform_name.into(),
        }
    }
}

impl fmt::Display for ProjectConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.configuration_name, KEY_SEPARATOR, self.platform_name
        )
    }
}

/// Capability to fetch the project's currently active configuration object.
///
/// The returned value is opaque to this crate. `None` means the host has no
/// active configuration for the project; it is not an error of the provider.
pub trait ActiveConfigurationProvider {
    /// Host-side configuration object.
    type Configuration;

    /// Fetch the active configuration, if any.
    fn active_configuration(&self) -> Option<Self::Configuration>;
}

impl<F, C> ActiveConfigurationProvider for F
where
    F: Fn() -> Option<C>,
{
    type Configuration = C;

    fn active_configuration(&self) -> Option<C> {
        self()
    }
}

/// A project as seen by the resolver: its unique name, the configurations
/// it declares, and access to its active configuration.
#[derive(Debug, Clone)]
pub struct ExtendedProject<P> {
    unique_name: String,
    configurations: Vec<ProjectConfiguration>,
    provider: P,
}

impl<P: ActiveConfigurationProvider> ExtendedProject<P> {
    /// Create a project with no declared configurations.
    pub fn new(unique_name: impl Into<String>, provider: P) -> Self {
        ExtendedProject {
            unique_name: unique_name.into(),
            configurations: Vec::new(),
            provider,
        }
    }

    /// Replace the declared configurations.
    pub fn with_configurations(
        mut self,
        configurations: impl IntoIterator<Item = ProjectConfiguration>,
    ) -> Self {
        self.configurations = configurations.into_iter().collect();
        self
    }

    /// Host-wide unique name, e.g. `App\App.vcxproj`.
    pub fn unique_name(&self) -> &str {
        &self.unique_name
    }

    /// Declared configurations in project order.
    pub fn configurations(&self) -> &[ProjectConfiguration] {
        &self.configurations
    }

    /// Ask the host for the active configuration.
    pub fn active_configuration(&self) -> Option<P::Configuration> {
        self.provider.active_configuration()
    }
}
