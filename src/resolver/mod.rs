//! Effective configuration resolution.
//!
//! Correlates the solution's build contexts with a project's active
//! configuration. The resolver is pure and deterministic - it only reads the
//! inputs handed to it and never discovers configurations on its own.

pub mod errors;
pub mod namer;

pub use errors::ResolutionError;
pub use namer::solution_configuration_name;

use crate::core::{
    ActiveConfigurationProvider, ExtendedProject, ResolvedConfiguration, SolutionConfigurationPair,
    SolutionContext,
};

/// Resolves a project's effective build configuration.
///
/// Resolution runs three stages and stops at the first failure:
/// 1. find the project's row in the solution contexts,
/// 2. check that the row is flagged to build,
/// 3. fetch the project's active configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigurationResolver;

impl ConfigurationResolver {
    pub fn new() -> Self {
        ConfigurationResolver
    }

    /// Resolve the configuration, reporting why it failed.
    pub fn resolve<'c, I, P>(
        &self,
        contexts: I,
        project: &ExtendedProject<P>,
    ) -> Result<ResolvedConfiguration<P::Configuration>, ResolutionError>
    where
        I: IntoIterator<Item = &'c SolutionContext>,
        P: ActiveConfigurationProvider,
    {
        let name = project.unique_name();

        let context = find_context(contexts, name).ok_or_else(|| {
            tracing::debug!("no solution context for `{}`", name);
            ResolutionError::ContextNotFound {
                project_unique_name: name.to_string(),
            }
        })?;

        if !context.should_build {
            tracing::debug!("`{}` is excluded from the solution build", name);
            return Err(ResolutionError::ProjectExcludedFromBuild {
                project_unique_name: name.to_string(),
            });
        }

        match project.active_configuration() {
            Some(config) => {
                tracing::debug!(
                    "resolved `{}` for {}|{}",
                    name,
                    context.configuration_name,
                    context.platform_name
                );
                Ok(ResolvedConfiguration::new(config))
            }
            None => {
                tracing::debug!(
                    "`{}` has no active configuration ({} declared)",
                    name,
                    project.configurations().len()
                );
                Err(ResolutionError::NoActiveConfiguration {
                    project_unique_name: name.to_string(),
                    context: context.clone(),
                    known_configurations: project.configurations().to_vec(),
                })
            }
        }
    }

    /// Resolve the configuration, or `None` if [`resolve`](Self::resolve)
    /// would fail.
    pub fn try_resolve<'c, I, P>(
        &self,
        contexts: I,
        project: &ExtendedProject<P>,
    ) -> Option<ResolvedConfiguration<P::Configuration>>
    where
        I: IntoIterator<Item = &'c SolutionContext>,
        P: ActiveConfigurationProvider,
    {
        self.resolve(contexts, project).ok()
    }

    /// Composite `NAME|PLATFORM` key of a solution configuration.
    pub fn name(&self, config: &SolutionConfigurationPair) -> String {
        solution_configuration_name(config)
    }
}

/// First context whose project name equals `unique_name` exactly.
fn find_context<'c, I>(contexts: I, unique_name: &str) -> Option<&'c SolutionContext>
where
    I: IntoIterator<Item = &'c SolutionContext>,
{
    contexts
        .into_iter()
        .find(|ctx| ctx.project_name == unique_name)
}
