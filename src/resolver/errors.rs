//! Resolution error types and diagnostics.

use std::fmt::Write as _;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::core::{ProjectConfiguration, SolutionContext};
use crate::util::diagnostic::{suggestions, Diagnostic};

/// Why a project's effective configuration could not be resolved.
///
/// Every variant is a user configuration problem: the solution's
/// Configuration Manager does not agree with the projects it contains.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
pub enum ResolutionError {
    #[error(
        "Cannot find {project_unique_name} in project contexts. \
         Please check your solution Configuration Manager."
    )]
    #[diagnostic(
        code(covconfig::resolve::context_not_found),
        help("Check your solution Configuration Manager")
    )]
    ContextNotFound { project_unique_name: String },

    #[error(
        "The project {project_unique_name} is marked as not build for the active solution \
         configuration. Please check your solution Configuration Manager."
    )]
    #[diagnostic(
        code(covconfig::resolve::excluded_from_build),
        help("Check your solution Configuration Manager")
    )]
    ProjectExcludedFromBuild { project_unique_name: String },

    #[error("{}", no_active_configuration_message(.project_unique_name, .context, .known_configurations))]
    #[diagnostic(
        code(covconfig::resolve::no_active_configuration),
        help("Check your solution Configuration Manager")
    )]
    NoActiveConfiguration {
        project_unique_name: String,
        context: SolutionContext,
        known_configurations: Vec<ProjectConfiguration>,
    },
}

fn no_active_configuration_message(
    project_unique_name: &str,
    context: &SolutionContext,
    known_configurations: &[ProjectConfiguration],
) -> String {
    let mut message = format!(
        "Cannot find a configuration for the project {}",
        project_unique_name
    );
    let _ = write!(
        message,
        "\n - Solution: configuration: {} platform: {}",
        context.configuration_name, context.platform_name
    );
    for config in known_configurations {
        let _ = write!(
            message,
            "\n - Project: configuration: {} platform: {}",
            config.configuration_name, config.platform_name
        );
    }
    message
}

impl ResolutionError {
    /// Unique name of the project that failed to resolve.
    pub fn project_unique_name(&self) -> &str {
        match self {
            ResolutionError::ContextNotFound {
                project_unique_name,
            }
            | ResolutionError::ProjectExcludedFromBuild {
                project_unique_name,
            }
            | ResolutionError::NoActiveConfiguration {
                project_unique_name,
                ..
            } => project_unique_name,
        }
    }

    /// Short machine-readable kind, used for `--format json`.
    pub fn kind(&self) -> &'static str {
        match self {
            ResolutionError::ContextNotFound { .. } => "context-not-found",
            ResolutionError::ProjectExcludedFromBuild { .. } => "excluded-from-build",
            ResolutionError::NoActiveConfiguration { .. } => "no-active-configuration",
        }
    }

    /// Convert to a user-friendly diagnostic.
    ///
    /// The first line of the message is the headline; any further lines
    /// (the candidate listing of `NoActiveConfiguration`) become context.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let message = self.to_string();
        let mut lines = message.lines();
        let mut diag = Diagnostic::error(lines.next().unwrap_or_default());

        for line in lines {
            diag = diag.with_context(line.trim_start_matches(" - "));
        }

        match self {
            ResolutionError::ContextNotFound { .. } => {
                diag.with_suggestion(suggestions::ADD_TO_SOLUTION_CONFIGURATION)
            }
            ResolutionError::ProjectExcludedFromBuild { .. } => {
                diag.with_suggestion(suggestions::ENABLE_BUILD)
            }
            ResolutionError::NoActiveConfiguration { .. } => {
                diag.with_suggestion(suggestions::MAP_PROJECT_CONFIGURATION)
            }
        }
    }
}
