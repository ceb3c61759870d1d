//! User-friendly diagnostic messages.
//!
//! Every resolution failure is rendered with its root cause, the candidates
//! that were considered, and the setting the user has to change.

use std::fmt;
use std::path::PathBuf;

/// Common suggestion messages for consistent error handling.
pub mod suggestions {
    /// Suggestion when a project has no row in the solution contexts.
    pub const ADD_TO_SOLUTION_CONFIGURATION: &str =
        "Add the project to the active solution configuration in Build > Configuration Manager";

    /// Suggestion when a project is not flagged to build.
    pub const ENABLE_BUILD: &str =
        "Tick the Build checkbox for the project in Build > Configuration Manager";

    /// Suggestion when a project has no active configuration.
    pub const MAP_PROJECT_CONFIGURATION: &str =
        "Map the solution configuration to one of the project configurations listed above";

    /// Suggestion when the snapshot file is missing.
    pub const NO_SNAPSHOT: &str =
        "help: Pass `--snapshot <PATH>` or set `[snapshot] path` in .covconfig/config.toml";

    /// Suggestion when a project is not in the snapshot.
    pub const PROJECT_NOT_FOUND: &str = "Run `covconfig check` to list the known projects";
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with optional suggestions.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Primary message
    pub message: String,
    /// Severity level
    pub severity: Severity,
    /// Additional context lines
    pub context: Vec<String>,
    /// Suggested fixes
    pub suggestions: Vec<String>,
    /// Related location (snapshot path)
    pub location: Option<PathBuf>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            severity: Severity::Error,
            context: Vec::new(),
            suggestions: Vec::new(),
            location: None,
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            ..Diagnostic::error(message)
        }
    }

    /// Add context to the diagnostic.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Add a suggestion for fixing the issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Add a file location.
    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self, color: bool) -> String {
        let mut output = String::new();

        let severity_str = match (color, self.severity) {
            (true, Severity::Error) => "\x1b[1;31merror\x1b[0m".to_string(),
            (true, Severity::Warning) => "\x1b[1;33mwarning\x1b[0m".to_string(),
            (false, severity) => severity.to_string(),
        };

        output.push_str(&format!("{}: {}\n", severity_str, self.message));

        if let Some(ref path) = self.location {
            output.push_str(&format!("  --> {}\n", path.display()));
        }

        for ctx in &self.context {
            output.push_str(&format!("  - {}\n", ctx));
        }

        if !self.suggestions.is_empty() {
            output.push('\n');
            let help_prefix = if color {
                "\x1b[1;32mhelp\x1b[0m"
            } else {
                "help"
            };
            output.push_str(&format!("{}: consider:\n", help_prefix));
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
            }
        }

        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(false))
    }
}

/// Print a diagnostic to stderr.
pub fn emit(diagnostic: &Diagnostic, color: bool) {
    eprint!("{}", diagnostic.format(color));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_formatting() {
        let diag = Diagnostic::error("Cannot find a configuration for the project App")
            .with_context("Solution: configuration: Debug platform: x64")
            .with_context("Project: configuration: Debug platform: Win32")
            .with_suggestion(suggestions::MAP_PROJECT_CONFIGURATION)
            .with_location("solution.toml");

        let output = diag.format(false);
        assert!(output.starts_with("error: Cannot find a configuration"));
        assert!(output.contains("  --> solution.toml"));
        assert!(output.contains("  - Project: configuration: Debug platform: Win32"));
        assert!(output.contains("help: consider:"));
        assert!(output.contains("1. Map the solution configuration"));
    }

    #[test]
    fn test_warning_without_suggestions() {
        let output = Diagnostic::warning("Tests is unresolved").format(false);
        assert_eq!(output, "warning: Tests is unresolved\n");
    }

    #[test]
    fn test_color_output() {
        let output = Diagnostic::error("boom").format(true);
        assert!(output.starts_with("\x1b[1;31merror\x1b[0m: boom"));
    }
}
