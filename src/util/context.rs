//! Global context for covconfig operations.
//!
//! Provides centralized access to configuration, paths, and environment.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::util::config::{load_config, Config};
use crate::util::diagnostic::suggestions;

/// Snapshot file looked up from the working directory upward when no
/// explicit path is configured.
pub const DEFAULT_SNAPSHOT_NAME: &str = "solution.toml";

/// Name of the per-user and per-project configuration directories.
pub const CONFIG_DIR_NAME: &str = ".covconfig";

/// Global context containing configuration and paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Home directory for user-wide settings (~/.covconfig/)
    home: Option<PathBuf>,

    /// Whether to use verbose output
    verbose: bool,

    /// Whether to use colors in output
    color: bool,
}

impl GlobalContext {
    /// Create a new GlobalContext with defaults.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Ok(Self::with_cwd(cwd))
    }

    /// Create a GlobalContext with a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Self {
        let home = directories::BaseDirs::new().map(|b| b.home_dir().join(CONFIG_DIR_NAME));

        GlobalContext {
            cwd,
            home,
            verbose: false,
            color: true,
        }
    }

    /// Set verbose mode.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Set color output.
    pub fn set_color(&mut self, color: bool) {
        self.color = color;
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the user-wide settings directory, if a home directory is known.
    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// Get the global configuration file path.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.home.as_ref().map(|home| home.join("config.toml"))
    }

    /// Get the project-local settings directory.
    pub fn project_config_dir(&self) -> PathBuf {
        self.cwd.join(CONFIG_DIR_NAME)
    }

    /// Get the project-local configuration file path.
    pub fn project_config_path(&self) -> PathBuf {
        self.project_config_dir().join("config.toml")
    }

    /// Load the merged global and project configuration.
    pub fn load_config(&self) -> Config {
        load_config(self.config_path().as_deref(), &self.project_config_path())
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if color output is enabled.
    pub fn color(&self) -> bool {
        self.color
    }

    /// Locate the host snapshot.
    ///
    /// An explicit path wins, then `[snapshot] path` from the configuration
    /// (both relative to the working directory), then the nearest
    /// `solution.toml` from the working directory upward.
    pub fn find_snapshot(&self, explicit: Option<&Path>, config: &Config) -> Result<PathBuf> {
        if let Some(path) = explicit.or(config.snapshot.path.as_deref()) {
            let path = self.cwd.join(path);
            if !path.is_file() {
                bail!(
                    "snapshot not found: {}\n{}",
                    path.display(),
                    suggestions::NO_SNAPSHOT
                );
            }
            return Ok(path);
        }

        let mut current = self.cwd.clone();
        loop {
            let candidate = current.join(DEFAULT_SNAPSHOT_NAME);
            if candidate.is_file() {
                tracing::debug!("using snapshot {}", candidate.display());
                return Ok(candidate);
            }
            if !current.pop() {
                bail!(
                    "could not find `{}` in {} or any parent directory\n{}",
                    DEFAULT_SNAPSHOT_NAME,
                    self.cwd.display(),
                    suggestions::NO_SNAPSHOT
                );
            }
        }
    }
}
