//! Configuration Loader
//!
//! Handles loading and merging configuration from multiple sources with proper precedence.

use crate::project::{ProjectConfig, Utf8Policy};
use crate::ConfigResult;
use std::env;
use std::path::{Path, PathBuf};

/// Name of the project configuration file
pub const CONFIG_FILE_NAME: &str = "hostcall.toml";

/// Configuration loader
///
/// Loads configuration from multiple sources and merges them with proper precedence:
/// 1. Project config (./hostcall.toml) - lowest priority
/// 2. Environment variables (HOSTCALL_*) - overrides project
#[derive(Debug, Default)]
pub struct ConfigLoader {
    skip_env: bool,
    boundary: Option<PathBuf>,
}

/// Merged configuration result
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Project configuration
    pub project: ProjectConfig,

    /// Directory where hostcall.toml was found
    pub project_root: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignore HOSTCALL_* environment variables
    pub fn without_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Stop the upward search at `dir` (inclusive)
    pub fn stop_at(mut self, dir: impl Into<PathBuf>) -> Self {
        self.boundary = Some(dir.into());
        self
    }

    /// Load configuration starting from the given directory
    ///
    /// Walks up the directory tree to find hostcall.toml, no further than the
    /// `stop_at` boundary when one is set. A missing file is not an error;
    /// defaults apply.
    pub fn load_from_directory(&self, start_dir: &Path) -> ConfigResult<Config> {
        let (project_root, project_config) = self.find_project_config(start_dir)?;
        let project_config = self.apply_env_overrides(project_config)?;

        Ok(Config {
            project: project_config,
            project_root,
        })
    }

    /// Load configuration from a specific config file
    pub fn load_from_file(&self, config_path: &Path) -> ConfigResult<Config> {
        let project_config = ProjectConfig::load_from_file(config_path)?;
        let project_config = self.apply_env_overrides(project_config)?;

        Ok(Config {
            project: project_config,
            project_root: config_path.parent().map(|p| p.to_path_buf()),
        })
    }

    fn find_project_config(
        &self,
        start_dir: &Path,
    ) -> ConfigResult<(Option<PathBuf>, ProjectConfig)> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);

            if config_path.exists() {
                let project_config = ProjectConfig::load_from_file(&config_path)?;
                return Ok((Some(current), project_config));
            }

            if self.boundary.as_deref() == Some(current.as_path()) {
                return Ok((None, ProjectConfig::default()));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Ok((None, ProjectConfig::default())),
            }
        }
    }

    /// Apply environment variable overrides
    ///
    /// Recognized variables:
    /// - HOSTCALL_UTF8=lossy|strict
    fn apply_env_overrides(&self, mut config: ProjectConfig) -> ConfigResult<ProjectConfig> {
        if self.skip_env {
            return Ok(config);
        }

        if let Ok(utf8) = env::var("HOSTCALL_UTF8") {
            config.set_utf8_policy(utf8.parse()?);
        }

        Ok(config)
    }
}

impl Config {
    /// Effective UTF-8 policy (project/env > default)
    pub fn utf8_policy(&self) -> Utf8Policy {
        self.project.utf8_policy().unwrap_or_default()
    }

    /// Get the project root directory
    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }

    /// Check if a hostcall.toml was found
    pub fn is_project(&self) -> bool {
        self.project_root.is_some()
    }
}
