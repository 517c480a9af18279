//! Configuration management for gitbr
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (GITBR_*)
//! 3. Config file (~/.config/gitbr/config.toml)
//! 4. Default values

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::git::MarkerPolicy;
use crate::{Error, Result};

/// Git-related configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GitConfig {
    /// Path to the git executable
    pub git_path: String,

    /// Maximum time to wait for git, e.g. "10s"
    #[serde(with = "humantime_serde")]
    pub timeout: Option<Duration>,

    /// How branch markers are handled
    pub marker: MarkerPolicy,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            git_path: "git".to_string(),
            timeout: None,
            marker: MarkerPolicy::default(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Git configuration
    pub git: GitConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/gitbr/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gitbr").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - GITBR_GIT_PATH: Path to git executable
    /// - GITBR_MARKER: Marker policy ("strip" or "keep")
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(git_path) = lookup("GITBR_GIT_PATH") {
            self.git.git_path = git_path;
        }

        if let Some(marker) = lookup("GITBR_MARKER") {
            self.git.marker = marker.parse()?;
        }

        Ok(self)
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(
        mut self,
        git_path: Option<String>,
        marker: Option<MarkerPolicy>,
    ) -> Self {
        if let Some(path) = git_path {
            self.git.git_path = path;
        }

        if let Some(m) = marker {
            self.git.marker = m;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(
        git_path: Option<String>,
        marker: Option<MarkerPolicy>,
    ) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()?
            .with_cli_overrides(git_path, marker))
    }
}
