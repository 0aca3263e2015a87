//! Configuration handling for the TUI

use crate::state::ValidationTriggers;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Re-validate on every keystroke (default true)
    pub validate_on_change: Option<bool>,
    /// Re-validate when focus leaves a field (default true)
    pub validate_on_blur: Option<bool>,
    /// Show password fields in plain text from the start
    pub reveal_passwords: Option<bool>,
    /// Clear the form after a successful submission
    pub reset_after_submit: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "vendor-signup", "vendor-signup")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: TuiConfig = serde_json::from_str(&content)
            .with_context(|| format!("invalid config in {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn triggers(&self) -> ValidationTriggers {
        ValidationTriggers {
            on_change: self.validate_on_change.unwrap_or(true),
            on_blur: self.validate_on_blur.unwrap_or(true),
        }
    }

    pub fn reveal_passwords(&self) -> bool {
        self.reveal_passwords.unwrap_or(false)
    }

    pub fn reset_after_submit(&self) -> bool {
        self.reset_after_submit.unwrap_or(false)
    }
}
