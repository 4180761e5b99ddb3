use crate::error::{MkprError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The config directory name under ~/.config/
const CONFIG_DIR_NAME: &str = "mkpr";
const CONFIG_FILENAME: &str = "config.toml";

/// User configuration for prompt defaults.
///
/// All keys are optional; missing keys (or a missing file) fall back to
/// the defaults below.
///
/// ```toml
/// # Base branch offered as the default at the base-branch prompt
/// default_base = "main"
///
/// # Default answer for the draft prompt
/// draft = false
///
/// # Remote the branch is pushed to
/// remote = "origin"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base branch offered as the default at the base-branch prompt.
    #[serde(default = "default_base")]
    pub default_base: String,

    /// Default answer for the draft yes/no prompt.
    #[serde(default)]
    pub draft: bool,

    /// Remote the branch is pushed to.
    #[serde(default = "default_remote")]
    pub remote: String,
}

fn default_base() -> String {
    "main".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_base: default_base(),
            draft: false,
            remote: default_remote(),
        }
    }
}

/// Path of the config file (~/.config/mkpr/config.toml)
pub fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| MkprError::Config("Could not determine home directory".to_string()))?;
    Ok(home
        .join(".config")
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILENAME))
}

/// Load the configuration, falling back to defaults when the file is
/// absent. A file that exists but fails to parse is an error.
pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path)?;
    toml::from_str(&contents)
        .map_err(|e| MkprError::Config(format!("Invalid config file {}: {}", path.display(), e)))
}
