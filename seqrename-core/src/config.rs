use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR_NAME: &str = ".seqrename";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct DefaultsConfig {
    /// Directory to rename when none is given on the command line or in the environment
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// Prefix to use when none is given
    #[serde(default)]
    pub prefix: Option<String>,

    /// Whether to use color output by default (None = auto-detect)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl Config {
    /// Load config from `.seqrename/config.toml` in the current directory,
    /// falling back to `seqrename/config.toml` under `user_config_dir`.
    pub fn load(user_config_dir: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_layered(&cwd, user_config_dir)
    }

    /// Load the first config that exists, local before user-wide
    pub fn load_layered(working_dir: &Path, user_config_dir: Option<&Path>) -> Result<Self> {
        let local = working_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        if local.exists() {
            return Self::load_from_path(&local);
        }

        if let Some(dir) = user_config_dir {
            let global = dir.join("seqrename").join(CONFIG_FILE_NAME);
            if global.exists() {
                return Self::load_from_path(&global);
            }
        }

        // Return default config if no config file exists
        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
