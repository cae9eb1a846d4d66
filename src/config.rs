use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;

use crate::catalog::DEFAULT_DATA_PATH;
use crate::theme::ThemeConfig;

pub const APP_DIR: &str = "formations-tui";
pub const LOG_FILE_NAME: &str = "formations-tui.log";

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub data: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub theme: ThemeConfig,
}

impl Config {
    /// Reads `explicit` if given, otherwise the per-user config file when it
    /// exists. A missing default file is not an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };
        let content = std::fs::read_to_string(&path)
            .wrap_err_with(|| format!("reading config {}", path.display()))?;
        Self::parse(&content).wrap_err_with(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Command line value, then config value, then `formations.json`.
    pub fn data_path(&self, cli: Option<PathBuf>) -> PathBuf {
        cli.or_else(|| self.data.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
    }

    /// Command line value, then config value, then the temp directory.
    pub fn log_path(&self, cli: Option<PathBuf>) -> PathBuf {
        cli.or_else(|| self.log_file.clone())
            .unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE_NAME))
    }
}

pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}
