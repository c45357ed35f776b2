//! Reading the config file from disk.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name for checkout-merge within the user config directory.
const APP_DIR: &str = "checkout-merge";

/// Filename for the config file.
const CONFIG_FILE: &str = "config.toml";

/// On-disk config file layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// `[git]` table
    #[serde(default)]
    pub git: GitSection,
}

/// `[git]` table of the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GitSection {
    /// Path or name of the git executable
    pub program: Option<PathBuf>,
}

/// Default config file location, e.g. `~/.config/checkout-merge/config.toml`.
///
/// `None` when the platform has no config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Load the config file at `path`.
///
/// Returns an empty `ConfigFile` if the file doesn't exist.
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))
}
