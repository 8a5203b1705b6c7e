//! Optional YAML defaults file
//!
//! Any value the CLI can default may instead come from a config file;
//! explicit flags always win. Environment variables in configured paths are
//! expanded.

use std::path::{Path, PathBuf};

use bindeb_core::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Values a defaults file may supply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Output directory for produced archives
    pub deb_dir: Option<PathBuf>,

    /// Relative install path inside the target system
    pub install_dir: Option<String>,

    /// Package version
    pub version: Option<String>,

    /// Package revision
    pub revision: Option<String>,

    /// Target architecture label
    pub arch: Option<String>,

    /// Maintainer string
    pub maintainer: Option<String>,

    /// Package description
    pub description: Option<String>,
}

impl FileConfig {
    /// Load a defaults file from YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config file {path:?}: {e}"))
        })?;

        let mut config: FileConfig = serde_yaml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse YAML: {e}")))?;

        if let Some(ref mut deb_dir) = config.deb_dir {
            *deb_dir = expand_path(deb_dir)?;
        }

        Ok(config)
    }
}

/// Expand environment variables in a path
fn expand_path(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();
    let env_var_re =
        Regex::new(r"\$\{([^}]+)\}|\$([A-Za-z_][A-Za-z0-9_]*)").expect("Invalid regex");

    let mut result = path_str.to_string();
    for cap in env_var_re.captures_iter(&path_str) {
        let var_name = cap.get(1).or_else(|| cap.get(2)).unwrap().as_str();
        let var_value = std::env::var(var_name).map_err(|_| Error::Config {
            message: format!("Environment variable not found: {var_name}"),
        })?;

        result = result.replace(&cap[0], &var_value);
    }

    Ok(PathBuf::from(result))
}
