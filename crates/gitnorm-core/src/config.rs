use crate::error::ConfigError;
use crate::table::TableStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILE: &str = "config.toml";

/// Global configuration read from `~/.config/gitnorm/config.toml`.
///
/// The file is optional and never written; without it every field is default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitnormConfig {
    /// Border characters for `print-vars-table`; env overrides win over these.
    pub table: TableStyle,
}

/// Parse a config file at an explicit path.
pub fn load_from(path: &Path) -> Result<GitnormConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse `path` if it exists, otherwise return defaults. Creates nothing.
pub fn load_or_default(path: &Path) -> Result<GitnormConfig, ConfigError> {
    if !path.exists() {
        return Ok(GitnormConfig::default());
    }
    load_from(path)
}

/// Load configuration from the first `gitnorm/config.toml` in the XDG search
/// path, or defaults when there is none.
pub fn load() -> Result<GitnormConfig, ConfigError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gitnorm")?;
    match xdg_dirs.find_config_file(CONFIG_FILE) {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            load_or_default(&path)
        }
        None => Ok(GitnormConfig::default()),
    }
}
