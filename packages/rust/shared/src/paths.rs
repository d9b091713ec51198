//! Per-prefix config and credential file locations and readers/writers.
//!
//! Each client owns a file pair under the configs directory:
//! `{PREFIX}-client-config.json` and `{PREFIX}.env`. The default directory
//! is `~/.wos/configs`; every CLI command accepts an override.

use std::path::{Path, PathBuf};

use crate::error::{Result, WosError};
use crate::types::{ClientConfig, REQUIRED_ENV_KEYS};

/// Configs directory name under the user's home.
const CONFIGS_DIR: &str = ".wos/configs";

/// Get the default configs directory (`~/.wos/configs`).
pub fn default_configs_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| WosError::config("could not determine home directory"))?;
    Ok(home.join(CONFIGS_DIR))
}

/// Path to the client config JSON for `prefix` under `dir`.
pub fn config_path(dir: &Path, prefix: &str) -> PathBuf {
    dir.join(format!("{prefix}-client-config.json"))
}

/// Path to the credential env file for `prefix` under `dir`.
pub fn env_path(dir: &Path, prefix: &str) -> PathBuf {
    dir.join(format!("{prefix}.env"))
}

/// Load and parse a client config JSON file.
pub fn load_client_config(path: &Path) -> Result<ClientConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| WosError::io(path, e))?;

    serde_json::from_str(&content)
        .map_err(|e| WosError::parse(format!("failed to parse {}: {e}", path.display())))
}

/// Write a client config as pretty JSON with a trailing newline.
///
/// Creates the parent directory if needed. Key order follows the
/// [`ClientConfig`] field order.
pub fn write_client_config(config: &ClientConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| WosError::io(parent, e))?;
    }

    let mut content = serde_json::to_string_pretty(config)
        .map_err(|e| WosError::config(e.to_string()))?;
    content.push('\n');

    std::fs::write(path, content).map_err(|e| WosError::io(path, e))?;
    tracing::info!(?path, "wrote client config");

    Ok(())
}

/// Write a blank credential template with one `KEY=` line per required key.
///
/// Callers are expected to skip this when the file already exists, so a
/// filled-in env file is never clobbered.
pub fn write_env_template(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| WosError::io(parent, e))?;
    }

    let mut content = String::from(
        "# WOS Client Credentials\n# Fill in the values below — do not commit this file\n",
    );
    for key in REQUIRED_ENV_KEYS {
        content.push_str(key);
        content.push_str("=\n");
    }

    std::fs::write(path, content).map_err(|e| WosError::io(path, e))?;
    tracing::info!(?path, "wrote env template");

    Ok(())
}
