mod config;

pub use config::{Config, SlalomConfig, StatsConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/setlog[-dev]/` based on SETLOG_ENV.
///
/// Set SETLOG_ENV=dev to use development data directory. SETLOG_HOME
/// replaces `~/.config` as the base directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = match std::env::var_os("SETLOG_HOME") {
        Some(home) => PathBuf::from(home),
        None => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config"),
    };

    let env = std::env::var("SETLOG_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("setlog-dev")
    } else {
        base_dir.join("setlog")
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
