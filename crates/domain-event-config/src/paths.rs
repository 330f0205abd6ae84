//! Configuration and cache directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/domain-event-console/`, `~/.cache/domain-event-console/`
//! - macOS: `~/Library/Application Support/domain-event-console/`, `~/Library/Caches/domain-event-console/`
//! - Windows: `%APPDATA%\domain-event-console\`, `%LOCALAPPDATA%\domain-event-console\`

use anyhow::{Context, Result};
use std::path::PathBuf;

pub const APP_NAME: &str = "domain-event-console";

/// Get the application config directory, creating it if missing
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory {:?}", dir))?;
    Ok(dir)
}

/// Get the application cache directory, creating it if missing
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {:?}", dir))?;
    Ok(dir)
}

/// Get path to the global display config file
pub fn display_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
