// mcbe-preview platform abstraction
// Provides platform-specific config and data paths for Windows, macOS, and Linux.

use std::env;
use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Overrides the data directory (database location) when set.
pub const DATA_DIR_ENV: &str = "MCBE_PREVIEW_DATA_DIR";

/// Returns the platform-specific configuration directory.
///
/// - **Linux**: `~/.config/mcbe-preview` (or `$XDG_CONFIG_HOME/mcbe-preview`)
/// - **macOS**: `~/Library/Application Support/mcbe-preview`
/// - **Windows**: `%APPDATA%/mcbe-preview`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the data directory, honoring `MCBE_PREVIEW_DATA_DIR`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}
