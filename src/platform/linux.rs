// mcbe-preview platform paths for Linux
// Config: $XDG_CONFIG_HOME/mcbe-preview or ~/.config/mcbe-preview
// Data:   $XDG_DATA_HOME/mcbe-preview or ~/.local/share/mcbe-preview

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "mcbe-preview";

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join(APP_DIR),
        _ => home_dir().join(".config").join(APP_DIR),
    }
}

pub fn get_data_dir() -> PathBuf {
    match env::var("XDG_DATA_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join(APP_DIR),
        _ => home_dir().join(".local").join("share").join(APP_DIR),
    }
}
