// src/infra/paths.rs - XDG-compliant path management
//
// All paths respect the CHATDECK_HOME environment variable for isolation.
// When CHATDECK_HOME is set, config and data live under that directory.
// When unset, config uses XDG_CONFIG_HOME/chatdeck and data uses
// XDG_DATA_HOME/chatdeck.

use directories::ProjectDirs;
use std::path::PathBuf;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "chatdeck")
}

/// Returns the CHATDECK_HOME override, if set.
fn chatdeck_home() -> Option<PathBuf> {
    std::env::var_os("CHATDECK_HOME").map(PathBuf::from)
}

/// Configuration directory: $CHATDECK_HOME/ or the platform config dir.
pub fn config_dir() -> PathBuf {
    if let Some(home) = chatdeck_home() {
        return home;
    }
    project_dirs()
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".chatdeck"))
}

/// Data directory: $CHATDECK_HOME/data/ or the platform local data dir.
pub fn data_dir() -> PathBuf {
    if let Some(home) = chatdeck_home() {
        return home.join("data");
    }
    project_dirs()
        .map(|d| d.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".chatdeck").join("data"))
}

/// Config file path
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Log file written while the TUI owns the terminal
pub fn log_file_path() -> PathBuf {
    data_dir().join("chatdeck.log")
}
