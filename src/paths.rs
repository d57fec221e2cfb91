//! Where the demo binary keeps its config file and logs.
//!
//! Debug builds and `cargo run` use the working directory. Release builds
//! use the platform's per-user directories.

use std::path::PathBuf;

use crate::constants::CONFIG_FILE_NAME;

const APP_DIR: &str = "remote-invoker";

fn is_dev_mode() -> bool {
    std::env::var("CARGO").is_ok() || cfg!(debug_assertions)
}

/// Directory holding the config file.
///
/// - Dev mode: current directory
/// - Linux: `~/.config/remote-invoker/`
/// - Windows/macOS: same as data_dir
fn config_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }

    #[cfg(target_os = "linux")]
    {
        dirs::config_dir().map(|p| p.join(APP_DIR))
    }

    #[cfg(not(target_os = "linux"))]
    {
        data_dir()
    }
}

/// Directory holding logs.
///
/// - Dev mode: current directory
/// - Windows: `%APPDATA%\remote-invoker\`
/// - macOS: `~/Library/Application Support/remote-invoker/`
/// - Linux: `~/.local/share/remote-invoker/`
fn data_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }

    dirs::data_dir().map(|p| p.join(APP_DIR))
}

/// Path to the invoker config file, falling back to the working directory
pub fn config_file() -> PathBuf {
    config_dir().unwrap_or_default().join(CONFIG_FILE_NAME)
}

/// Path to the rolling log directory
pub fn logs_dir() -> PathBuf {
    data_dir().unwrap_or_default().join("logs")
}

/// Create the config and log directories if missing
pub fn ensure_directories() -> std::io::Result<()> {
    if let Some(config) = config_dir() {
        std::fs::create_dir_all(config)?;
    }
    std::fs::create_dir_all(logs_dir())
}
