//! Cross-platform filesystem utilities
//!
//! - `atomic_rename`: Handles atomic file replacement (Windows requires explicit delete)
//! - `get_config_base_dir` / `get_data_base_dir`: Platform-appropriate directories

use std::io;
use std::path::{Path, PathBuf};

/// Directory name used under the platform config and data directories
pub const APP_DIR: &str = "waymark";

/// Cross-platform atomic rename that handles Windows file replacement.
///
/// On Unix, `fs::rename` atomically replaces the target if it exists.
/// On Windows, `fs::rename` fails if the target exists, so the target is
/// deleted first.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use waymark::fs_utils::atomic_rename;
///
/// std::fs::write("shortcuts.tmp", "{}")?;
/// atomic_rename(Path::new("shortcuts.tmp"), Path::new("shortcuts.json"))?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn atomic_rename(src: &Path, dst: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        if dst.exists() {
            std::fs::remove_file(dst)?;
        }
    }
    std::fs::rename(src, dst)
}

/// Get platform-appropriate config directory.
///
/// - **Unix**: `$XDG_CONFIG_HOME/waymark` or `~/.config/waymark`
/// - **Windows**: `%APPDATA%\waymark`
/// - **Fallback**: System temp directory + `waymark`
pub fn get_config_base_dir() -> PathBuf {
    #[cfg(not(windows))]
    {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            if !xdg_config.is_empty() {
                return PathBuf::from(xdg_config).join(APP_DIR);
            }
        }
    }

    if let Some(config) = dirs::config_dir() {
        return config.join(APP_DIR);
    }

    // Last resort: temp directory
    std::env::temp_dir().join(APP_DIR)
}

/// Get platform-appropriate data directory.
///
/// - **Unix**: `$XDG_DATA_HOME/waymark` or `~/.local/share/waymark`
/// - **Windows**: `%APPDATA%\waymark`
/// - **Fallback**: System temp directory + `waymark`
pub fn get_data_base_dir() -> PathBuf {
    #[cfg(not(windows))]
    {
        if let Ok(xdg_data) = std::env::var("XDG_DATA_HOME") {
            if !xdg_data.is_empty() {
                return PathBuf::from(xdg_data).join(APP_DIR);
            }
        }
    }

    if let Some(data) = dirs::data_dir() {
        return data.join(APP_DIR);
    }

    std::env::temp_dir().join(APP_DIR)
}

/// Default location of the config file
pub fn default_config_path() -> PathBuf {
    get_config_base_dir().join("config.toml")
}

/// Default location of the registry file
pub fn default_registry_path() -> PathBuf {
    get_data_base_dir().join("shortcuts.json")
}
