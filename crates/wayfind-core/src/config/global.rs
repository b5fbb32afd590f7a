//! User-level config location (~/.config/wayfind/config.toml)

use std::path::PathBuf;

const CONFIG_DIR: &str = "wayfind";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "WAYFIND_CONFIG_DIR";

/// Path of the user-level config file, if a config directory is known.
///
/// `WAYFIND_CONFIG_DIR` overrides the platform directory.
pub fn user_config_path() -> Option<PathBuf> {
    let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
        PathBuf::from(env_dir)
    } else {
        dirs::config_dir()?.join(CONFIG_DIR)
    };
    Some(config_dir.join(CONFIG_FILE))
}

