//! Configuration for wayfind
//!
//! Settings come from the first file found among: an explicit `--config`
//! path, `wayfind.toml` in the working directory, and the user config
//! directory. With none present the defaults apply.

pub mod global;
pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{Result, WayfindError};

pub use types::{HeuristicMode, InputConfig, NodeRange, SearchConfig, WayfindConfig};

/// Config file name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "wayfind.toml";

impl WayfindConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: WayfindConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Find and load the effective configuration.
    ///
    /// Returns the config and the file it came from, if any.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(WayfindError::InputNotFound {
                    path: path.to_path_buf(),
                });
            }
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        let local = cwd.join(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Ok((Self::load(&local)?, Some(local)));
        }

        if let Some(user) = global::user_config_path() {
            if user.is_file() {
                return Ok((Self::load(&user)?, Some(user)));
            }
        }

        Ok((Self::default(), None))
    }

    /// Reject settings the engine cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.nodes.min > self.nodes.max {
            bail_invalid!(
                "node range",
                format!("{}-{}", self.nodes.min, self.nodes.max)
            );
        }
        if self.input.delimiter.is_whitespace() || self.input.delimiter == '"' {
            bail_invalid!("delimiter", format!("{:?}", self.input.delimiter));
        }
        Ok(())
    }
}
