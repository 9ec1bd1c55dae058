//! Global configuration for graphwalk (stored in ~/.config/graphwalk/config.toml)

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::bail_invalid;
use crate::error::{GraphError, Result};

const CONFIG_DIR: &str = "graphwalk";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRAPHWALK_CONFIG_DIR";

/// Maximum recursion depth for the recursive traversal variants.
///
/// Fits a 2 MiB thread stack in unoptimized builds. Deeper limits set in the
/// config file need a correspondingly larger stack.
pub const DEFAULT_RECURSION_LIMIT: usize = 1_000;

/// Which traversal flavour to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Call-stack depth-first traversal, bounded by the recursion limit
    Recursive,
    /// Explicit-stack traversal
    #[default]
    Iterative,
}

impl FromStr for Strategy {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "recursive" => Ok(Strategy::Recursive),
            "iterative" => Ok(Strategy::Iterative),
            other => bail_invalid!("strategy (expected: recursive, iterative)", other),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Recursive => write!(f, "recursive"),
            Strategy::Iterative => write!(f, "iterative"),
        }
    }
}

fn default_recursion_limit() -> usize {
    DEFAULT_RECURSION_LIMIT
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default = "default_recursion_limit")]
    pub recursion_limit: usize,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

impl GlobalConfig {
    fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GraphError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the user's config, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            GraphError::Other(format!(
                "failed to read global config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: GlobalConfig = toml::from_str(&content).map_err(|e| {
            GraphError::Other(format!(
                "failed to parse global config from {}: {}",
                path.display(),
                e
            ))
        })?;

        if config.recursion_limit == 0 {
            bail_invalid!("recursion_limit", "0 (must be at least 1)");
        }

        tracing::debug!(path = %path.display(), strategy = %config.strategy, recursion_limit = config.recursion_limit, "loaded config");
        Ok(config)
    }
}
