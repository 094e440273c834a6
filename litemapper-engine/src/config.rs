//! Mapper configuration, optionally read from a TOML file:
//!
//! ```toml
//! [naming]
//! suffix = "Dto"
//! mode = "exact"   # or "regex"
//! ```

use crate::error::{MapError, MapResult};
use crate::resolver::NamingPattern;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapperConfig {
    #[serde(default)]
    pub naming: NamingPattern,
}

impl MapperConfig {
    pub fn from_toml_str(contents: &str) -> MapResult<Self> {
        toml::from_str(contents).map_err(|e| MapError::Config(e.to_string()))
    }

    /// Reads and parses a configuration file.
    pub fn try_load_from(path: impl AsRef<Path>) -> MapResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| MapError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&contents)
    }

    /// Loads configuration from `path`.
    /// Falls back to defaults when the file is missing or unparsable.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No mapper config found at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::try_load_from(path) {
            Ok(config) => {
                info!("Loaded mapper config from {:?}", path);
                config
            }
            Err(e) => {
                warn!("{}. Falling back to default mapper config.", e);
                Self::default()
            }
        }
    }
}
