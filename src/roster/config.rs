use crate::error::{Result, RosterError};
use crate::source::http::DEFAULT_SOURCE_URL;
use crate::state::DEFAULT_PAGE_SIZE;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for roster, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Where the user list is fetched from: an http(s) URL or a local file path
    #[serde(default = "default_source")]
    pub source: String,

    /// Rows shown per table page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_source() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            page_size: default_page_size(),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RosterConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(RosterError::Config("page_size must be at least 1".to_string()));
        }
        if self.source.trim().is_empty() {
            return Err(RosterError::Config("source must not be empty".to_string()));
        }
        Ok(())
    }
}
