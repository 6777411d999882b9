//! Demo configuration
//!
//! Loaded from `.fluxgate-demo.toml` in the current directory, then from the
//! home directory, falling back to defaults.

use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".fluxgate-demo.toml";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Number of weather records served by the provider
    #[serde(default = "default_record_count")]
    pub record_count: usize,

    /// Rows per grid page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Number of independent grids (one keyed store each)
    #[serde(default = "default_grids")]
    pub grids: usize,

    /// Amount the counter is incremented by per click
    #[serde(default = "default_counter_step")]
    pub counter_step: i32,
}

fn default_record_count() -> usize {
    500
}

fn default_page_size() -> usize {
    10
}

fn default_grids() -> usize {
    2
}

fn default_counter_step() -> i32 {
    1
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            record_count: default_record_count(),
            page_size: default_page_size(),
            grids: default_grids(),
            counter_step: default_counter_step(),
        }
    }
}

impl DemoConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded demo config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default demo config");
        Self::default()
    }
}

fn load_config_file() -> Option<String> {
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    let home_config = env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))?;
    let content = std::fs::read_to_string(&home_config).ok()?;
    log::debug!("Loaded config from {}", home_config.display());
    Some(content)
}
