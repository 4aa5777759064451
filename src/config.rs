use std::{fs, path::Path, time::Duration};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::utils;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedConfig {
    pub name: String,
    pub url: String,
    pub venue: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub output_path: String,
    pub city: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub holiday_year: i32,
    pub holiday_country: String,
    pub feeds: Vec<FeedConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_path: "events.json".to_string(),
            city: "Zagreb".to_string(),
            timeout_secs: 20,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            holiday_year: 2026,
            holiday_country: "HR".to_string(),
            feeds: vec![
                FeedConfig {
                    name: "rss kultura 1".to_string(),
                    url: "https://www.tportal.hr/rss/kultura".to_string(),
                    venue: "portal".to_string(),
                },
                FeedConfig {
                    name: "rss kultura 2".to_string(),
                    url: "https://www.jutarnji.hr/rss/kultura".to_string(),
                    venue: "portal".to_string(),
                },
            ],
        }
    }
}

impl AppConfig {
    /// Reads the config from the per-user config directory, falling back to defaults.
    pub fn load() -> Result<Self> {
        read_config(&utils::config_path())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub fn read_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("unable to read config {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("invalid config {}", path.display()))
}
