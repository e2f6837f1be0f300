use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domains::playback::DEFAULT_STEP_INTERVAL_MS;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub planner: PlannerConfig,
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub log_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    pub step_interval_ms: u64,
}

impl Config {
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            planner: PlannerConfig {
                base_url: "http://localhost:5002".to_string(),
                timeout_secs: 30,
            },
            playback: PlaybackConfig {
                step_interval_ms: DEFAULT_STEP_INTERVAL_MS,
            },
            log_file: None,
        }
    }
}
