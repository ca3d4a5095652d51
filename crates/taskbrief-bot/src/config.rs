/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed bot configuration
[POS]:    Configuration layer - credentials and destination setup
[UPDATE]: When adding new configuration options
*/

use serde::{Deserialize, Serialize};

/// Top-level configuration for the taskbrief bot
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    /// Todoist API bearer token
    pub todoist_token: String,
    /// Slack bot token (xoxb-...)
    pub slack_bot_token: String,
    /// Destination channel for digests
    pub channel_id: String,
    /// Fixed UTC offset applied when deriving "today" for a run.
    /// Todoist due dates are plain calendar dates and are compared as-is.
    #[serde(default)]
    pub utc_offset_minutes: i32,
    /// Address for the trigger/interaction HTTP server
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}

impl BotConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
