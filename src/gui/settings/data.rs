use std::time::Duration;

use serde::{
    Deserialize,
    Serialize,
};

pub const DEFAULT_SOURCE_URL: &str = "https://www.terriblytinytales.com/test.txt";
pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub source_url: String,
    pub request_timeout_secs: u64,
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { source_url: DEFAULT_SOURCE_URL.to_string(), request_timeout_secs: 30, dark_mode: true }
    }
}

impl SettingsData {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}
