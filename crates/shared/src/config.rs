use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;

use crate::{api::API_BASE_PATH, notice::NoticeLevel};

/// Runtime settings for the dashboard
///
/// Every field has a default so the host page only needs to pass the ones it
/// wants to change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Prefix for every backend path, e.g. `/api` or `https://host/api`
    pub api_base: String,
    pub toast_duration_ms: u64,
    pub error_toast_duration_ms: u64,
    /// One of `trace`, `debug`, `info`, `warn`, `error` or `off`
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: option_env!("DASHBOARD_API_BASE").unwrap_or(API_BASE_PATH).to_string(),
            toast_duration_ms: 5_000,
            error_toast_duration_ms: 8_000,
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Overlay `json` onto the defaults. Missing or blank json gives the
    /// defaults
    pub fn parse(json: Option<&str>) -> Result<Self, serde_json::Error> {
        match json.map(str::trim).filter(|j| !j.is_empty()) {
            None => Ok(Self::default()),
            Some(json) => serde_json::from_str(json),
        }
    }

    /// How long a toast for `level` stays up. Errors linger longer
    pub fn toast_duration(&self, level: NoticeLevel) -> Duration {
        match level {
            NoticeLevel::Info => Duration::from_millis(self.toast_duration_ms),
            NoticeLevel::Error => Duration::from_millis(self.error_toast_duration_ms),
        }
    }

    pub fn max_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::INFO)
    }
}
