use serde::{Deserialize, Serialize};
use crate::structs::config::api_config::ApiConfig;
use crate::structs::config::dashboard_config::DashboardConfig;
use crate::structs::config::review_config::ReviewConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub review: ReviewConfig,
}

impl Config {
    /// Apply command-line overrides on top of the file values.
    pub fn with_overrides(mut self, base_url: Option<String>, port: Option<u16>) -> Self {
        if let Some(base_url) = base_url {
            self.api.base_url = base_url;
        }
        if let Some(port) = port {
            self.dashboard.port = port;
        }
        self
    }
}
