use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DashboardConfig {
    #[serde(default = "ConfigHelper::default_dashboard_port")]
    pub port: u16,

    #[serde(default = "ConfigHelper::default_open_browser")]
    pub open_browser: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            port: ConfigHelper::default_dashboard_port(),
            open_browser: ConfigHelper::default_open_browser(),
        }
    }
}
