use crate::config::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_DASHBOARD_PORT, DEFAULT_INCIDENT_PREFIX, DEFAULT_REQUEST_TIMEOUT_SECS,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        DEFAULT_API_BASE_URL.to_string()
    }

    pub fn default_timeout_secs() -> u64 {
        DEFAULT_REQUEST_TIMEOUT_SECS
    }

    pub fn default_dashboard_port() -> u16 {
        DEFAULT_DASHBOARD_PORT
    }

    pub fn default_open_browser() -> bool {
        true
    }

    pub fn default_incident_prefix() -> String {
        DEFAULT_INCIDENT_PREFIX.to_string()
    }
}
