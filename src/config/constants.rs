use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const COMPARE_ENDPOINT: &str = "/api/compare";
pub const INCIDENTS_ENDPOINT: &str = "/api/incidents";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const GENERIC_COMPARE_ERROR: &str = "An error occurred while fetching the comparison data.";

pub const DEFAULT_DASHBOARD_PORT: u16 = 8080;
pub const DASHBOARD_PORT_SCAN_WIDTH: u16 = 120;
pub const MAX_BOARD_ID_LENGTH: usize = 64;
pub const SERVER_SHUTDOWN_GRACE_PERIOD_MS: u64 = 100;

pub const DEFAULT_INCIDENT_PREFIX: &str = "INC";

pub const CONFIG_DIR_NAME: &str = "finops-review";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_LOG_FILTER: &str = "info";
pub const SPINNER_FRAME_MS: u64 = 150;

pub const DEFAULT_TABLE_WIDTH: usize = 100;
pub const MIN_SERVICE_COLUMN_WIDTH: usize = 12;

pub fn timeout_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
