use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{ReviewError, ReviewResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# finops-review configuration

[api]
# Backend exposing /api/compare and /api/incidents
base_url = "http://localhost:8000"

# Request timeout in seconds
timeout_secs = 30

[dashboard]
# First port to try; the next free port is used if it is taken
port = 8080

# Open the dashboard in the default browser on start
open_browser = true

[review]
# Incident ids look like <prefix>-<millis>
incident_prefix = "INC"
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_default()
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Load `~/finops-review/config.toml`, or defaults when the file does not exist.
    pub fn load() -> ReviewResult<Config> {
        let path = Self::config_path();

        if path.exists() {
            log::info!("📋 Loading config from: {}", path.display());
            return Self::load_from(&path);
        }

        log::debug!("No config file at {}, using defaults", path.display());
        Ok(Config::default())
    }

    pub fn load_from(path: &Path) -> ReviewResult<Config> {
        let content = fs::read_to_string(path).map_err(|e| ReviewError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ReviewError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })
    }

    pub fn create_sample_config() -> ReviewResult<PathBuf> {
        let path = Self::config_path();
        Self::write_sample_config(&path)?;
        Ok(path)
    }

    /// Refuses to overwrite an existing file.
    pub fn write_sample_config(path: &Path) -> ReviewResult<()> {
        if path.exists() {
            return Err(ReviewError::config_error(
                &format!("Config file already exists at {}", path.display()),
                None,
                Some("Edit the existing file or remove it first"),
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        match reqwest::Url::parse(&config.api.base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => errors.push(format!("api.base_url must use http or https, got '{}'", url.scheme())),
            Err(e) => errors.push(format!("api.base_url '{}' is not a valid URL: {}", config.api.base_url, e)),
        }

        if config.api.timeout_secs == 0 {
            errors.push("api.timeout_secs must be greater than zero".to_string());
        }

        if config.dashboard.port == 0 {
            errors.push("dashboard.port must be greater than zero".to_string());
        }

        let prefix = &config.review.incident_prefix;
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
            errors.push(format!("review.incident_prefix must be non-empty and alphanumeric, got '{}'", prefix));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
