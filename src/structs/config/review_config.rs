use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReviewConfig {
    /// Prefix of generated incident ids (`INC-1718000000000`).
    #[serde(default = "ConfigHelper::default_incident_prefix")]
    pub incident_prefix: String,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            incident_prefix: ConfigHelper::default_incident_prefix(),
        }
    }
}
