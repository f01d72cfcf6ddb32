use serde::{Deserialize, Serialize};
use crate::helpers::currency::format_increase;

/// A reviewer's recorded justification for one cost increase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: String,
    pub service: String,
    pub cost_change: f64,
    pub change_percent: f64,
    pub explanation: String,
    /// ISO-8601, UTC.
    pub timestamp: String,
}

impl Incident {
    pub fn cost_line(&self) -> String {
        format!("Cost increase: {}", format_increase(self.cost_change, Some(self.change_percent)))
    }
}
