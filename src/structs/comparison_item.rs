use serde::{Deserialize, Serialize};
use crate::enums::cost_status::CostStatus;

/// One service's cost in both months plus the upstream-derived delta and status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonItem {
    pub service: String,
    pub previous_cost: f64,
    pub current_cost: f64,
    pub change: f64,
    /// `None` when there was no previous cost to compare against.
    pub change_percent: Option<f64>,
    pub status: CostStatus,
}

impl ComparisonItem {
    pub fn is_reviewable(&self) -> bool {
        self.status.is_reviewable()
    }

    pub fn matches_term(&self, normalized_term: &str) -> bool {
        normalized_term.is_empty() || self.service.to_lowercase().contains(normalized_term)
    }
}
