use serde::{Deserialize, Serialize};
use crate::helpers::currency::format_increase;
use crate::structs::review_target::ReviewTarget;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewPrompt {
    pub row_index: usize,
    pub service: String,
    pub change: f64,
    pub change_percent: Option<f64>,
    /// Zero-based cursor position within the targets derived for this step.
    pub position: usize,
    pub total: usize,
}

impl ReviewPrompt {
    pub fn new(target: &ReviewTarget, position: usize, total: usize) -> Self {
        Self {
            row_index: target.index,
            service: target.item.service.clone(),
            change: target.item.change,
            change_percent: target.item.change_percent,
            position,
            total,
        }
    }

    pub fn headline(&self) -> String {
        format_increase(self.change, self.change_percent)
    }

    pub fn progress(&self) -> String {
        format!("{}/{}", self.position + 1, self.total)
    }
}
