use serde::{Deserialize, Serialize};
use crate::helpers::currency::{format_currency, format_total_change};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostTotals {
    pub previous_total: f64,
    pub current_total: f64,
    pub change: f64,
    /// Zero when the previous total is zero.
    pub change_percent: f64,
}

impl CostTotals {
    pub fn new(previous_total: f64, current_total: f64) -> Self {
        let change = current_total - previous_total;
        let change_percent = if previous_total > 0.0 {
            change / previous_total * 100.0
        } else {
            0.0
        };

        Self {
            previous_total,
            current_total,
            change,
            change_percent,
        }
    }

    pub fn previous_display(&self) -> String {
        format_currency(self.previous_total)
    }

    pub fn current_display(&self) -> String {
        format_currency(self.current_total)
    }

    pub fn change_display(&self) -> String {
        format_total_change(self.change, self.change_percent)
    }
}
