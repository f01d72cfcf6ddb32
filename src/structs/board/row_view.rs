use serde::{Deserialize, Serialize};
use crate::enums::cost_status::CostStatus;
use crate::helpers::currency::{format_change, format_currency, format_percent};
use crate::structs::comparison_item::ComparisonItem;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowView {
    pub index: usize,
    pub service: String,
    pub previous_cost: String,
    pub current_cost: String,
    pub change: String,
    pub change_percent: String,
    /// Sign of the change, used for colouring: -1, 0 or 1.
    pub trend: i8,
    pub status: CostStatus,
    pub status_label: String,
    pub reviewable: bool,
    pub visible: bool,
    pub active: bool,
    pub completed: bool,
}

impl RowView {
    pub fn new(index: usize, item: &ComparisonItem, visible: bool, active: bool, completed: bool) -> Self {
        let trend = if item.change > 0.0 {
            1
        } else if item.change < 0.0 {
            -1
        } else {
            0
        };

        Self {
            index,
            service: item.service.clone(),
            previous_cost: format_currency(item.previous_cost),
            current_cost: format_currency(item.current_cost),
            change: format_change(item.change),
            change_percent: format_percent(item.change_percent),
            trend,
            status: item.status,
            status_label: item.status.label().to_string(),
            reviewable: item.is_reviewable(),
            visible,
            active,
            completed,
        }
    }
}
