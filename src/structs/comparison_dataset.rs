use serde::{Deserialize, Serialize};
use crate::structs::comparison_item::ComparisonItem;
use crate::structs::comparison_month::ComparisonMonth;
use crate::structs::cost_totals::CostTotals;

/// Snapshot of one `/api/compare` response. Replaced wholesale on re-fetch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComparisonDataset {
    pub previous_month: ComparisonMonth,
    pub current_month: ComparisonMonth,
    pub comparison: Vec<ComparisonItem>,
}

impl ComparisonDataset {
    pub fn len(&self) -> usize {
        self.comparison.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comparison.is_empty()
    }

    pub fn totals(&self) -> CostTotals {
        let (previous, current) = self
            .comparison
            .iter()
            .fold((0.0, 0.0), |(previous, current), item| {
                (previous + item.previous_cost, current + item.current_cost)
            });
        CostTotals::new(previous, current)
    }

    pub fn has_increases(&self) -> bool {
        self.comparison.iter().any(ComparisonItem::is_reviewable)
    }
}
