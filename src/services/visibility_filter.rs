use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use crate::enums::search_summary::SearchSummary;
use crate::structs::comparison_dataset::ComparisonDataset;

/// Free-text search over service names. Visibility is always derived, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityFilter {
    query: String,
}

impl VisibilityFilter {
    pub fn new(query: impl Into<String>) -> Self {
        Self { query: query.into() }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    /// Trimmed, lowercased search term.
    pub fn term(&self) -> String {
        self.query.trim().to_lowercase()
    }

    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
    }

    pub fn visibility(&self, dataset: &ComparisonDataset) -> Vec<bool> {
        let term = self.term();
        dataset
            .comparison
            .iter()
            .map(|item| item.matches_term(&term))
            .collect()
    }

    pub fn visible_rows(&self, dataset: &ComparisonDataset) -> BTreeSet<usize> {
        self.visibility(dataset)
            .into_iter()
            .enumerate()
            .filter_map(|(index, visible)| visible.then_some(index))
            .collect()
    }

    pub fn visible_count(&self, dataset: &ComparisonDataset) -> usize {
        self.visibility(dataset).into_iter().filter(|visible| *visible).count()
    }

    pub fn summary(&self, dataset: &ComparisonDataset) -> SearchSummary {
        if self.is_empty() {
            return SearchSummary::ShowingAll;
        }

        let term = self.term();

        let total = dataset.len();
        let visible = self.visible_count(dataset);

        if visible == 0 {
            SearchSummary::NoMatches
        } else if visible == total {
            SearchSummary::AllMatch { total, term }
        } else {
            SearchSummary::Partial { visible, total }
        }
    }

    /// Whether a review started now would have anything to present.
    pub fn has_reviewable_rows(&self, dataset: &ComparisonDataset) -> bool {
        let term = self.term();
        dataset
            .comparison
            .iter()
            .any(|item| item.is_reviewable() && item.matches_term(&term))
    }
}
