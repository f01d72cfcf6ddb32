use std::fmt;
use serde::{Deserialize, Serialize};

/// Human-readable outcome of applying a search query to the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchSummary {
    ShowingAll,
    NoMatches,
    AllMatch { total: usize, term: String },
    Partial { visible: usize, total: usize },
}

impl fmt::Display for SearchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShowingAll => write!(f, "Showing all services"),
            Self::NoMatches => write!(f, "No services found"),
            Self::AllMatch { total, term } => write!(f, "All {} services match \"{}\"", total, term),
            Self::Partial { visible, total } => write!(f, "Showing {} of {} services", visible, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_each_summary() {
        assert_eq!(SearchSummary::ShowingAll.to_string(), "Showing all services");
        assert_eq!(SearchSummary::NoMatches.to_string(), "No services found");
        assert_eq!(
            SearchSummary::AllMatch { total: 3, term: "amazon".to_string() }.to_string(),
            "All 3 services match \"amazon\""
        );
        assert_eq!(SearchSummary::Partial { visible: 2, total: 12 }.to_string(), "Showing 2 of 12 services");
    }
}
