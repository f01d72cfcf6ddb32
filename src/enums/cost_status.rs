use std::fmt;
use serde::{Deserialize, Serialize};

/// Upstream classification of a service's month-over-month cost movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostStatus {
    New,
    Increased,
    Decreased,
    Unchanged,
    Removed,
}

impl CostStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Increased => "Increased",
            Self::Decreased => "Decreased",
            Self::Unchanged => "Unchanged",
            Self::Removed => "Removed",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::New => "🆕",
            Self::Increased => "📈",
            Self::Decreased => "📉",
            Self::Unchanged => "➖",
            Self::Removed => "🗑️",
        }
    }

    pub fn is_reviewable(&self) -> bool {
        matches!(self, Self::Increased)
    }
}

impl fmt::Display for CostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
