use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComparisonMonth {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl ComparisonMonth {
    pub fn period(&self) -> String {
        match (&self.start, &self.end) {
            (Some(start), Some(end)) => format!("{} ({} → {})", self.name, start, end),
            _ => self.name.clone(),
        }
    }
}
