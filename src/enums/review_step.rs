use serde::{Deserialize, Serialize};
use crate::structs::review_prompt::ReviewPrompt;
use crate::structs::review_summary::ReviewSummary;

/// What the review session wants from its front end after a transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReviewStep {
    Prompt(ReviewPrompt),
    Complete(ReviewSummary),
}

impl ReviewStep {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    pub fn prompt(&self) -> Option<&ReviewPrompt> {
        match self {
            Self::Prompt(prompt) => Some(prompt),
            Self::Complete(_) => None,
        }
    }
}
