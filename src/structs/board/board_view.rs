use serde::{Deserialize, Serialize};
use crate::enums::review_phase::ReviewPhase;
use crate::structs::board::row_view::RowView;
use crate::structs::review_prompt::ReviewPrompt;
use crate::structs::review_summary::ReviewSummary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptView {
    pub row_index: usize,
    pub service: String,
    pub headline: String,
    pub progress: String,
}

impl From<&ReviewPrompt> for PromptView {
    fn from(prompt: &ReviewPrompt) -> Self {
        Self {
            row_index: prompt.row_index,
            service: prompt.service.clone(),
            headline: prompt.headline(),
            progress: prompt.progress(),
        }
    }
}

/// Everything the dashboard page needs to draw itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub id: String,
    pub previous_month: String,
    pub current_month: String,
    pub previous_total: String,
    pub current_total: String,
    pub total_change: String,
    pub total_trend: i8,
    pub query: String,
    pub search_summary: String,
    pub can_start_review: bool,
    pub phase: ReviewPhase,
    pub prompt: Option<PromptView>,
    pub last_summary: Option<ReviewSummary>,
    pub rows: Vec<RowView>,
}
