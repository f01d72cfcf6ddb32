use crate::enums::reviewer_input::ReviewerInput;
use crate::enums::search_summary::SearchSummary;
use crate::errors::ReviewResult;
use crate::structs::review_prompt::ReviewPrompt;

/// Front end that asks the reviewer about one cost increase at a time.
pub trait ExplanationPrompter {
    fn ask(&mut self, prompt: &ReviewPrompt) -> ReviewResult<ReviewerInput>;

    /// Called after the reviewer changed the search query mid-review.
    fn filter_changed(&mut self, _summary: &SearchSummary, _table: &str) {}
}
