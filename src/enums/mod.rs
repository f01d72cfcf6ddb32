pub mod commands;
pub mod cost_status;
pub mod review_phase;
pub mod review_step;
pub mod reviewer_input;
pub mod search_summary;
