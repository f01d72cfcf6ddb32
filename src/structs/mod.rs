pub mod board;
pub mod cli;
pub mod comparison_dataset;
pub mod comparison_item;
pub mod comparison_month;
pub mod config;
pub mod cost_totals;
pub mod incident;
pub mod incident_listing;
pub mod review_prompt;
pub mod review_summary;
pub mod review_target;
pub mod submit_receipt;
