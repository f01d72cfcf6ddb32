pub mod api_config;
pub mod config;
pub mod dashboard_config;
pub mod review_config;
