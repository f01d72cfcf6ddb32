pub mod api_client;
pub mod incident_dispatch;
pub mod incident_factory;
pub mod review_session;
pub mod visibility_filter;
