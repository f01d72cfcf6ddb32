pub mod board_manager;
pub mod dashboard_server;
pub mod table_renderer;
