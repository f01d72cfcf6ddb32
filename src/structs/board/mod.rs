pub mod board_view;
pub mod row_view;
