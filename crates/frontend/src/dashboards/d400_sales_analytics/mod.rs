pub mod adapters;
pub mod api;
pub mod ui;
