pub mod api;
pub mod catalog;
