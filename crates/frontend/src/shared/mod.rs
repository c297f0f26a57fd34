pub mod api_utils;
pub mod cache;
pub mod columns;
pub mod components;
pub mod config;
pub mod entity_page;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod notifications;
pub mod query;
pub mod row_actions;
pub mod table_options;
