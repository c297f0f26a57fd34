pub mod a001_building;
pub mod a002_room;
pub mod a003_ship;
pub mod a004_technology;
pub mod a005_news;
pub mod a006_tag;
pub mod a007_push_notification;
pub mod common;
