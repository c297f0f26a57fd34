//! Карточка сущности
//!
//! - form.rs: поля формы и сборка тела запроса
//! - view_model.rs: загрузка, сохранение, блокировка
//! - view.rs: Leptos component (pure UI)

pub mod form;
mod view;
mod view_model;

pub use view::EntityDetails;
pub use view_model::{EntityDetailsViewModel, LoadStatus};
