//! Универсальные страницы сущностей: список и карточка.

pub mod details;
pub mod list;

pub use details::EntityDetails;
pub use list::EntityListPage;
