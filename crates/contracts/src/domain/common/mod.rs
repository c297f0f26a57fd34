//! Common types and traits for all entities

pub mod entity;
pub mod entity_base;
pub mod list;

// Re-exports
pub use entity::{AttributeDef, AttributeKind, Entity};
pub use entity_base::EntityBase;
pub use list::{ListQuery, ListResponse, MutationCount, SortOrder};
