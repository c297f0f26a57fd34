use serde::{de::DeserializeOwned, Serialize};

use super::EntityBase;

/// Тип атрибута сущности. Определяет отображение ячейки и поле формы.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Text,
    Integer,
    Bool,
    DateTime,
    /// Список идентификаторов связанных записей
    IdList,
}

/// Описание атрибута сущности (имя поля на проводе + тип)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeDef {
    pub name: &'static str,
    pub kind: AttributeKind,
}

impl AttributeDef {
    pub const fn new(name: &'static str, kind: AttributeKind) -> Self {
        Self { name, kind }
    }
}

/// Базовые колонки, присутствующие у каждой сущности
pub const BASE_ATTRIBUTES: &[AttributeDef] = &[
    AttributeDef::new("id", AttributeKind::Integer),
    AttributeDef::new("dateOfCreation", AttributeKind::DateTime),
    AttributeDef::new("lastUpdate", AttributeKind::DateTime),
    AttributeDef::new("deleted", AttributeKind::Bool),
];

/// Трейт для всех сущностей админки
pub trait Entity:
    Clone + std::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Ключ сущности: сегмент REST-пути и ключ кэша запросов
    const ENTITY_KEY: &'static str;

    /// Заголовок списка
    const TITLE: &'static str;

    fn base(&self) -> &EntityBase;

    /// Собственные атрибуты сущности (без базовых) в порядке отображения
    fn attributes() -> &'static [AttributeDef];

    /// Колонки, скрытые в списке
    fn excluded_columns() -> &'static [&'static str] {
        &[]
    }

    fn id(&self) -> i64 {
        self.base().id
    }

    /// Значение атрибута в JSON-представлении (включая базовые поля)
    fn attribute_value(&self, name: &str) -> Option<serde_json::Value> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(mut map)) => map.remove(name),
            _ => None,
        }
    }
}
