use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{AttributeDef, AttributeKind, Entity, EntityBase};

/// Новость
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    #[serde(flatten)]
    pub base: EntityBase,

    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tag_ids: Vec<i64>,
}

impl Entity for News {
    const ENTITY_KEY: &'static str = "news";
    const TITLE: &'static str = "News";

    fn base(&self) -> &EntityBase {
        &self.base
    }

    fn attributes() -> &'static [AttributeDef] {
        const ATTRIBUTES: &[AttributeDef] = &[
            AttributeDef::new("title", AttributeKind::Text),
            AttributeDef::new("content", AttributeKind::Text),
            AttributeDef::new("publishedAt", AttributeKind::DateTime),
            AttributeDef::new("tagIds", AttributeKind::IdList),
        ];
        ATTRIBUTES
    }

    // Текст новости слишком длинный для таблицы
    fn excluded_columns() -> &'static [&'static str] {
        &["content"]
    }
}
