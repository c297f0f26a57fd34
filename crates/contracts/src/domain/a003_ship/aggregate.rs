use serde::{Deserialize, Serialize};

use crate::domain::common::{AttributeDef, AttributeKind, Entity, EntityBase};

/// Корабль экспозиции
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    #[serde(flatten)]
    pub base: EntityBase,

    pub name: String,
    #[serde(default)]
    pub year_built: Option<i32>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technology_ids: Vec<i64>,
}

impl Entity for Ship {
    const ENTITY_KEY: &'static str = "ships";
    const TITLE: &'static str = "Ships";

    fn base(&self) -> &EntityBase {
        &self.base
    }

    fn attributes() -> &'static [AttributeDef] {
        const ATTRIBUTES: &[AttributeDef] = &[
            AttributeDef::new("name", AttributeKind::Text),
            AttributeDef::new("yearBuilt", AttributeKind::Integer),
            AttributeDef::new("description", AttributeKind::Text),
            AttributeDef::new("technologyIds", AttributeKind::IdList),
        ];
        ATTRIBUTES
    }
}
