use serde::{Deserialize, Serialize};

use crate::domain::common::{AttributeDef, AttributeKind, Entity, EntityBase};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Здание (корпус музея/отеля)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    #[serde(flatten)]
    pub base: EntityBase,

    pub name: String,
    pub address: String,
    #[serde(default)]
    pub floors: Option<i32>,
}

impl Entity for Building {
    const ENTITY_KEY: &'static str = "buildings";
    const TITLE: &'static str = "Buildings";

    fn base(&self) -> &EntityBase {
        &self.base
    }

    fn attributes() -> &'static [AttributeDef] {
        const ATTRIBUTES: &[AttributeDef] = &[
            AttributeDef::new("name", AttributeKind::Text),
            AttributeDef::new("address", AttributeKind::Text),
            AttributeDef::new("floors", AttributeKind::Integer),
        ];
        ATTRIBUTES
    }
}
