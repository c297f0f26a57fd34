use serde::{Deserialize, Serialize};

use crate::domain::common::{AttributeDef, AttributeKind, Entity, EntityBase};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technology {
    #[serde(flatten)]
    pub base: EntityBase,

    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Entity for Technology {
    const ENTITY_KEY: &'static str = "technologies";
    const TITLE: &'static str = "Technologies";

    fn base(&self) -> &EntityBase {
        &self.base
    }

    fn attributes() -> &'static [AttributeDef] {
        const ATTRIBUTES: &[AttributeDef] = &[
            AttributeDef::new("name", AttributeKind::Text),
            AttributeDef::new("description", AttributeKind::Text),
        ];
        ATTRIBUTES
    }
}
