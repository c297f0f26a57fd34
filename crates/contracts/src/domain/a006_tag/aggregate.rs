use serde::{Deserialize, Serialize};

use crate::domain::common::{AttributeDef, AttributeKind, Entity, EntityBase};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(flatten)]
    pub base: EntityBase,

    pub name: String,
}

impl Entity for Tag {
    const ENTITY_KEY: &'static str = "tags";
    const TITLE: &'static str = "Tags";

    fn base(&self) -> &EntityBase {
        &self.base
    }

    fn attributes() -> &'static [AttributeDef] {
        const ATTRIBUTES: &[AttributeDef] = &[AttributeDef::new("name", AttributeKind::Text)];
        ATTRIBUTES
    }
}
