use serde::{Deserialize, Serialize};

use crate::domain::common::{AttributeDef, AttributeKind, Entity, EntityBase};

/// Пользователь админки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(flatten)]
    pub base: EntityBase,

    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl Entity for User {
    const ENTITY_KEY: &'static str = "users";
    const TITLE: &'static str = "Users";

    fn base(&self) -> &EntityBase {
        &self.base
    }

    fn attributes() -> &'static [AttributeDef] {
        const ATTRIBUTES: &[AttributeDef] = &[
            AttributeDef::new("username", AttributeKind::Text),
            AttributeDef::new("email", AttributeKind::Text),
            AttributeDef::new("fullName", AttributeKind::Text),
            AttributeDef::new("isAdmin", AttributeKind::Bool),
        ];
        ATTRIBUTES
    }
}
