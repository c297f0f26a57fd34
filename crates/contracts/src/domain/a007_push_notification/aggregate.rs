use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{AttributeDef, AttributeKind, Entity, EntityBase};

/// Push-уведомление для мобильного приложения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushNotification {
    #[serde(flatten)]
    pub base: EntityBase,

    pub title: String,
    #[serde(default)]
    pub body: String,
    /// Время отправки; `None`, если уведомление ещё не отправлено
    #[serde(default)]
    pub sent_at: Option<DateTime<Utc>>,
}

impl Entity for PushNotification {
    const ENTITY_KEY: &'static str = "push-notifications";
    const TITLE: &'static str = "Push notifications";

    fn base(&self) -> &EntityBase {
        &self.base
    }

    fn attributes() -> &'static [AttributeDef] {
        const ATTRIBUTES: &[AttributeDef] = &[
            AttributeDef::new("title", AttributeKind::Text),
            AttributeDef::new("body", AttributeKind::Text),
            AttributeDef::new("sentAt", AttributeKind::DateTime),
        ];
        ATTRIBUTES
    }
}
