use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Базовые поля, общие для всех сущностей.
///
/// Встраивается в каждую запись через `#[serde(flatten)]`, поэтому на проводе
/// поля лежат на верхнем уровне JSON-объекта.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityBase {
    /// Уникальный идентификатор записи (не меняется после создания)
    pub id: i64,
    /// Дата создания записи
    pub date_of_creation: DateTime<Utc>,
    /// Дата последнего обновления
    pub last_update: DateTime<Utc>,
    /// Мягкое удаление (soft delete)
    #[serde(default)]
    pub deleted: bool,
    /// Идентификатор пользователя, который сейчас редактирует запись
    #[serde(default)]
    pub locked_by: Option<i64>,
}

impl EntityBase {
    /// Запись заблокирована кем-либо (включая текущего пользователя)
    pub fn is_locked(&self) -> bool {
        self.locked_by.is_some()
    }

    /// Запись заблокирована другим пользователем.
    ///
    /// Если текущий пользователь неизвестен, любая блокировка считается чужой.
    pub fn is_locked_by_other(&self, actor_id: Option<i64>) -> bool {
        match self.locked_by {
            Some(owner) => Some(owner) != actor_id,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(locked_by: Option<i64>) -> EntityBase {
        let now = Utc::now();
        EntityBase {
            id: 1,
            date_of_creation: now,
            last_update: now,
            deleted: false,
            locked_by,
        }
    }

    #[test]
    fn test_lock_ownership() {
        assert!(!base(None).is_locked_by_other(Some(7)));
        assert!(!base(Some(7)).is_locked_by_other(Some(7)));
        assert!(base(Some(8)).is_locked_by_other(Some(7)));
        assert!(base(Some(8)).is_locked_by_other(None));
        assert!(base(Some(7)).is_locked());
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let json = r#"{
            "id": 42,
            "dateOfCreation": "2024-03-01T10:00:00Z",
            "lastUpdate": "2024-03-02T11:30:00Z"
        }"#;
        let parsed: EntityBase = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, 42);
        assert!(!parsed.deleted);
        assert_eq!(parsed.locked_by, None);
    }
}
