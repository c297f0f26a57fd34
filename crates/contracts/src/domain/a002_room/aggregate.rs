use serde::{Deserialize, Serialize};

use crate::domain::common::{AttributeDef, AttributeKind, Entity, EntityBase};

/// Комната (номер, зал экспозиции)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[serde(flatten)]
    pub base: EntityBase,

    pub name: String,
    /// Номер на табличке, может содержать буквы ("12A")
    pub number: String,
    pub floor: i32,
    pub building_id: i64,
    #[serde(default)]
    pub capacity: Option<i32>,
}

impl Entity for Room {
    const ENTITY_KEY: &'static str = "rooms";
    const TITLE: &'static str = "Rooms";

    fn base(&self) -> &EntityBase {
        &self.base
    }

    fn attributes() -> &'static [AttributeDef] {
        const ATTRIBUTES: &[AttributeDef] = &[
            AttributeDef::new("name", AttributeKind::Text),
            AttributeDef::new("number", AttributeKind::Text),
            AttributeDef::new("floor", AttributeKind::Integer),
            AttributeDef::new("buildingId", AttributeKind::Integer),
            AttributeDef::new("capacity", AttributeKind::Integer),
        ];
        ATTRIBUTES
    }

    fn excluded_columns() -> &'static [&'static str] {
        &["dateOfCreation"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM_JSON: &str = r#"{
        "id": 5,
        "dateOfCreation": "2024-01-10T08:00:00Z",
        "lastUpdate": "2024-02-11T09:15:00Z",
        "deleted": false,
        "lockedBy": 3,
        "name": "Blue hall",
        "number": "12A",
        "floor": 2,
        "buildingId": 1
    }"#;

    #[test]
    fn test_from_json_flattens_base() {
        let room: Room = serde_json::from_str(ROOM_JSON).unwrap();
        assert_eq!(room.id(), 5);
        assert_eq!(room.base.locked_by, Some(3));
        assert_eq!(room.building_id, 1);
        assert_eq!(room.capacity, None);
    }

    #[test]
    fn test_attribute_value_covers_base_fields() {
        let room: Room = serde_json::from_str(ROOM_JSON).unwrap();
        assert_eq!(room.attribute_value("number"), Some(serde_json::json!("12A")));
        assert_eq!(room.attribute_value("deleted"), Some(serde_json::json!(false)));
        assert_eq!(room.attribute_value("buildingId"), Some(serde_json::json!(1)));
        assert_eq!(room.attribute_value("missing"), None);
    }
}
