//! Поля формы карточки и их преобразование в JSON для API.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use contracts::domain::common::{AttributeDef, AttributeKind, Entity};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::shared::columns::humanize;

/// Формат `<input type="datetime-local">`
const DATETIME_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: String,
    pub kind: AttributeKind,
    /// Текст поля ввода; для Bool: "true"/"false"
    pub value: String,
}

impl FormField {
    pub fn is_checked(&self) -> bool {
        self.value == "true"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{label}: {message}")]
pub struct FieldError {
    pub label: String,
    pub message: String,
}

/// Поля для атрибутов сущности. Без записи (создание) поля пустые.
pub fn fields_for(attributes: &[AttributeDef], record: Option<&Value>) -> Vec<FormField> {
    attributes
        .iter()
        .map(|attribute| FormField {
            name: attribute.name,
            label: humanize(attribute.name),
            kind: attribute.kind,
            value: field_text(attribute.kind, record.and_then(|r| r.get(attribute.name))),
        })
        .collect()
}

pub fn fields_from_entity<E: Entity>(entity: Option<&E>) -> Vec<FormField> {
    let record = entity.and_then(|e| serde_json::to_value(e).ok());
    fields_for(E::attributes(), record.as_ref())
}

pub fn field_text(kind: AttributeKind, value: Option<&Value>) -> String {
    match (kind, value) {
        (AttributeKind::Bool, Some(Value::Bool(flag))) => flag.to_string(),
        (AttributeKind::Bool, _) => "false".to_string(),
        (_, None | Some(Value::Null)) => String::new(),
        (AttributeKind::DateTime, Some(Value::String(s))) => s
            .parse::<DateTime<Utc>>()
            .map(|dt| dt.format(DATETIME_INPUT_FORMAT).to_string())
            .unwrap_or_else(|_| s.clone()),
        (AttributeKind::IdList, Some(Value::Array(items))) => items
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        (_, Some(Value::String(s))) => s.clone(),
        (_, Some(other)) => other.to_string(),
    }
}

pub fn parse_field(field: &FormField) -> Result<Value, FieldError> {
    let text = field.value.trim();
    let invalid = |message: &str| FieldError {
        label: field.label.clone(),
        message: message.to_string(),
    };

    match field.kind {
        AttributeKind::Text => Ok(Value::String(field.value.clone())),
        AttributeKind::Bool => Ok(Value::Bool(field.is_checked())),
        AttributeKind::Integer if text.is_empty() => Ok(Value::Null),
        AttributeKind::Integer => text
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| invalid("expected an integer")),
        AttributeKind::DateTime if text.is_empty() => Ok(Value::Null),
        AttributeKind::DateTime => NaiveDateTime::parse_from_str(text, DATETIME_INPUT_FORMAT)
            .map(|dt| Value::String(dt.and_utc().to_rfc3339_opts(SecondsFormat::Secs, true)))
            .map_err(|_| invalid("expected a date and time")),
        AttributeKind::IdList => text
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<i64>().map(Value::from))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
            .map_err(|_| invalid("expected comma-separated ids")),
    }
}

/// Тело запроса create/update. Первая ошибка разбора прерывает сборку.
pub fn payload_from_fields(fields: &[FormField]) -> Result<Map<String, Value>, FieldError> {
    let mut payload = Map::new();
    for field in fields {
        payload.insert(field.name.to_string(), parse_field(field)?);
    }
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ATTRS: &[AttributeDef] = &[
        AttributeDef::new("name", AttributeKind::Text),
        AttributeDef::new("floor", AttributeKind::Integer),
        AttributeDef::new("isAdmin", AttributeKind::Bool),
        AttributeDef::new("publishedAt", AttributeKind::DateTime),
        AttributeDef::new("tagIds", AttributeKind::IdList),
    ];

    #[test]
    fn test_fields_for_new_record_are_empty() {
        let fields = fields_for(ATTRS, None);
        let values: Vec<&str> = fields.iter().map(|f| f.value.as_str()).collect();
        assert_eq!(values, vec!["", "", "false", "", ""]);
        assert_eq!(fields[3].label, "Published at");
    }

    #[test]
    fn test_fields_for_existing_record() {
        let record = json!({
            "name": "Blue hall",
            "floor": 2,
            "isAdmin": true,
            "publishedAt": "2024-03-05T14:07:00Z",
            "tagIds": [1, 4]
        });
        let fields = fields_for(ATTRS, Some(&record));
        let values: Vec<&str> = fields.iter().map(|f| f.value.as_str()).collect();
        assert_eq!(values, vec!["Blue hall", "2", "true", "2024-03-05T14:07", "1, 4"]);
    }

    #[test]
    fn test_payload_round_trips_edited_values() {
        let mut fields = fields_for(ATTRS, None);
        fields[0].value = "Archive".into();
        fields[1].value = " 3 ".into();
        fields[2].value = "true".into();
        fields[3].value = "2024-03-05T14:07".into();
        fields[4].value = "5, 6,".into();

        let payload = payload_from_fields(&fields).unwrap();
        assert_eq!(
            Value::Object(payload),
            json!({
                "name": "Archive",
                "floor": 3,
                "isAdmin": true,
                "publishedAt": "2024-03-05T14:07:00Z",
                "tagIds": [5, 6]
            })
        );
    }

    #[test]
    fn test_empty_optional_values_become_null() {
        let payload = payload_from_fields(&fields_for(ATTRS, None)).unwrap();
        assert_eq!(payload["floor"], Value::Null);
        assert_eq!(payload["publishedAt"], Value::Null);
        assert_eq!(payload["tagIds"], json!([]));
    }

    #[test]
    fn test_invalid_integer_reports_field() {
        let mut fields = fields_for(ATTRS, None);
        fields[1].value = "second".into();
        let err = payload_from_fields(&fields).unwrap_err();
        assert_eq!(err.label, "Floor");
        assert_eq!(err.to_string(), "Floor: expected an integer");
    }
}
