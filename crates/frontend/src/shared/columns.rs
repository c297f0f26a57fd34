//! Колонки таблицы и значения ячеек.

use chrono::{DateTime, Utc};
use contracts::domain::common::entity::BASE_ATTRIBUTES;
use contracts::domain::common::{AttributeDef, AttributeKind, Entity};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub id: String,
    pub label: String,
    pub class_name: String,
    pub sortable: bool,
}

impl Column {
    pub fn new(attribute: &AttributeDef) -> Self {
        let class_name = match attribute.kind {
            AttributeKind::Integer => "table__cell--number",
            AttributeKind::Bool => "table__cell--center",
            AttributeKind::DateTime => "table__cell--date",
            AttributeKind::Text | AttributeKind::IdList => "",
        };
        Self {
            id: attribute.name.to_string(),
            label: humanize(attribute.name),
            class_name: class_name.to_string(),
            // Сервер не умеет сортировать по спискам id
            sortable: attribute.kind != AttributeKind::IdList,
        }
    }
}

/// Колонки списка: собственные атрибуты сущности + базовые колонки,
/// без колонок из списка исключений.
pub fn derive_columns(attributes: &[AttributeDef], excluded: &[&str]) -> Vec<Column> {
    let mut columns: Vec<Column> = Vec::new();
    // id всегда первой колонкой
    let ordered = BASE_ATTRIBUTES[..1]
        .iter()
        .chain(attributes)
        .chain(&BASE_ATTRIBUTES[1..]);
    for attribute in ordered {
        if excluded.contains(&attribute.name) || columns.iter().any(|c| c.id == attribute.name) {
            continue;
        }
        columns.push(Column::new(attribute));
    }
    columns
}

pub fn columns_for<E: Entity>() -> Vec<Column> {
    derive_columns(E::attributes(), E::excluded_columns())
}

/// "dateOfCreation" -> "Date of creation"
pub fn humanize(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            label.push(' ');
            label.extend(ch.to_lowercase());
        } else {
            label.push(ch);
        }
    }
    label
}

/// Значение ячейки: как есть, либо с отдельным представлением для показа
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Plain(String),
    Rendered { value: String, display: String },
}

impl Cell {
    pub fn display(&self) -> &str {
        match self {
            Cell::Plain(value) => value,
            Cell::Rendered { display, .. } => display,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Cell::Plain(value) => value,
            Cell::Rendered { value, .. } => value,
        }
    }

    pub fn from_json(value: Option<&Value>) -> Cell {
        match value {
            None | Some(Value::Null) => Cell::Plain(String::new()),
            Some(Value::Bool(flag)) => Cell::Rendered {
                value: flag.to_string(),
                display: if *flag { "✓" } else { "—" }.to_string(),
            },
            Some(Value::Number(n)) => Cell::Plain(n.to_string()),
            Some(Value::String(s)) => match s.parse::<DateTime<Utc>>() {
                Ok(dt) => Cell::Rendered {
                    value: s.clone(),
                    display: format_timestamp(dt),
                },
                Err(_) => Cell::Plain(s.clone()),
            },
            Some(Value::Array(items)) => Cell::Plain(
                items
                    .iter()
                    .map(|v| match v {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Some(other @ Value::Object(_)) => Cell::Plain(other.to_string()),
        }
    }
}

pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M").to_string()
}

/// Строка, которую умеет показывать `DataTable`
pub trait TableRow: Clone + Send + Sync + 'static {
    fn row_id(&self) -> i64;
    fn cell(&self, column_id: &str) -> Cell;
}

impl<E: Entity> TableRow for E {
    fn row_id(&self) -> i64 {
        self.id()
    }

    fn cell(&self, column_id: &str) -> Cell {
        Cell::from_json(self.attribute_value(column_id).as_ref())
    }
}
