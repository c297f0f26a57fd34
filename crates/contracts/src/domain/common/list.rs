use serde::{Deserialize, Serialize};

/// Направление сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortOrder::Asc
    }
}

/// Параметры запроса списка (сортировка + страница)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub sort: String,
    pub order: SortOrder,
    pub page: usize,
    pub page_size: usize,
}

/// Ответ сервера на запрос списка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
}

/// Ответ на delete/restore: количество затронутых записей
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationCount {
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_wire_format() {
        assert_eq!(serde_json::to_string(&SortOrder::Asc).unwrap(), "\"ASC\"");
        assert_eq!(
            serde_json::from_str::<SortOrder>("\"DESC\"").unwrap(),
            SortOrder::Desc
        );
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggled().toggled(), SortOrder::Desc);
    }

    #[test]
    fn test_list_response_parse() {
        let json = r#"{"items":[1,2,3],"total":17}"#;
        let parsed: ListResponse<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.items, vec![1, 2, 3]);
        assert_eq!(parsed.total, 17);
    }
}
