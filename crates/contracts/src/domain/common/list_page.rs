use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Параметры запроса страницы списка (`?page=1&limit=10&search=...`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Номер страницы, начиная с 1
    pub page: usize,
    pub limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ListQuery {
    pub fn new(page: usize, limit: usize, search: &str) -> Self {
        let search = search.trim();
        Self {
            page: page.max(1),
            limit: limit.max(1),
            search: if search.is_empty() {
                None
            } else {
                Some(search.to_string())
            },
        }
    }

    /// Запрос «все строки» для печати и экспорта
    pub fn all(search: &str) -> Self {
        Self::new(1, EXPORT_LIMIT, search)
    }
}

/// Лимит, которым экспорт запрашивает полный набор строк
pub const EXPORT_LIMIT: usize = 10_000;

/// Страница списка, как её отдаёт бэкенд.
///
/// Большинство эндпоинтов возвращают конверт `{ data, total, totalPages }`,
/// часть старых — голый массив. `from_value` принимает оба варианта.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub total_pages: usize,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
            total_pages: 1,
        }
    }
}

impl<T: DeserializeOwned> ListPage<T> {
    /// Разбирает ответ списка. Строки, которые не удалось десериализовать,
    /// пропускаются; неизвестная форма ответа даёт пустую страницу.
    pub fn from_value(value: Value, limit: usize) -> Self {
        let limit = limit.max(1);
        match value {
            Value::Array(items) => {
                let data = parse_rows(items);
                let total = data.len();
                Self {
                    data,
                    total,
                    total_pages: pages_for(total, limit),
                }
            }
            Value::Object(mut obj) => {
                let items = match obj.remove("data") {
                    Some(Value::Array(items)) => items,
                    _ => Vec::new(),
                };
                let data = parse_rows(items);
                let total = obj
                    .get("total")
                    .and_then(Value::as_u64)
                    .map(|t| t as usize)
                    .unwrap_or(data.len());
                let total_pages = obj
                    .get("totalPages")
                    .and_then(Value::as_u64)
                    .map(|t| (t as usize).max(1))
                    .unwrap_or_else(|| pages_for(total, limit));
                Self {
                    data,
                    total,
                    total_pages,
                }
            }
            _ => Self::default(),
        }
    }
}

fn parse_rows<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect()
}

fn pages_for(total: usize, limit: usize) -> usize {
    total.div_ceil(limit).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
        nombre: String,
    }

    #[test]
    fn test_envelope() {
        let value = json!({
            "data": [{ "id": 1, "nombre": "Ana" }, { "id": 2, "nombre": "Luis" }],
            "total": 25,
            "totalPages": 3
        });
        let page: ListPage<Row> = ListPage::from_value(value, 10);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_envelope_without_total_pages() {
        let value = json!({ "data": [{ "id": 1, "nombre": "Ana" }], "total": 25 });
        let page: ListPage<Row> = ListPage::from_value(value, 10);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_bare_array() {
        let value = json!([{ "id": 1, "nombre": "Ana" }, { "id": 2, "nombre": "Luis" }]);
        let page: ListPage<Row> = ListPage::from_value(value, 10);
        assert_eq!(page.total, 2);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_malformed_rows_skipped() {
        let value = json!({ "data": [{ "id": 1, "nombre": "Ana" }, { "id": "x" }], "total": 2 });
        let page: ListPage<Row> = ListPage::from_value(value, 10);
        assert_eq!(page.data, vec![Row { id: 1, nombre: "Ana".into() }]);
    }

    #[test]
    fn test_unknown_shape_is_empty() {
        let page: ListPage<Row> = ListPage::from_value(json!("error"), 10);
        assert!(page.data.is_empty());
        assert_eq!(page.total, 0);
        let page: ListPage<Row> = ListPage::from_value(json!({ "data": null }), 10);
        assert!(page.data.is_empty());
    }

    #[test]
    fn test_query_trims_search() {
        let q = ListQuery::new(0, 10, "  ");
        assert_eq!(q.page, 1);
        assert_eq!(q.search, None);
        let q = ListQuery::new(2, 5, " perez ");
        assert_eq!(q.search.as_deref(), Some("perez"));
    }
}
