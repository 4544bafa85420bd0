//! Доступ к полям строки таблицы
//!
//! Строка - произвольный JSON-объект. Поле может лежать на один уровень
//! глубже, под ключом "внутреннего уровня" (`row.details.field`).

use super::cell::CellValue;
use serde_json::Value;

/// Читает значение поля `key` с учётом внутреннего уровня
///
/// Отсутствующее поле (или отсутствующий объект внутреннего уровня) даёт `Null`.
pub fn field_value(row: &Value, inner_level: Option<&str>, key: &str) -> CellValue {
    let source = match inner_level {
        Some(level) => row.get(level),
        None => Some(row),
    };
    CellValue::from(source.and_then(|obj| obj.get(key)))
}

/// Идентификатор строки для отрисовки: `id`, иначе `key`
///
/// Не участвует в сортировке.
pub fn row_identity(row: &Value) -> Option<String> {
    ["id", "key"].iter().find_map(|field| match row.get(*field) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_value_flat() {
        let row = json!({ "name": "Альфа", "qty": 3 });
        assert_eq!(field_value(&row, None, "qty"), CellValue::Integer(3));
        assert_eq!(field_value(&row, None, "missing"), CellValue::Null);
    }

    #[test]
    fn test_field_value_inner_level() {
        let row = json!({ "stats": { "score": 5 }, "score": 1 });
        assert_eq!(field_value(&row, Some("stats"), "score"), CellValue::Integer(5));
    }

    #[test]
    fn test_field_value_missing_inner_level() {
        let row = json!({ "score": 1 });
        assert_eq!(field_value(&row, Some("stats"), "score"), CellValue::Null);
    }

    #[test]
    fn test_row_identity_fallback() {
        assert_eq!(row_identity(&json!({ "id": "a", "key": "b" })), Some("a".to_string()));
        assert_eq!(row_identity(&json!({ "key": "b" })), Some("b".to_string()));
        assert_eq!(row_identity(&json!({ "id": 7 })), Some("7".to_string()));
        assert_eq!(row_identity(&json!({ "id": "", "key": 3 })), Some("3".to_string()));
        assert_eq!(row_identity(&json!({ "name": "x" })), None);
    }
}
