//! Сортировка строк таблицы: направление, состояние, компаратор и стабильная сортировка

use super::cell::CellValue;
use super::row::field_value;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

/// Направление сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortOrder::Asc
    }

    /// Применяет направление к результату сравнения по возрастанию
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }

    /// Значение атрибута `aria-sort`
    pub fn aria_sort(self) -> &'static str {
        match self {
            SortOrder::Asc => "ascending",
            SortOrder::Desc => "descending",
        }
    }
}

/// Локальное состояние сортировки таблицы
///
/// Не сбрасывается при повторной загрузке данных.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SortState {
    pub order: SortOrder,
    /// Ключ активной колонки; пустая строка - сортировка не выбрана
    pub order_by: String,
}

impl SortState {
    /// Клик по заголовку сортируемой колонки
    ///
    /// Повторный выбор той же колонки переключает направление,
    /// выбор другой колонки всегда начинает с возрастания.
    pub fn request_sort(&mut self, key: &str) {
        if self.order_by == key {
            self.order = self.order.toggled();
        } else {
            self.order_by = key.to_string();
            self.order = SortOrder::Asc;
        }
    }

    pub fn is_active(&self, key: &str) -> bool {
        !self.order_by.is_empty() && self.order_by == key
    }

    /// Направление для колонки `key`, если она активна
    pub fn direction_for(&self, key: &str) -> Option<SortOrder> {
        self.is_active(key).then_some(self.order)
    }
}

/// Строит компаратор по направлению и функции чтения значения
pub fn get_comparator<R, F>(order: SortOrder, accessor: F) -> impl Fn(&R, &R) -> Ordering
where
    F: Fn(&R) -> CellValue,
{
    move |a, b| order.apply(accessor(a).compare(&accessor(b)))
}

/// Компаратор по полю `key` строки, с учётом внутреннего уровня
pub fn field_comparator<'a>(
    order: SortOrder,
    key: &'a str,
    inner_level: Option<&'a str>,
) -> impl Fn(&Value, &Value) -> Ordering + 'a {
    get_comparator(order, move |row: &Value| field_value(row, inner_level, key))
}

/// Стабильная сортировка
///
/// Каждая строка помечается исходным индексом, равные по компаратору строки
/// упорядочиваются по этому индексу. Стабильность не зависит от алгоритма
/// сортировки.
pub fn stable_sort<R, C>(rows: &[R], comparator: C) -> Vec<R>
where
    R: Clone,
    C: Fn(&R, &R) -> Ordering,
{
    let mut decorated: Vec<(usize, &R)> = rows.iter().enumerate().collect();
    decorated.sort_unstable_by(|&(ia, a), &(ib, b)| comparator(a, b).then(ia.cmp(&ib)));
    decorated.into_iter().map(|(_, row)| row.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn by_field(order: SortOrder, key: &'static str) -> impl Fn(&Value, &Value) -> Ordering {
        field_comparator(order, key, None)
    }

    fn ids(rows: &[Value]) -> Vec<&str> {
        rows.iter().map(|r| r["id"].as_str().unwrap_or_default()).collect()
    }

    #[test]
    fn test_stable_keeps_equal_rows_in_order() {
        let rows = vec![
            json!({ "k": 1, "id": "a" }),
            json!({ "k": 1, "id": "b" }),
            json!({ "k": 2, "id": "c" }),
        ];
        let sorted = stable_sort(&rows, by_field(SortOrder::Asc, "k"));
        assert_eq!(ids(&sorted), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_stable_with_many_ties() {
        let rows: Vec<Value> = (0..50)
            .map(|i| json!({ "k": i % 3, "id": format!("r{:02}", i) }))
            .collect();
        let sorted = stable_sort(&rows, by_field(SortOrder::Asc, "k"));
        for pair in sorted.windows(2) {
            if pair[0]["k"] == pair[1]["k"] {
                assert!(pair[0]["id"].as_str() < pair[1]["id"].as_str());
            }
        }
    }

    #[test]
    fn test_descending_inverts() {
        let rows = vec![json!({ "k": 1 }), json!({ "k": 2 }), json!({ "k": 3 })];
        let sorted = stable_sort(&rows, by_field(SortOrder::Desc, "k"));
        let values: Vec<i64> = sorted.iter().map(|r| r["k"].as_i64().unwrap_or_default()).collect();
        assert_eq!(values, vec![3, 2, 1]);
    }

    #[test]
    fn test_descending_keeps_ties_in_original_order() {
        let rows = vec![
            json!({ "k": 1, "id": "a" }),
            json!({ "k": 2, "id": "b" }),
            json!({ "k": 1, "id": "c" }),
        ];
        let sorted = stable_sort(&rows, by_field(SortOrder::Desc, "k"));
        assert_eq!(ids(&sorted), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let rows = vec![
            json!({ "name": "delta", "id": "1" }),
            json!({ "name": "alpha", "id": "2" }),
            json!({ "name": "delta", "id": "3" }),
            json!({ "id": "4" }),
            json!({ "name": "bravo", "id": "5" }),
        ];
        for order in [SortOrder::Asc, SortOrder::Desc] {
            let once = stable_sort(&rows, by_field(order, "name"));
            let twice = stable_sort(&once, by_field(order, "name"));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_noop_comparator_keeps_order() {
        let rows = vec![json!({ "id": "x" }), json!({ "id": "y" }), json!({ "id": "z" })];
        let sorted = stable_sort(&rows, |_: &Value, _: &Value| Ordering::Equal);
        assert_eq!(sorted, rows);
    }

    #[test]
    fn test_nested_field_comparator() {
        let rows = vec![
            json!({ "id": "a", "stats": { "score": 5 } }),
            json!({ "id": "b", "stats": { "score": 2 } }),
        ];
        let cmp = field_comparator(SortOrder::Asc, "score", Some("stats"));
        assert_eq!(ids(&stable_sort(&rows, cmp)), vec!["b", "a"]);
    }

    #[test]
    fn test_large_integers_and_floats_sort_in_value_order() {
        let rows = vec![
            json!({ "id": "c", "k": 9_007_199_254_740_993_i64 }),
            json!({ "id": "b", "k": 9_007_199_254_740_992.0_f64 }),
            json!({ "id": "a", "k": 9_007_199_254_740_992_i64 }),
        ];
        let sorted = stable_sort(&rows, by_field(SortOrder::Asc, "k"));
        assert_eq!(ids(&sorted), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_missing_values_sort_first_ascending() {
        let rows = vec![json!({ "id": "a", "k": 1 }), json!({ "id": "b" })];
        assert_eq!(ids(&stable_sort(&rows, by_field(SortOrder::Asc, "k"))), vec!["b", "a"]);
        assert_eq!(ids(&stable_sort(&rows, by_field(SortOrder::Desc, "k"))), vec!["a", "b"]);
    }

    #[test]
    fn test_request_sort_toggles_same_key() {
        let mut state = SortState::default();
        state.request_sort("amount");
        assert_eq!(state.order_by, "amount");
        assert_eq!(state.order, SortOrder::Asc);

        state.request_sort("amount");
        assert_eq!(state.order, SortOrder::Desc);

        state.request_sort("amount");
        assert_eq!(state.order, SortOrder::Asc);
    }

    #[test]
    fn test_request_sort_other_key_starts_ascending() {
        let mut state = SortState {
            order: SortOrder::Desc,
            order_by: "amount".to_string(),
        };
        state.request_sort("name");
        assert_eq!(state.order_by, "name");
        assert_eq!(state.order, SortOrder::Asc);
    }

    #[test]
    fn test_direction_for() {
        let state = SortState {
            order: SortOrder::Desc,
            order_by: "name".to_string(),
        };
        assert_eq!(state.direction_for("name"), Some(SortOrder::Desc));
        assert_eq!(state.direction_for("qty"), None);
        assert_eq!(SortState::default().direction_for(""), None);
    }

    #[test]
    fn test_sort_order_serde() {
        assert_eq!(serde_json::to_string(&SortOrder::Desc).unwrap(), "\"desc\"");
        let state: SortState = serde_json::from_str(r#"{"order":"asc","order_by":"k"}"#).unwrap();
        assert_eq!(state.order, SortOrder::Asc);
    }
}
