//! Утилиты заголовков сортируемых таблиц: индикаторы и классы сортировки

use contracts::shared::data_table::{SortOrder, SortState};

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(state: &SortState, field: &str) -> &'static str {
    match state.direction_for(field) {
        Some(SortOrder::Asc) => " ▲",
        Some(SortOrder::Desc) => " ▼",
        None => " ⇅",
    }
}

/// CSS-класс индикатора: активная колонка подсвечивается
pub fn get_sort_class(state: &SortState, field: &str) -> &'static str {
    if state.is_active(field) {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}

/// Значение `aria-sort` для ячейки заголовка
pub fn get_aria_sort(state: &SortState, field: &str) -> &'static str {
    state.direction_for(field).map_or("none", SortOrder::aria_sort)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_follows_clicks() {
        let mut state = SortState::default();
        assert_eq!(get_sort_indicator(&state, "amount"), " ⇅");

        state.request_sort("amount");
        assert_eq!(get_sort_indicator(&state, "amount"), " ▲");
        assert_eq!(get_sort_indicator(&state, "name"), " ⇅");

        state.request_sort("amount");
        assert_eq!(get_sort_indicator(&state, "amount"), " ▼");
    }

    #[test]
    fn test_class_and_aria() {
        let mut state = SortState::default();
        state.request_sort("name");
        assert_eq!(get_sort_class(&state, "name"), "sort-icon active");
        assert_eq!(get_sort_class(&state, "qty"), "sort-icon");
        assert_eq!(get_aria_sort(&state, "name"), "ascending");
        assert_eq!(get_aria_sort(&state, "qty"), "none");
    }
}
