//! Описание колонок таблицы данных
//!
//! Колонка без ключа сортировки (`name`) отображается как обычная подпись
//! и не реагирует на клики.

use contracts::shared::data_table::{
    field_comparator, field_value, get_comparator, stable_sort, CellValue, SortState,
};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Форматирование значения ячейки: `(значение, строка) -> текст`
pub type CellFormatter = Arc<dyn Fn(&CellValue, &Value) -> String + Send + Sync>;

/// Типизированное чтение значения из строки
pub type CellAccessor = Arc<dyn Fn(&Value) -> CellValue + Send + Sync>;

#[derive(Clone)]
pub struct ColumnDescriptor {
    /// Уникальный идентификатор колонки
    pub id: String,
    /// Ключ сортировки и имя поля строки
    pub name: Option<String>,
    /// Заголовок
    pub title: String,
    pub format: Option<CellFormatter>,
    /// Заменяет чтение поля `name` (в том числе с внутренним уровнем)
    pub get: Option<CellAccessor>,
    /// Выравнивание (left/right)
    pub align: &'static str,
    /// Минимальная ширина колонки
    pub min_width: f64,
}

impl ColumnDescriptor {
    /// Несортируемая колонка
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            title: title.into(),
            format: None,
            get: None,
            align: "left",
            min_width: 100.0,
        }
    }

    /// Сортируемая колонка; поле строки совпадает с ключом сортировки
    pub fn sortable(id: impl Into<String>, name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(id, title)
        }
    }

    pub fn with_format(mut self, format: impl Fn(&CellValue, &Value) -> String + Send + Sync + 'static) -> Self {
        self.format = Some(Arc::new(format));
        self
    }

    pub fn with_getter(mut self, get: impl Fn(&Value) -> CellValue + Send + Sync + 'static) -> Self {
        self.get = Some(Arc::new(get));
        self
    }

    pub fn align_right(mut self) -> Self {
        self.align = "right";
        self
    }

    pub fn with_min_width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn is_sortable(&self) -> bool {
        self.name.as_deref().is_some_and(|name| !name.is_empty())
    }

    /// Клик по заголовку: несортируемая колонка состояние не меняет
    pub fn apply_click(&self, state: &mut SortState) {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            state.request_sort(name);
        }
    }

    /// Значение ячейки для строки
    pub fn value(&self, row: &Value, inner_level: Option<&str>) -> CellValue {
        match (&self.get, &self.name) {
            (Some(get), _) => get(row),
            (None, Some(name)) => field_value(row, inner_level, name),
            (None, None) => CellValue::Null,
        }
    }

    /// Текст ячейки: через `format`, если задан
    pub fn display(&self, row: &Value, inner_level: Option<&str>) -> String {
        let value = self.value(row, inner_level);
        match &self.format {
            Some(format) => format(&value, row),
            None => value.to_string(),
        }
    }
}

impl fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("title", &self.title)
            .field("min_width", &self.min_width)
            .field("format", &self.format.is_some())
            .field("get", &self.get.is_some())
            .finish()
    }
}

/// Клик по заголовку с ключом `key`
///
/// Ключ, которому не соответствует ни одна сортируемая колонка, игнорируется.
pub fn apply_header_click(columns: &[ColumnDescriptor], key: &str, state: &mut SortState) {
    if let Some(column) = columns.iter().find(|c| c.is_sortable() && c.name.as_deref() == Some(key)) {
        column.apply_click(state);
    }
}

/// Сортирует строки по текущему состоянию сортировки
///
/// Значение берётся через колонку с активным ключом, если она есть,
/// иначе напрямую из поля строки.
pub fn sort_rows(
    rows: &[Value],
    state: &SortState,
    columns: &[ColumnDescriptor],
    inner_level: Option<&str>,
) -> Vec<Value> {
    if state.order_by.is_empty() {
        return rows.to_vec();
    }
    let key = state.order_by.as_str();
    match columns.iter().find(|c| c.name.as_deref() == Some(key)) {
        Some(column) => stable_sort(
            rows,
            get_comparator(state.order, |row: &Value| column.value(row, inner_level)),
        ),
        None => stable_sort(rows, field_comparator(state.order, key, inner_level)),
    }
}
