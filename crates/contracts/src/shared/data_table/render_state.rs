//! Выбор отображаемого состояния таблицы

use serde::{Deserialize, Serialize};

/// Одно из четырёх взаимоисключающих состояний отображения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderState {
    Loading,
    Error,
    Empty,
    Populated,
}

/// Приоритет: загрузка > ошибка > нет данных > таблица
///
/// `None` вне загрузки считается пустым набором.
pub fn select_render_state<R>(is_loading: bool, is_error: bool, data: Option<&[R]>) -> RenderState {
    if is_loading {
        RenderState::Loading
    } else if is_error {
        RenderState::Error
    } else if data.map_or(true, |rows| rows.is_empty()) {
        RenderState::Empty
    } else {
        RenderState::Populated
    }
}
