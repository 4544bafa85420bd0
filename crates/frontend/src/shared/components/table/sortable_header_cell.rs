//! Компонент ячейки заголовка таблицы данных
//!
//! # Примеры
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Сумма"
//!     sort_field=Some("amount".to_string())
//!     sort_state=sort_state
//!     on_sort=Callback::new(move |field: String| sort_state.update(|s| s.request_sort(&field)))
//!     align="right"
//! />
//! ```

use crate::shared::list_utils::{get_aria_sort, get_sort_class, get_sort_indicator};
use contracts::shared::data_table::SortState;
use leptos::prelude::*;
use thaw::*;

/// Ячейка заголовка
///
/// Если `sort_field` не задан, выводится только подпись: клик по ней
/// состояние сортировки не меняет.
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Ключ сортировки колонки (`None` - колонка не сортируется)
    sort_field: Option<String>,

    /// Текущее состояние сортировки
    #[prop(into)]
    sort_state: Signal<SortState>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let justify = if align == "right" { "justify-content: flex-end;" } else { "" };

    let Some(field) = sort_field.filter(|f| !f.is_empty()) else {
        return view! {
            <TableHeaderCell min_width=min_width>
                <div class="table__header" style=justify>
                    <span class="table__header-title">{label}</span>
                </div>
            </TableHeaderCell>
        }
        .into_any();
    };

    let field_for_click = field.clone();
    let field_for_indicator = field.clone();
    let field_for_class = field.clone();

    let handle_click = move |_| on_sort.run(field_for_click.clone());

    let header_style = format!("cursor: pointer; padding-right: 12px; {}", justify);

    view! {
        <TableHeaderCell
            min_width=min_width
            attr:aria-sort=move || sort_state.with(|s| get_aria_sort(s, &field))
        >
            <div
                class="table__sortable-header"
                style=header_style
                on:click=handle_click
            >
                <span class="table__header-title">{label}</span>
                <span class=move || sort_state.with(|s| get_sort_class(s, &field_for_class))>
                    {move || sort_state.with(|s| get_sort_indicator(s, &field_for_indicator))}
                </span>
            </div>
        </TableHeaderCell>
    }
    .into_any()
}
