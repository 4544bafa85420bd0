//! Таблица данных с клиентской сортировкой и состояниями загрузки, ошибки и пустого набора
//!
//! Загрузку выполняет внешнее действие `fetch_request`; таблица только выбирает
//! арность вызова и отображает переданные флаги.
//!
//! # Пример
//!
//! ```ignore
//! <DataTable
//!     table_fields=Signal::derive(move || columns())
//!     fetch_request=Callback::new(move |args: FetchArgs<String>| load(args))
//!     data=Signal::derive(move || state.with(|s| s.items.clone()))
//!     is_loading=Signal::derive(move || state.with(|s| s.is_loading))
//!     is_error=Signal::derive(move || state.with(|s| s.error.is_some()))
//!     additional_request_prop=group
//!     inner_level="details"
//! />
//! ```

use super::column::{apply_header_click, sort_rows, ColumnDescriptor};
use super::sortable_header_cell::SortableHeaderCell;
use contracts::shared::data_table::{
    dispatch_fetch, row_identity, select_render_state, FetchArgs, RenderState, SortState,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use thaw::*;

/// Пустая строка равносильна отсутствию значения
fn present(param: Option<String>) -> Option<String> {
    param.filter(|p| !p.is_empty())
}

/// Вызывает загрузку при каждом изменении любого из параметров запроса
///
/// Повторы не отсекаются: смена второго параметра при `two_props = false`
/// тоже приводит к вызову.
pub fn use_fetch_trigger(
    fetch_request: Option<Callback<FetchArgs<String>>>,
    first: MaybeProp<String>,
    second: MaybeProp<String>,
    two_props: MaybeProp<bool>,
) {
    Effect::new(move |_| {
        let first = present(first.get());
        let second = present(second.get());
        let two = two_props.get().unwrap_or(false);
        let args = dispatch_fetch(fetch_request.is_some(), first.as_ref(), second.as_ref(), two);
        if let (Some(fetch), Some(args)) = (fetch_request, args) {
            log::debug!("DataTable: запрос данных, аргументов: {}", args.arity());
            untrack(|| fetch.run(args));
        }
    });
}

/// Флаг затемнения: повторяет `is_loading` на следующем тике планировщика
///
/// Влияет только на анимацию фона.
pub fn use_loading_mirror(is_loading: Signal<bool>) -> ReadSignal<bool> {
    let (open, set_open) = signal(false);
    Effect::new(move |_| {
        let loading = is_loading.get();
        spawn_local(async move {
            _ = set_open.try_set(loading);
        });
    });
    open
}

#[component]
pub fn DataTable(
    /// Описание колонок; пересчитывается только при изменении своих зависимостей
    #[prop(into)]
    table_fields: Signal<Vec<ColumnDescriptor>>,

    /// Действие загрузки данных
    #[prop(optional)]
    fetch_request: Option<Callback<FetchArgs<String>>>,

    /// Строки таблицы (`None` пока данные не получены)
    #[prop(into)]
    data: Signal<Option<Vec<Value>>>,

    #[prop(into)]
    is_loading: Signal<bool>,

    #[prop(into)]
    is_error: Signal<bool>,

    /// Первый параметр запроса
    #[prop(optional, into)]
    additional_request_prop: MaybeProp<String>,

    /// Второй параметр запроса
    #[prop(optional, into)]
    second_additional_request_prop: MaybeProp<String>,

    /// Передавать ли в запрос оба параметра
    #[prop(optional, into)]
    two_props: MaybeProp<bool>,

    /// Ключ вложенного объекта, из которого читаются поля строки
    #[prop(optional, into)]
    inner_level: MaybeProp<String>,
) -> impl IntoView {
    let sort_state = RwSignal::new(SortState::default());
    let open = use_loading_mirror(is_loading);

    use_fetch_trigger(
        fetch_request,
        additional_request_prop,
        second_additional_request_prop,
        two_props,
    );

    let on_sort = Callback::new(move |field: String| {
        table_fields.with_untracked(|columns| {
            sort_state.update(|s| apply_header_click(columns, &field, s));
        });
    });

    let sorted_rows = Memo::new(move |_| {
        let state = sort_state.get();
        let inner = present(inner_level.get());
        data.with(|rows| {
            table_fields.with(|columns| {
                sort_rows(rows.as_deref().unwrap_or_default(), &state, columns, inner.as_deref())
            })
        })
    });

    let render_state = Memo::new(move |_| {
        let loading = is_loading.get();
        let error = is_error.get();
        data.with(|rows| select_render_state(loading, error, rows.as_deref()))
    });

    let header = move || {
        table_fields
            .get()
            .into_iter()
            .map(|column| {
                view! {
                    <SortableHeaderCell
                        label=column.title.clone()
                        sort_field=column.name.clone()
                        sort_state=sort_state
                        on_sort=on_sort
                        min_width=column.min_width
                        align=column.align
                    />
                }
            })
            .collect_view()
    };

    let body = move || {
        let columns = table_fields.get();
        let inner = present(inner_level.get());
        sorted_rows
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                let row_key = row_identity(&row).unwrap_or_else(|| index.to_string());
                let cells = columns
                    .iter()
                    .map(|column| {
                        let text = column.display(&row, inner.as_deref());
                        let cell_style = if column.align == "right" {
                            "justify-content: flex-end;"
                        } else {
                            ""
                        };
                        view! {
                            <TableCell>
                                <TableCellLayout attr:style=cell_style>{text}</TableCellLayout>
                            </TableCell>
                        }
                    })
                    .collect_view();
                view! { <TableRow attr:data-row-key=row_key>{cells}</TableRow> }
            })
            .collect_view()
    };

    move || match render_state.get() {
        RenderState::Loading => view! {
            <div
                class="data-table__backdrop"
                style=move || format!(
                    "position: fixed; inset: 0; z-index: 1300; display: flex; align-items: center; justify-content: center; background: rgba(0, 0, 0, 0.5); transition: opacity 225ms; opacity: {};",
                    if open.get() { 1 } else { 0 }
                )
            >
                <Spinner />
            </div>
        }
        .into_any(),
        RenderState::Error => view! {
            <MessageBar intent=MessageBarIntent::Error>
                "Ошибка загрузки данных"
            </MessageBar>
        }
        .into_any(),
        RenderState::Empty => view! {
            <MessageBar intent=MessageBarIntent::Warning>
                "Нет данных"
            </MessageBar>
        }
        .into_any(),
        RenderState::Populated => view! {
            <div class="data-table">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>{header}</TableRow>
                    </TableHeader>
                    <TableBody>{body}</TableBody>
                </Table>
            </div>
        }
        .into_any(),
    }
}
