mod state;

use contracts::shared::data_table::{CellValue, FetchArgs};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Deserialize;
use serde_json::Value;
use thaw::*;

use crate::demo::rows::api;
use crate::shared::api_utils::query_params;
use crate::shared::components::table::{ColumnDescriptor, DataTable};
use state::create_state;

/// Начальные параметры страницы из адресной строки: `?p1=..&p2=..&two=true&inner=details`
#[derive(Debug, Default, Deserialize)]
struct RowsQuery {
    p1: Option<String>,
    p2: Option<String>,
    #[serde(default)]
    two: bool,
    inner: Option<String>,
}

fn format_amount(value: &CellValue, _row: &Value) -> String {
    value
        .as_f64()
        .map(|n| format!("{:.2}", n))
        .unwrap_or_else(|| "-".to_string())
}

fn format_status(_value: &CellValue, row: &Value) -> String {
    let active = row.get("active").and_then(Value::as_bool).unwrap_or(false);
    if active { "Активна" } else { "Архив" }.to_string()
}

/// Колонки списка; колонка периода нужна только при запросе с двумя параметрами
fn rows_columns(with_period: bool) -> Vec<ColumnDescriptor> {
    let mut columns = vec![
        ColumnDescriptor::sortable("name", "name", "Наименование").with_min_width(240.0),
        ColumnDescriptor::sortable("qty", "qty", "Количество").align_right(),
        ColumnDescriptor::sortable("amount", "amount", "Сумма")
            .align_right()
            .with_format(format_amount),
    ];
    if with_period {
        columns.push(ColumnDescriptor::sortable("period", "period", "Период"));
    }
    columns.push(ColumnDescriptor::new("status", "Статус").with_format(format_status));
    columns
}

#[component]
pub fn RowsListPage() -> impl IntoView {
    let query: RowsQuery = query_params();
    let state = create_state();

    let first = RwSignal::new(query.p1.unwrap_or_default());
    let second = RwSignal::new(query.p2.unwrap_or_default());
    let two_props = RwSignal::new(query.two);
    let inner_level = RwSignal::new(query.inner.unwrap_or_default());

    let fetch_request = Callback::new(move |args: FetchArgs<String>| {
        let seq = state.with_untracked(|s| s.request_seq) + 1;
        state.update(|s| {
            s.is_loading = true;
            s.error = None;
            s.request_seq = seq;
        });
        spawn_local(async move {
            let result = api::fetch_rows(&args).await;
            // Страница закрыта или уже отправлен более новый запрос
            if state.try_with_untracked(|s| s.request_seq) != Some(seq) {
                return;
            }
            match result {
                Ok(rows) => state.update(|s| {
                    s.items = Some(rows);
                    s.is_loading = false;
                }),
                Err(e) => {
                    log::error!("Не удалось загрузить строки: {}", e);
                    state.update(|s| {
                        s.error = Some(e);
                        s.is_loading = false;
                    });
                }
            }
        });
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Строки"</h1>
                    <Badge>
                        {move || state.with(|s| s.items.as_ref().map_or(0, Vec::len)).to_string()}
                    </Badge>
                </div>
            </div>

            <div class="page__content">
                <Flex align=FlexAlign::Center style="gap: 12px; margin-bottom: 16px;">
                    <Input value=first placeholder="Первый параметр" />
                    <Input value=second placeholder="Второй параметр" />
                    <Input value=inner_level placeholder="Вложенный уровень" />
                    <Switch checked=two_props label="Два параметра" />
                </Flex>

                <DataTable
                    table_fields=Signal::derive(move || rows_columns(two_props.get()))
                    fetch_request=fetch_request
                    data=Signal::derive(move || state.with(|s| s.items.clone()))
                    is_loading=Signal::derive(move || state.with(|s| s.is_loading))
                    is_error=Signal::derive(move || state.with(|s| s.error.is_some()))
                    additional_request_prop=Signal::derive(move || Some(first.get()))
                    second_additional_request_prop=Signal::derive(move || Some(second.get()))
                    two_props=Signal::derive(move || Some(two_props.get()))
                    inner_level=Signal::derive(move || Some(inner_level.get()))
                />
            </div>
        </div>
    }
}
