use crate::demo::rows::ui::list::RowsListPage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <RowsListPage />
        </ConfigProvider>
    }
}
