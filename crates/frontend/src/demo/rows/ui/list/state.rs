use leptos::prelude::*;
use serde_json::Value;

#[derive(Clone, Debug, Default)]
pub struct RowsListState {
    /// `None` до первого ответа
    pub items: Option<Vec<Value>>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Номер последнего запроса; ответы на более ранние отбрасываются
    pub request_seq: u64,
}

pub fn create_state() -> RwSignal<RowsListState> {
    RwSignal::new(RowsListState::default())
}
