use contracts::domain::a001_client::aggregate::Client;
use contracts::shared::search::filter_list;
use contracts::shared::sort::{sort_list, SortState};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct ClientsListState {
    /// Записи в порядке, полученном с сервера
    pub records: Vec<Client>,
    pub search_query: String,
    pub sort: SortState,
    pub is_loaded: bool,
}

impl ClientsListState {
    /// Строки таблицы: поиск, затем сортировка
    pub fn visible(&self) -> Vec<Client> {
        let filtered = filter_list(self.records.clone(), &self.search_query);
        sort_list(filtered, &self.sort)
    }
}

pub fn create_state() -> RwSignal<ClientsListState> {
    RwSignal::new(ClientsListState::default())
}
