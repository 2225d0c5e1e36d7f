use contracts::domain::a003_invoice::aggregate::{Invoice, InvoiceStatus};
use contracts::shared::search::filter_list;
use contracts::shared::sort::{sort_list, SortState};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct InvoicesListState {
    pub records: Vec<Invoice>,
    pub search_query: String,
    /// None = все статусы
    pub status_filter: Option<InvoiceStatus>,
    pub sort: SortState,
    pub is_loaded: bool,
}

impl InvoicesListState {
    pub fn visible(&self) -> Vec<Invoice> {
        let mut items = filter_list(self.records.clone(), &self.search_query);
        if let Some(status) = self.status_filter {
            items.retain(|i| i.status == status);
        }
        sort_list(items, &self.sort)
    }
}

/// Сумма TTC по строкам (итог в подвале таблицы)
pub fn total_ttc(invoices: &[Invoice]) -> f64 {
    invoices.iter().map(|i| i.total_ttc).sum()
}

pub fn create_state() -> RwSignal<InvoicesListState> {
    RwSignal::new(InvoicesListState::default())
}
