use contracts::domain::a003_invoice::aggregate::Invoice;
use contracts::shared::list::{apply_list_request, ListRequest, ListResponse};
use uuid::Uuid;

use crate::shared::data::store::Store;

/// Список счетов с поиском, сортировкой и пагинацией
pub fn list(store: &Store, req: &ListRequest) -> ListResponse<Invoice> {
    let resp = apply_list_request(store.invoices.clone(), req, &store.invoice_sort);
    tracing::debug!(
        "invoices: q={:?} sort={:?} -> {} of {}",
        req.q,
        resp.sort,
        resp.items.len(),
        resp.total_count
    );
    resp
}

pub fn get_by_id(store: &Store, id: Uuid) -> Option<Invoice> {
    store.invoices.iter().find(|i| i.id.value() == id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::default_config;
    use contracts::domain::a003_invoice::aggregate::InvoiceStatus;

    #[test]
    fn test_default_sort_newest_first() {
        let store = Store::from_config(&default_config());
        let resp = list(&store, &ListRequest::default());
        assert!(resp
            .items
            .windows(2)
            .all(|w| w[0].issue_date >= w[1].issue_date));
    }

    #[test]
    fn test_search_by_status_label() {
        let store = Store::from_config(&default_config());
        let req = ListRequest {
            q: Some("payée".into()),
            ..Default::default()
        };
        let resp = list(&store, &req);
        assert!(resp.total_count > 0);
        assert!(resp
            .items
            .iter()
            .all(|i| i.status == InvoiceStatus::Paid));
    }
}
