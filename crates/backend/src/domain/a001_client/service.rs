use contracts::domain::a001_client::aggregate::Client;
use contracts::shared::list::{apply_list_request, ListRequest, ListResponse};
use uuid::Uuid;

use crate::shared::data::store::Store;

/// Список клиентов с поиском, сортировкой и пагинацией
pub fn list(store: &Store, req: &ListRequest) -> ListResponse<Client> {
    let resp = apply_list_request(store.clients.clone(), req, &store.client_sort);
    tracing::debug!(
        "clients: q={:?} sort={:?} -> {} of {}",
        req.q,
        resp.sort,
        resp.items.len(),
        resp.total_count
    );
    resp
}

pub fn get_by_id(store: &Store, id: Uuid) -> Option<Client> {
    store.clients.iter().find(|c| c.id.value() == id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::default_config;
    use contracts::shared::sort::SortState;

    #[test]
    fn test_list_uses_default_sort() {
        let store = Store::from_config(&default_config());
        let resp = list(&store, &ListRequest::default());
        assert_eq!(resp.sort, store.client_sort);
        assert_eq!(resp.total_count, store.clients.len());
        let names: Vec<_> = resp.items.iter().map(|c| c.name.clone()).collect();
        let mut expected = names.clone();
        expected.sort_by(|a, b| contracts::shared::sort::collation::compare_fr_base(a, b));
        assert_eq!(names, expected);
    }

    #[test]
    fn test_list_bad_direction_keeps_store_order() {
        let store = Store::from_config(&default_config());
        let req = ListRequest {
            sort_by: Some("name".into()),
            sort_dir: Some("upwards".into()),
            ..Default::default()
        };
        let resp = list(&store, &req);
        assert_eq!(resp.sort, SortState::unsorted());
        assert_eq!(resp.items, store.clients);
    }

    #[test]
    fn test_get_by_id() {
        let store = Store::from_config(&default_config());
        let first = store.clients[0].clone();
        assert_eq!(get_by_id(&store, first.id.value()), Some(first));
        assert_eq!(get_by_id(&store, Uuid::nil()), None);
    }
}
