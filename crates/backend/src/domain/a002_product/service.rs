use contracts::domain::a002_product::aggregate::Product;
use contracts::shared::list::{apply_list_request, ListRequest, ListResponse};
use uuid::Uuid;

use crate::shared::data::store::Store;

/// Список товаров с поиском, сортировкой и пагинацией
pub fn list(store: &Store, req: &ListRequest) -> ListResponse<Product> {
    let resp = apply_list_request(store.products.clone(), req, &store.product_sort);
    tracing::debug!(
        "products: q={:?} sort={:?} -> {} of {}",
        req.q,
        resp.sort,
        resp.items.len(),
        resp.total_count
    );
    resp
}

pub fn get_by_id(store: &Store, id: Uuid) -> Option<Product> {
    store.products.iter().find(|p| p.id.value() == id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::default_config;

    #[test]
    fn test_list_by_price_desc() {
        let store = Store::from_config(&default_config());
        let req = ListRequest {
            sort_by: Some("unit_price".into()),
            sort_dir: Some("desc".into()),
            limit: Some(10),
            ..Default::default()
        };
        let resp = list(&store, &req);
        assert_eq!(resp.items.len(), 10);
        assert!(resp
            .items
            .windows(2)
            .all(|w| w[0].unit_price >= w[1].unit_price));
    }
}
