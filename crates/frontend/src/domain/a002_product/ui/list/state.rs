use contracts::domain::a002_product::aggregate::Product;
use contracts::shared::search::filter_list;
use contracts::shared::sort::{sort_list, SortState};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct ProductsListState {
    pub records: Vec<Product>,
    pub search_query: String,
    pub sort: SortState,
    /// Скрывать товары, снятые с продажи
    pub only_active: bool,
    pub is_loaded: bool,
}

impl ProductsListState {
    pub fn visible(&self) -> Vec<Product> {
        let mut items = filter_list(self.records.clone(), &self.search_query);
        if self.only_active {
            items.retain(|p| p.is_active);
        }
        sort_list(items, &self.sort)
    }
}

pub fn create_state() -> RwSignal<ProductsListState> {
    RwSignal::new(ProductsListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_product::aggregate::{columns, ProductId};
    use contracts::shared::sort::SortDirection;
    use uuid::Uuid;

    fn product(sku: &str, price: f64, is_active: bool) -> Product {
        Product {
            id: ProductId::new(Uuid::new_v4()),
            sku: sku.into(),
            name: format!("Article {}", sku),
            unit_price: price,
            vat_rate: 20.0,
            stock_qty: 10,
            is_active,
        }
    }

    #[test]
    fn test_only_active_and_price_sort() {
        let state = ProductsListState {
            records: vec![
                product("P-3", 12.5, true),
                product("P-1", 120.0, false),
                product("P-2", 9.9, true),
            ],
            sort: SortState::new(columns::UNIT_PRICE, SortDirection::Descending),
            only_active: true,
            ..Default::default()
        };
        let skus: Vec<_> = state.visible().into_iter().map(|p| p.sku).collect();
        assert_eq!(skus, vec!["P-3", "P-2"]);
    }

    #[test]
    fn test_unsorted_keeps_server_order() {
        let state = ProductsListState {
            records: vec![product("P-3", 1.0, true), product("P-1", 2.0, true)],
            ..Default::default()
        };
        let skus: Vec<_> = state.visible().into_iter().map(|p| p.sku).collect();
        assert_eq!(skus, vec!["P-3", "P-1"]);
    }
}
