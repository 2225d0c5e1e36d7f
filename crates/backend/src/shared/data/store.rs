use contracts::domain::a001_client::aggregate::Client;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a003_invoice::aggregate::Invoice;
use contracts::shared::sort::SortState;
use once_cell::sync::OnceCell;

use super::mock::{self, MockData};
use crate::shared::config::Config;

/// Имена таблиц в секции `[tables.*]` config.toml
pub const TABLE_CLIENT: &str = "client";
pub const TABLE_PRODUCT: &str = "product";
pub const TABLE_INVOICE: &str = "invoice";

/// Хранилище записей в памяти. После запуска только читается.
#[derive(Debug, Clone)]
pub struct Store {
    pub clients: Vec<Client>,
    pub products: Vec<Product>,
    pub invoices: Vec<Invoice>,
    pub client_sort: SortState,
    pub product_sort: SortState,
    pub invoice_sort: SortState,
}

impl Store {
    pub fn from_config(config: &Config) -> Self {
        let MockData {
            clients,
            products,
            invoices,
        } = mock::generate(&config.data);
        Self {
            clients,
            products,
            invoices,
            client_sort: config.default_sort(TABLE_CLIENT),
            product_sort: config.default_sort(TABLE_PRODUCT),
            invoice_sort: config.default_sort(TABLE_INVOICE),
        }
    }
}

static STORE: OnceCell<Store> = OnceCell::new();

pub fn initialize_store(config: &Config) -> anyhow::Result<()> {
    let store = Store::from_config(config);
    tracing::info!(
        "Mock data generated: {} clients, {} products, {} invoices",
        store.clients.len(),
        store.products.len(),
        store.invoices.len()
    );
    STORE
        .set(store)
        .map_err(|_| anyhow::anyhow!("store already initialized"))
}

pub fn get_store() -> anyhow::Result<&'static Store> {
    STORE
        .get()
        .ok_or_else(|| anyhow::anyhow!("store is not initialized"))
}
