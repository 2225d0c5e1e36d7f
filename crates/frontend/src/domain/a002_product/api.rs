use contracts::domain::a002_product::aggregate::Product;
use contracts::shared::list::ListResponse;

use crate::shared::api_utils::fetch_all;

/// Загрузить каталог товаров (все страницы, сортировка и поиск дальше на клиенте)
pub async fn fetch_products() -> Result<ListResponse<Product>, String> {
    fetch_all("/api/product").await
}
