use contracts::domain::a003_invoice::aggregate::Invoice;
use contracts::shared::list::ListResponse;

use crate::shared::api_utils::fetch_all;

/// Загрузить счета (все страницы, сортировка и поиск дальше на клиенте)
pub async fn fetch_invoices() -> Result<ListResponse<Invoice>, String> {
    fetch_all("/api/invoice").await
}
