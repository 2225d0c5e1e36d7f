use contracts::domain::a001_client::aggregate::Client;
use contracts::shared::list::ListResponse;

use crate::shared::api_utils::fetch_all;

/// Загрузить клиентов (все страницы, сортировка и поиск дальше на клиенте)
pub async fn fetch_clients() -> Result<ListResponse<Client>, String> {
    fetch_all("/api/client").await
}
