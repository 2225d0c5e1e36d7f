//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use contracts::shared::list::{ListRequest, ListResponse, MAX_PAGE_SIZE};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Query string for a list request, empty when no parameter is set
///
/// # Example
/// ```
/// use contracts::shared::list::ListRequest;
/// use frontend::shared::api_utils::list_query_string;
///
/// let req = ListRequest {
///     sort_by: Some("name".into()),
///     sort_dir: Some("desc".into()),
///     ..Default::default()
/// };
/// assert_eq!(list_query_string(&req), "?sort_by=name&sort_dir=desc");
/// assert_eq!(list_query_string(&ListRequest::default()), "");
/// ```
pub fn list_query_string(req: &ListRequest) -> String {
    let mut params: Vec<String> = Vec::new();
    let mut push = |key: &str, value: Option<String>| {
        if let Some(value) = value {
            params.push(format!("{}={}", key, urlencoding::encode(&value)));
        }
    };
    push("q", req.q.clone());
    push("sort_by", req.sort_by.clone());
    push("sort_dir", req.sort_dir.clone());
    push("limit", req.limit.map(|v| v.to_string()));
    push("offset", req.offset.map(|v| v.to_string()));

    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    }
}

/// GET list endpoint, e.g. `fetch_list::<Client>("/api/client", &req)`
pub async fn fetch_list<T: DeserializeOwned>(
    path: &str,
    req: &ListRequest,
) -> Result<ListResponse<T>, String> {
    let url = format!("{}{}{}", api_base(), path, list_query_string(req));
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch {}: {}", path, response.status()));
    }

    response
        .json::<ListResponse<T>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Смещение следующей страницы или `None`, если всё уже загружено.
///
/// Пустая страница тоже останавливает загрузку: список мог уменьшиться
/// на сервере между запросами.
pub fn next_page_offset(loaded: usize, total_count: usize, last_page_len: usize) -> Option<usize> {
    if last_page_len == 0 || loaded >= total_count {
        None
    } else {
        Some(loaded)
    }
}

/// Загрузить весь список постранично (по `MAX_PAGE_SIZE` записей).
///
/// Сортировка и поиск дальше выполняются на клиенте, поэтому нужны все записи.
pub async fn fetch_all<T: DeserializeOwned>(path: &str) -> Result<ListResponse<T>, String> {
    let mut req = ListRequest {
        limit: Some(MAX_PAGE_SIZE),
        ..Default::default()
    };
    let mut resp = fetch_list::<T>(path, &req).await?;
    let mut last_page_len = resp.items.len();

    while let Some(offset) = next_page_offset(resp.items.len(), resp.total_count, last_page_len) {
        req.offset = Some(offset);
        let page = fetch_list::<T>(path, &req).await?;
        log::debug!("{}: page at {} -> {} rows", path, offset, page.items.len());
        last_page_len = page.items.len();
        resp.items.extend(page.items);
    }

    if resp.items.len() < resp.total_count {
        log::warn!(
            "{}: loaded {} of {} rows",
            path,
            resp.items.len(),
            resp.total_count
        );
    }
    Ok(resp)
}
