use serde::{Deserialize, Serialize};

use super::search::{filter_list, Searchable};
use super::sort::{sort_list, InitialSort, Sortable, SortState};

/// Максимальный размер страницы списка
pub const MAX_PAGE_SIZE: usize = 500;

/// Запрос на получение списка (query string)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRequest {
    pub q: Option<String>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl ListRequest {
    /// Сортировка, запрошенная клиентом.
    ///
    /// `None` если параметры сортировки не переданы вовсе: тогда действует
    /// сортировка таблицы по умолчанию.
    pub fn requested_sort(&self) -> Option<InitialSort> {
        if self.sort_by.is_none() && self.sort_dir.is_none() {
            return None;
        }
        Some(InitialSort {
            column: self.sort_by.clone(),
            direction: self.sort_dir.clone(),
        })
    }

    pub fn effective_sort(&self, default_sort: &SortState) -> SortState {
        match self.requested_sort() {
            Some(requested) => SortState::initialize(Some(&requested)),
            None => default_sort.clone(),
        }
    }
}

/// Ответ со списком
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    /// Фактически применённая сортировка
    pub sort: SortState,
}

/// Фильтрация, сортировка и постраничная выборка
pub fn apply_list_request<T>(items: Vec<T>, req: &ListRequest, default_sort: &SortState) -> ListResponse<T>
where
    T: Sortable + Searchable,
{
    let filtered = match req.q.as_deref() {
        Some(q) => filter_list(items, q),
        None => items,
    };
    let sort = req.effective_sort(default_sort);
    let sorted = sort_list(filtered, &sort);
    let total_count = sorted.len();

    let offset = req.offset.unwrap_or(0);
    let limit = req.limit.unwrap_or(MAX_PAGE_SIZE).min(MAX_PAGE_SIZE);
    let items = sorted.into_iter().skip(offset).take(limit).collect();

    ListResponse {
        items,
        total_count,
        sort,
    }
}
