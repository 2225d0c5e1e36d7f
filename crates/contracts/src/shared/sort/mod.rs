//! Сортировка табличных данных
//!
//! Состояние сортировки ([`SortState`]) живёт у каждой таблицы отдельно и
//! меняется только кликом по заголовку ([`SortState::toggle`]). Отсортированное
//! представление ([`sorted_view`]) вычисляется заново из записей и состояния и
//! никогда не изменяет исходный список.

pub mod collation;
pub mod direction;
pub mod engine;
pub mod state;
pub mod value;

pub use direction::{ParseSortDirectionError, SortDirection};
pub use engine::{sort_list, sorted_view, sorted_view_by, Sortable, TableSort};
pub use state::{InitialSort, SortIndicator, SortState};
pub use value::{compare_values, SortValue};
