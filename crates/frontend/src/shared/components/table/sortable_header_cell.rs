//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```text
//! <SortableHeaderCell
//!     label="Montant TTC"
//!     column=columns::TOTAL_TTC
//!     sort=Signal::derive(move || state.with(|s| s.sort.clone()))
//!     on_sort=Callback::new(move |column: String| toggle_sort(column))
//!     align="right"
//! />
//! ```

use crate::shared::list_utils::{sort_class, sort_indicator};
use contracts::shared::sort::SortState;
use leptos::prelude::*;
use thaw::*;

/// Компонент сортируемой ячейки заголовка таблицы
///
/// Своего состояния не хранит: индикатор (▲ ▼ ⇅) берётся из `sort`,
/// клик передаётся наверх через `on_sort` с именем колонки.
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Колонка, по которой сортирует этот заголовок
    column: &'static str,

    /// Текущая сортировка таблицы
    #[prop(into)]
    sort: Signal<SortState>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(column.to_string())
            >
                {label}
                <span class=move || sort.with(|s| sort_class(s, column))>
                    {move || sort.with(|s| sort_indicator(s, column))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
