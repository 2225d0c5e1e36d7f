//! Ячейка таблицы для денежных сумм
//!
//! ```text
//! <TableCellMoney value=invoice.total_ttc />
//! <TableCellMoney value=client.balance highlight_debt=true />
//! ```

use super::number_format::format_money;
use leptos::prelude::*;
use thaw::*;

/// Денежная сумма: "1 234,56 €", выравнивание по правому краю
#[component]
pub fn TableCellMoney(
    value: f64,

    #[prop(optional, default = "€")]
    currency: &'static str,

    /// Положительная сумма выделяется красным (задолженность клиента)
    #[prop(optional, default = false)]
    highlight_debt: bool,
) -> impl IntoView {
    let style = if highlight_debt && value > 0.0 {
        "color: var(--color-error-700); font-weight: 600"
    } else {
        ""
    };

    view! {
        <TableCell class="text-right">
            <span style=style>{format!("{} {}", format_money(value), currency)}</span>
        </TableCell>
    }
}
