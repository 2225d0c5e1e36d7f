mod state;

use contracts::domain::a003_invoice::aggregate::{columns, InvoiceStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_invoice::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{format_money, SortableHeaderCell, TableCellMoney};
use crate::shared::date_utils::{format_date, format_date_opt};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use state::{create_state, total_ttc};

fn status_badge_color(status: InvoiceStatus) -> BadgeColor {
    match status {
        InvoiceStatus::Draft => BadgeColor::Informative,
        InvoiceStatus::Sent => BadgeColor::Brand,
        InvoiceStatus::Paid => BadgeColor::Success,
        InvoiceStatus::Overdue => BadgeColor::Danger,
        InvoiceStatus::Cancelled => BadgeColor::Subtle,
    }
}

#[component]
pub fn InvoicesList() -> impl IntoView {
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_invoices().await {
                Ok(resp) => {
                    log::info!("Invoices loaded: {} of {}", resp.items.len(), resp.total_count);
                    state.update(|s| {
                        s.records = resp.items;
                        s.sort = resp.sort;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::error!("{}", e);
                    set_error.set(Some(format!("Impossible de charger les factures : {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let visible = Memo::new(move |_| state.with(|s| s.visible()));
    let visible_total = Memo::new(move |_| visible.with(|v| total_ttc(v)));
    let sort = Signal::derive(move || state.with(|s| s.sort.clone()));
    let on_sort = Callback::new(move |column: String| {
        state.update(|s| s.sort = s.sort.toggle(&column));
    });
    let search = Signal::derive(move || state.with(|s| s.search_query.clone()));
    let on_search = Callback::new(move |query: String| {
        state.update(|s| s.search_query = query);
    });

    // "" = все статусы
    let status_value = RwSignal::new(String::new());
    Effect::new(move |_| {
        let status = InvoiceStatus::from_code(&status_value.get());
        state.update(|s| s.status_filter = status);
    });

    view! {
        <div class="page">
            <PageHeader title="Factures" count=Signal::derive(move || visible.with(|v| v.len()))>
                <SearchInput value=search on_change=on_search placeholder="Numéro, client, statut..." />
                <Select value=status_value size=SelectSize::Small>
                    <option value="">"Tous les statuts"</option>
                    {InvoiceStatus::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.code()>{s.label()}</option> })
                        .collect_view()}
                </Select>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_data()
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    " Actualiser"
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Numéro" column=columns::NUMBER sort=sort on_sort=on_sort min_width=120.0 />
                            <SortableHeaderCell label="Client" column=columns::CLIENT_NAME sort=sort on_sort=on_sort min_width=200.0 />
                            <SortableHeaderCell label="Émise le" column=columns::ISSUE_DATE sort=sort on_sort=on_sort />
                            <SortableHeaderCell label="Échéance" column=columns::DUE_DATE sort=sort on_sort=on_sort />
                            <SortableHeaderCell label="Total HT" column=columns::TOTAL_HT sort=sort on_sort=on_sort align="right" />
                            <SortableHeaderCell label="Total TTC" column=columns::TOTAL_TTC sort=sort on_sort=on_sort align="right" />
                            <SortableHeaderCell label="Statut" column=columns::STATUS sort=sort on_sort=on_sort />
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        <For
                            each=move || visible.get()
                            key=|i| i.id
                            children=move |invoice| {
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <code>{invoice.number.clone()}</code>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{invoice.client_name.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date(&invoice.issue_date)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date_opt(&invoice.due_date)}</TableCellLayout>
                                        </TableCell>
                                        <TableCellMoney value=invoice.total_ht />
                                        <TableCellMoney value=invoice.total_ttc />
                                        <TableCell>
                                            <Badge appearance=BadgeAppearance::Tint color=status_badge_color(invoice.status)>
                                                {invoice.status.label()}
                                            </Badge>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>

            <div class="table-footer">
                "Total TTC : "
                <strong>{move || format!("{} €", format_money(visible_total.get()))}</strong>
            </div>
        </div>
    }
}
