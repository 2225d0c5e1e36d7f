mod state;

use contracts::domain::a002_product::aggregate::columns;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_product::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{
    format_number_int, format_rate, SortableHeaderCell, TableCellMoney,
};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use state::create_state;

#[component]
pub fn ProductsList() -> impl IntoView {
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(resp) => {
                    log::info!("Products loaded: {}", resp.items.len());
                    state.update(|s| {
                        s.records = resp.items;
                        s.sort = resp.sort;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::error!("{}", e);
                    set_error.set(Some(format!("Impossible de charger le catalogue : {}", e)));
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
    let sort = Signal::derive(move || state.with(|s| s.sort.clone()));
    let on_sort = Callback::new(move |column: String| {
        state.update(|s| s.sort = s.sort.toggle(&column));
    });
    let search = Signal::derive(move || state.with(|s| s.search_query.clone()));
    let on_search = Callback::new(move |query: String| {
        state.update(|s| s.search_query = query);
    });

    let only_active = RwSignal::new(false);
    Effect::new(move |_| {
        let value = only_active.get();
        state.update(|s| s.only_active = value);
    });

    view! {
        <div class="page">
            <PageHeader title="Catalogue" count=Signal::derive(move || visible.with(|v| v.len()))>
                <SearchInput value=search on_change=on_search placeholder="Référence, désignation..." />
                <Checkbox checked=only_active label="En vente uniquement" />
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
                            <SortableHeaderCell label="Référence" column=columns::SKU sort=sort on_sort=on_sort />
                            <SortableHeaderCell label="Désignation" column=columns::NAME sort=sort on_sort=on_sort min_width=240.0 />
                            <SortableHeaderCell label="Prix HT" column=columns::UNIT_PRICE sort=sort on_sort=on_sort align="right" />
                            <SortableHeaderCell label="TVA" column=columns::VAT_RATE sort=sort on_sort=on_sort min_width=70.0 align="right" />
                            <SortableHeaderCell label="Stock" column=columns::STOCK_QTY sort=sort on_sort=on_sort min_width=80.0 align="right" />
                            <SortableHeaderCell label="En vente" column=columns::IS_ACTIVE sort=sort on_sort=on_sort min_width=80.0 />
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        <For
                            each=move || visible.get()
                            key=|p| p.id
                            children=move |product| {
                                let stock_style = if product.stock_qty <= 0 {
                                    "color: var(--color-error-700);"
                                } else {
                                    ""
                                };
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <code>{product.sku.clone()}</code>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{product.name.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCellMoney value=product.unit_price />
                                        <TableCell class="text-right">{format_rate(product.vat_rate)}</TableCell>
                                        <TableCell class="text-right">
                                            <span style=stock_style>{format_number_int(product.stock_qty as f64)}</span>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {if product.is_active { "Oui" } else { "Non" }}
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}
