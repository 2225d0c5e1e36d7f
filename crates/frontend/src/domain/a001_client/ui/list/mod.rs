mod state;

use contracts::domain::a001_client::aggregate::columns;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_client::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use state::create_state;

#[component]
pub fn ClientsList() -> impl IntoView {
    let state = create_state();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_clients().await {
                Ok(resp) => {
                    log::info!("Clients loaded: {}", resp.items.len());
                    state.update(|s| {
                        s.records = resp.items;
                        s.sort = resp.sort;
                        s.is_loaded = true;
                    });
                }
                Err(e) => {
                    log::error!("{}", e);
                    set_error.set(Some(format!("Impossible de charger les clients : {}", e)));
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

    view! {
        <div class="page">
            <PageHeader title="Clients" count=Signal::derive(move || visible.with(|v| v.len()))>
                <SearchInput value=search on_change=on_search placeholder="Code, nom, ville, e-mail..." />
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load_data()
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Chargement..." } else { " Actualiser" }}
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Code" column=columns::CODE sort=sort on_sort=on_sort min_width=90.0 />
                            <SortableHeaderCell label="Nom" column=columns::NAME sort=sort on_sort=on_sort min_width=200.0 />
                            <SortableHeaderCell label="Ville" column=columns::CITY sort=sort on_sort=on_sort />
                            <SortableHeaderCell label="E-mail" column=columns::EMAIL sort=sort on_sort=on_sort min_width=180.0 />
                            <SortableHeaderCell label="Téléphone" column=columns::PHONE sort=sort on_sort=on_sort min_width=140.0 />
                            <SortableHeaderCell label="Client depuis" column=columns::CREATED_AT sort=sort on_sort=on_sort />
                            <SortableHeaderCell label="Encours" column=columns::BALANCE sort=sort on_sort=on_sort align="right" />
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        <For
                            each=move || visible.get()
                            key=|c| c.id
                            children=move |client| {
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{client.code.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <span style="font-weight: 500;">{client.name.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{client.city.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{client.email.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{client.phone.clone().unwrap_or_else(|| "—".to_string())}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date(&client.created_at)}</TableCellLayout>
                                        </TableCell>
                                        <TableCellMoney value=client.balance highlight_debt=true />
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
