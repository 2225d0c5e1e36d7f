use crate::domain::a001_client::ui::list::ClientsList;
use crate::domain::a002_product::ui::list::ProductsList;
use crate::domain::a003_invoice::ui::list::InvoicesList;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Разделы приложения
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Clients,
    Products,
    Invoices,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Clients, Page::Products, Page::Invoices];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Clients => "Clients",
            Page::Products => "Catalogue",
            Page::Invoices => "Factures",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            Page::Clients => "customers",
            Page::Products => "products",
            Page::Invoices => "invoices",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (active, set_active) = signal(Page::Invoices);

    view! {
        <div class="app-shell">
            <nav class="app-sidebar">
                {Page::ALL
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class=move || {
                                    if active.get() == page {
                                        "app-sidebar__item app-sidebar__item--active"
                                    } else {
                                        "app-sidebar__item"
                                    }
                                }
                                on:click=move |_| set_active.set(page)
                            >
                                {icon(page.icon_name())}
                                <span>{page.title()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            // Каждая страница держит своё состояние, при переключении оно пересоздаётся
            <main class="app-content">
                {move || match active.get() {
                    Page::Clients => view! { <ClientsList /> }.into_any(),
                    Page::Products => view! { <ProductsList /> }.into_any(),
                    Page::Invoices => view! { <InvoicesList /> }.into_any(),
                }}
            </main>
        </div>
    }
}
