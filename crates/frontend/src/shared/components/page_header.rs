use leptos::prelude::*;

/// Заголовок страницы списка: название, количество записей и кнопки действий
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    /// Количество записей после фильтрации
    #[prop(into)]
    count: Signal<usize>,

    /// Кнопки справа (пустой фрагмент, если не нужны)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                <span class="page-header__count">{move || count.get().to_string()}</span>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
