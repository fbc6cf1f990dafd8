use super::state::CatalogState;
use contracts::domain::a001_product::CatalogFilter;
use leptos::prelude::*;

/// Filter buttons, one per [`CatalogFilter`], tagged with `data-filter`.
#[component]
pub fn FilterBar(state: RwSignal<CatalogState>) -> impl IntoView {
    view! {
        <div class="filters">
            {CatalogFilter::ALL
                .into_iter()
                .map(|filter| {
                    let is_active = move || state.with(|s| s.filter == filter);
                    view! {
                        <button
                            type="button"
                            class="button button-outline"
                            class:active=is_active
                            data-filter=filter.as_str()
                            on:click=move |ev| {
                                ev.prevent_default();
                                state.update(|s| s.select_filter(filter));
                            }
                        >
                            {filter.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
