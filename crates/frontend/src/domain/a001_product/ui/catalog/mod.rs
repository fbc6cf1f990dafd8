pub mod card;
pub mod filter_bar;
pub mod state;

use crate::domain::a001_product::api::fetch_products;
use crate::shared::components::SearchInput;
use crate::shared::config::use_site_config;
use card::ProductCardView;
use contracts::domain::a001_product::{visible_cards, Product};
use filter_bar::FilterBar;
use leptos::prelude::*;
use state::create_state;

/// Catalog page: filter bar, search input and the product grid.
#[component]
#[allow(non_snake_case)]
pub fn CatalogPage() -> impl IntoView {
    let config = use_site_config();
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let state = create_state();

    let products_url = config.products_url.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let loaded = fetch_products(&products_url).await;
        set_products.set(loaded);
        state.update(|s| s.is_loaded = true);
    });

    // Пустой результат отображается пустой сеткой
    let detail_page = config.detail_page.clone();
    let cards = move || {
        let query = state.with(|s| s.query());
        products.with(|items| visible_cards(items, &query, &detail_page))
    };

    let search = Signal::derive(move || state.with(|s| s.search.clone()));
    let on_search = Callback::new(move |value: String| state.update(|s| s.search = value));

    view! {
        <section class="catalog">
            <div class="catalog__controls">
                <FilterBar state=state />
                <SearchInput id=config.search_input_id.clone() value=search on_change=on_search />
            </div>
            <div class="product-grid" class:loading=move || !state.with(|s| s.is_loaded)>
                {move || {
                    cards()
                        .into_iter()
                        .map(|card| view! { <ProductCardView card=card /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
