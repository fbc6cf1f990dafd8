mod view;
mod view_model;

use crate::shared::config::use_site_config;
use crate::shared::query::current_product_id;
use leptos::prelude::*;
pub use view::ProductDetails;
pub use view_model::ProductDetailsViewModel;

/// Detail page for the product named by `?id=` in the page URL.
#[component]
#[allow(non_snake_case)]
pub fn ProductPage() -> impl IntoView {
    let config = use_site_config();
    let vm = ProductDetailsViewModel::new();
    vm.load_if_needed(current_product_id(), config);

    view! {
        <section class="product-page">
            {move || {
                vm.detail
                    .get()
                    .map(|detail| view! { <ProductDetails vm=vm detail=detail /> })
            }}
        </section>
    }
}
