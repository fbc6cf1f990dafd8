use crate::shared::components::ui::Badge;
use contracts::domain::a001_product::ProductCard;
use leptos::prelude::*;

#[component]
pub fn ProductCardView(card: ProductCard) -> impl IntoView {
    let ProductCard {
        id,
        name,
        price,
        image,
        is_new,
        best_seller,
        href,
    } = card;
    let alt = name.clone();

    view! {
        <div class="product-card" data-id=id>
            <img src=image alt=alt loading="lazy" />
            <div class="product-badges">
                {is_new.then(|| view! { <Badge variant="new">"New"</Badge> })}
                {best_seller.then(|| view! { <Badge variant="bestseller">"Best Seller"</Badge> })}
            </div>
            <div class="product-info">
                <h4>{name}</h4>
                <div class="price">{price}</div>
                <div class="cta">
                    <a class="button button-outline" href=href>"Details"</a>
                </div>
            </div>
        </div>
    }
}
