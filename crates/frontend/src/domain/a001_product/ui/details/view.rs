use super::view_model::ProductDetailsViewModel;
use contracts::domain::a001_product::ProductDetail;
use leptos::prelude::*;

#[component]
pub fn ProductDetails(
    vm: ProductDetailsViewModel,
    detail: ProductDetail,
) -> impl IntoView {
    let ProductDetail {
        title,
        price,
        image_alt,
        fields,
        gallery,
        ..
    } = detail;

    let thumbnails = gallery.thumbnails;

    view! {
        <div class="product-detail">
            <div class="product-gallery">
                <img class="product-image-main" src=move || vm.main_image.get() alt=image_alt />
                {(!thumbnails.is_empty()).then(|| view! {
                    <div class="product-thumbnails">
                        {thumbnails
                            .into_iter()
                            .enumerate()
                            .map(|(index, src)| view! {
                                <img
                                    class="product-thumbnail"
                                    src=src
                                    style="width: 60px; height: 60px; object-fit: cover; cursor: pointer; border: 1px solid #eee;"
                                    on:click=move |_| vm.show_thumbnail(index)
                                />
                            })
                            .collect_view()}
                    </div>
                })}
            </div>

            <div class="product-summary">
                <h1 class="product-title">{title}</h1>
                <div class="price">{price}</div>
                <dl class="product-fields">
                    {fields
                        .into_iter()
                        .map(|f| view! {
                            <dt>{f.label}</dt>
                            <dd class=f.slot>{f.value}</dd>
                        })
                        .collect_view()}
                </dl>
            </div>
        </div>
    }
}
