use crate::domain::a001_product::api::fetch_products;
use crate::shared::config::SiteConfig;
use contracts::domain::a001_product::{find_by_id, InquiryContext, Product, ProductDetail};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

/// ViewModel for the product detail page
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    /// `None` until a matching product is loaded
    pub detail: RwSignal<Option<ProductDetail>>,
    /// Current main image source; thumbnails overwrite it
    pub main_image: RwSignal<String>,
}

impl ProductDetailsViewModel {
    pub fn new() -> Self {
        Self {
            detail: RwSignal::new(None),
            main_image: RwSignal::new(String::new()),
        }
    }

    /// Load the product with `id`. Without an id nothing is fetched and the
    /// page keeps its empty markup; an unknown id is a silent no-op.
    pub fn load_if_needed(&self, id: Option<String>, config: SiteConfig) {
        let Some(id) = id else {
            log::debug!("No product id in query string");
            return;
        };
        let this = *self;

        wasm_bindgen_futures::spawn_local(async move {
            let products = fetch_products(&config.products_url).await;
            let Some(detail) = detail_for(&products, &id) else {
                log::debug!("Product {} not found in catalog", id);
                return;
            };

            document().set_title(&page_title(&detail.title, &config.site_name));
            populate_inquiry_form(&config.inquiry_form_id, &detail.inquiry);
            this.show(detail);
        });
    }

    /// Put a loaded product on the page.
    pub fn show(&self, detail: ProductDetail) {
        self.main_image.set(detail.main_image.clone());
        self.detail.set(Some(detail));
    }

    /// Thumbnail click: swap the main image, nothing else.
    pub fn show_thumbnail(&self, index: usize) {
        let src = self.detail.with_untracked(|d| {
            d.as_ref()
                .and_then(|d| d.gallery.select(index))
                .map(str::to_string)
        });
        if let Some(src) = src {
            self.main_image.set(src);
        }
    }
}

impl Default for ProductDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn detail_for(products: &[Product], id: &str) -> Option<ProductDetail> {
    find_by_id(products, id).map(ProductDetail::from_product)
}

pub fn page_title(product_name: &str, site_name: &str) -> String {
    format!("{} | {}", product_name, site_name)
}

/// Fill the hidden product inputs of the page's inquiry form, if the page
/// has one. Each missing input is skipped.
fn populate_inquiry_form(form_id: &str, context: &InquiryContext) {
    let Some(form) = document().get_element_by_id(form_id) else {
        return;
    };

    for (name, value) in context.hidden_fields() {
        let input = form
            .query_selector(&format!("input[name=\"{}\"]", name))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
        match input {
            Some(input) => input.set_value(value),
            None => log::warn!("#{} has no input named {}", form_id, name),
        }
    }
}
