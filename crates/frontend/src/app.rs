use crate::domain::a001_product::ui::catalog::CatalogPage;
use crate::domain::a001_product::ui::details::ProductPage;
use crate::layout::chrome;
use crate::shared::config::SiteConfig;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Page variant, from `<body data-page="...">`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Catalog,
    Product,
    Other,
}

impl PageKind {
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker {
            Some("catalog") => PageKind::Catalog,
            Some("product") => PageKind::Product,
            _ => PageKind::Other,
        }
    }
}

/// Start the chrome controller and mount the view matching the page marker.
pub fn run(config: SiteConfig) {
    chrome::init(&config);

    let marker = document().body().and_then(|b| b.get_attribute("data-page"));
    match PageKind::from_marker(marker.as_deref()) {
        PageKind::Catalog => {
            let Some(root) = mount_root(&config.catalog_root) else {
                return;
            };
            leptos::mount::mount_to(root, move || {
                provide_context(config);
                view! { <CatalogPage /> }
            })
            .forget();
        }
        PageKind::Product => {
            let Some(root) = mount_root(&config.product_root) else {
                return;
            };
            leptos::mount::mount_to(root, move || {
                provide_context(config);
                view! { <ProductPage /> }
            })
            .forget();
        }
        PageKind::Other => log::debug!("No product view on this page"),
    }
}

/// Mount element with `id`.
fn mount_root(id: &str) -> Option<HtmlElement> {
    let root = document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    require_mount(root, id)
}

/// A missing mount element skips the view; nothing falls back to `<body>`.
fn require_mount<T>(root: Option<T>, id: &str) -> Option<T> {
    if root.is_none() {
        log::warn!("#{} not found, skipping page view", id);
    }
    root
}
