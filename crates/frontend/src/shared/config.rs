//! Site configuration
//!
//! Fixed values of the static site. Provided through Leptos context at
//! mount time; components read it with [`use_site_config`].

use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Suffix of the document title on the detail page
    pub site_name: String,
    /// Catalog payload, relative to the page
    pub products_url: String,
    /// Detail page linked from catalog cards
    pub detail_page: String,
    /// Mount element of the catalog page
    pub catalog_root: String,
    /// Mount element of the detail page
    pub product_root: String,
    /// Id of the catalog search input
    pub search_input_id: String,
    /// Id of the page's inquiry form, filled with the product on match
    pub inquiry_form_id: String,
    pub menu_toggle_selector: String,
    pub menu_selector: String,
    pub header_selector: String,
    /// Vertical scroll (px) past which the header gets the `scrolled` class
    pub scroll_threshold: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "BEYAZ".to_string(),
            products_url: "products.json".to_string(),
            detail_page: "product.html".to_string(),
            catalog_root: "catalog-root".to_string(),
            product_root: "product-root".to_string(),
            search_input_id: "catalog-search".to_string(),
            inquiry_form_id: "inquiry-form".to_string(),
            menu_toggle_selector: ".menu-toggle".to_string(),
            menu_selector: ".nav-menu".to_string(),
            header_selector: ".site-header".to_string(),
            scroll_threshold: 50.0,
        }
    }
}

/// Config from context, or the defaults when none was provided.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = SiteConfig::default();
        assert_eq!(config.products_url, "products.json");
        assert_eq!(config.detail_page, "product.html");
        assert_eq!(config.scroll_threshold, 50.0);
    }
}
