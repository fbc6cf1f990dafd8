use contracts::domain::a001_product::{duplicate_ids, parse_catalog, Product};
use gloo_net::http::Request;

/// Fetch the catalog. Never fails: any error is logged and yields an
/// empty collection.
pub async fn fetch_products(url: &str) -> Vec<Product> {
    products_or_empty(try_fetch_products(url).await)
}

/// Single GET of the catalog payload. No retry, no timeout.
pub async fn try_fetch_products(url: &str) -> Result<Vec<Product>, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch products: {}", response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    parse_catalog(&body).map_err(|e| format!("Failed to parse response: {:#}", e))
}

/// Log-and-recover step of [`fetch_products`].
pub fn products_or_empty(result: Result<Vec<Product>, String>) -> Vec<Product> {
    match result {
        Ok(products) => {
            let duplicates = duplicate_ids(&products);
            if !duplicates.is_empty() {
                log::warn!("Duplicate product ids in catalog: {}", duplicates.join(", "));
            }
            log::debug!("Loaded {} products", products.len());
            products
        }
        Err(e) => {
            log::error!("Error loading products: {}", e);
            Vec::new()
        }
    }
}
