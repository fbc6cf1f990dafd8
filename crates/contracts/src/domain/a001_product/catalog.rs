use super::aggregate::Product;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Filter
// ============================================================================

/// Category/attribute predicate of the catalog page. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogFilter {
    #[default]
    All,
    Men,
    Women,
    New,
    #[serde(rename = "bestseller")]
    BestSeller,
}

impl CatalogFilter {
    /// Filter controls in display order.
    pub const ALL: [CatalogFilter; 5] = [
        CatalogFilter::All,
        CatalogFilter::Men,
        CatalogFilter::Women,
        CatalogFilter::New,
        CatalogFilter::BestSeller,
    ];

    /// Value of the `data-filter` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogFilter::All => "all",
            CatalogFilter::Men => "men",
            CatalogFilter::Women => "women",
            CatalogFilter::New => "new",
            CatalogFilter::BestSeller => "bestseller",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CatalogFilter::All => "All",
            CatalogFilter::Men => "Men",
            CatalogFilter::Women => "Women",
            CatalogFilter::New => "New",
            CatalogFilter::BestSeller => "Best Sellers",
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CatalogFilter::All => true,
            CatalogFilter::Men | CatalogFilter::Women => product.category == self.as_str(),
            CatalogFilter::New => product.is_new,
            CatalogFilter::BestSeller => product.best_seller,
        }
    }
}

impl fmt::Display for CatalogFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CatalogFilter::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("Unknown catalog filter: {}", s))
    }
}

// ============================================================================
// Query
// ============================================================================

/// Current catalog selection: active filter AND name search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub filter: CatalogFilter,
    pub search: String,
}

impl CatalogQuery {
    pub fn new(filter: CatalogFilter, search: impl Into<String>) -> Self {
        Self {
            filter,
            search: search.into(),
        }
    }

    /// Case-insensitive substring match on the product name, on the raw
    /// search text. Empty search text matches everything.
    pub fn matches_search(&self, product: &Product) -> bool {
        if self.search.is_empty() {
            return true;
        }
        product
            .name
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.filter.matches(product) && self.matches_search(product)
    }

    /// Surviving products in source order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

// ============================================================================
// Card
// ============================================================================

/// Display description of one grid card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image: String,
    pub is_new: bool,
    pub best_seller: bool,
    /// Detail page link carrying the id as `?id=`
    pub href: String,
}

impl ProductCard {
    pub fn from_product(product: &Product, detail_page: &str) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price.clone(),
            image: product.image.clone(),
            is_new: product.is_new,
            best_seller: product.best_seller,
            href: detail_href(detail_page, &product.id),
        }
    }
}

/// `product.html?id=<id>` with the id percent-encoded.
pub fn detail_href(detail_page: &str, id: &str) -> String {
    format!("{}?id={}", detail_page, urlencoding::encode(id))
}

/// Cards for the products surviving `query`, in source order.
pub fn visible_cards(products: &[Product], query: &CatalogQuery, detail_page: &str) -> Vec<ProductCard> {
    query
        .apply(products)
        .into_iter()
        .map(|p| ProductCard::from_product(p, detail_page))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, category: &str, is_new: bool, best_seller: bool) -> Product {
        let mut p = Product::new(id, name);
        p.category = category.to_string();
        p.is_new = is_new;
        p.best_seller = best_seller;
        p
    }

    fn fixture() -> Vec<Product> {
        vec![
            product("1", "Linen Shirt", "men", true, false),
            product("2", "Wrap Dress", "women", false, true),
            product("3", "Oxford Shirt", "men", false, true),
            product("4", "Silk Scarf", "accessories", true, true),
            product("5", "Pleated Skirt", "women", true, false),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_filter_subsets() {
        let products = fixture();
        let cases = [
            (CatalogFilter::All, vec!["1", "2", "3", "4", "5"]),
            (CatalogFilter::Men, vec!["1", "3"]),
            (CatalogFilter::Women, vec!["2", "5"]),
            (CatalogFilter::New, vec!["1", "4", "5"]),
            (CatalogFilter::BestSeller, vec!["2", "3", "4"]),
        ];

        for (filter, expected) in cases {
            let query = CatalogQuery::new(filter, "");
            assert_eq!(ids(&query.apply(&products)), expected, "filter {}", filter);
        }
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        let mut products = fixture();
        products.reverse();
        let query = CatalogQuery::new(CatalogFilter::Men, "");
        assert_eq!(ids(&query.apply(&products)), vec!["3", "1"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let products = fixture();
        let query = CatalogQuery::new(CatalogFilter::All, "SHIRT");
        assert_eq!(ids(&query.apply(&products)), vec!["1", "3"]);

        let query = CatalogQuery::new(CatalogFilter::All, "ress");
        assert_eq!(ids(&query.apply(&products)), vec!["2"]);

        let query = CatalogQuery::new(CatalogFilter::All, "");
        assert_eq!(query.apply(&products).len(), 5);
    }

    #[test]
    fn test_search_text_is_not_trimmed() {
        let mut products = fixture();
        products.push(product("6", "Tea", "home", false, false));

        let query = CatalogQuery::new(CatalogFilter::All, "a ");
        assert_eq!(ids(&query.apply(&products)), Vec::<String>::new());

        let query = CatalogQuery::new(CatalogFilter::All, "k s");
        assert_eq!(ids(&query.apply(&products)), vec!["4"]);

        let query = CatalogQuery::new(CatalogFilter::All, " ");
        assert_eq!(ids(&query.apply(&products)), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_filter_and_search_intersect() {
        let products = fixture();
        for filter in CatalogFilter::ALL {
            for search in ["shirt", "s", "dress", "zzz", ""] {
                let query = CatalogQuery::new(filter, search);
                let expected: Vec<String> = products
                    .iter()
                    .filter(|p| filter.matches(p))
                    .filter(|p| CatalogQuery::new(CatalogFilter::All, search).matches(p))
                    .map(|p| p.id.clone())
                    .collect();
                assert_eq!(ids(&query.apply(&products)), expected);
            }
        }

        let query = CatalogQuery::new(CatalogFilter::BestSeller, "shirt");
        assert_eq!(ids(&query.apply(&products)), vec!["3"]);
    }

    #[test]
    fn test_empty_result() {
        let products = fixture();
        let query = CatalogQuery::new(CatalogFilter::Women, "shirt");
        assert!(visible_cards(&products, &query, "product.html").is_empty());
        assert!(visible_cards(&[], &CatalogQuery::default(), "product.html").is_empty());
    }

    #[test]
    fn test_filter_from_str() {
        for filter in CatalogFilter::ALL {
            assert_eq!(filter.as_str().parse::<CatalogFilter>(), Ok(filter));
        }
        assert!("kids".parse::<CatalogFilter>().is_err());
        assert_eq!(CatalogFilter::default(), CatalogFilter::All);
    }

    #[test]
    fn test_card_from_product() {
        let mut p = product("4", "Silk Scarf", "accessories", true, true);
        p.price = "$45".to_string();
        p.image = "img/scarf.jpg".to_string();

        let card = ProductCard::from_product(&p, "product.html");
        assert_eq!(card.href, "product.html?id=4");
        assert_eq!(card.price, "$45");
        assert_eq!(card.image, "img/scarf.jpg");
        assert!(card.is_new && card.best_seller);
    }

    #[test]
    fn test_detail_href_encodes_id() {
        assert_eq!(detail_href("product.html", "a b&c"), "product.html?id=a%20b%26c");
    }
}
