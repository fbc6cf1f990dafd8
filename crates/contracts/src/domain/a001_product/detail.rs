use super::aggregate::Product;

/// Shown in a text slot whose field is absent or blank.
pub const PLACEHOLDER: &str = "—";

/// One labelled text slot of the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    /// CSS class of the slot element, e.g. `product-description`
    pub slot: &'static str,
    pub label: &'static str,
    pub value: String,
}

/// Hidden inputs of the inquiry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryContext {
    pub product_id: String,
    pub product_name: String,
}

impl InquiryContext {
    /// `(input name, value)` pairs for the form's hidden inputs.
    pub fn hidden_fields(&self) -> [(&'static str, &str); 2] {
        [
            ("product_id", self.product_id.as_str()),
            ("product_name", self.product_name.as_str()),
        ]
    }
}

/// Thumbnail strip. Clicking a thumbnail only swaps the main image;
/// nothing remembers which one was clicked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Gallery {
    pub thumbnails: Vec<String>,
}

impl Gallery {
    /// Strip for `images`; empty unless there is more than one image.
    pub fn new(images: &[String]) -> Self {
        let thumbnails = if images.len() > 1 {
            images.to_vec()
        } else {
            Vec::new()
        };
        Self { thumbnails }
    }

    pub fn is_empty(&self) -> bool {
        self.thumbnails.is_empty()
    }

    /// New main image source after clicking thumbnail `index`.
    pub fn select(&self, index: usize) -> Option<&str> {
        self.thumbnails.get(index).map(String::as_str)
    }
}

/// Everything the detail page shows for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetail {
    pub title: String,
    pub price: String,
    pub main_image: String,
    pub image_alt: String,
    pub fields: Vec<DetailField>,
    pub gallery: Gallery,
    pub inquiry: InquiryContext,
}

impl ProductDetail {
    pub fn from_product(product: &Product) -> Self {
        let fields = vec![
            field("product-description", "Description", &product.description),
            field("product-materials", "Materials", &product.materials),
            field("product-sizes", "Sizes", &product.sizes),
            field("product-colorways", "Colorways", &product.colorways),
            field("product-care", "Care", &product.care),
            field("product-lead-time", "Lead time", &product.lead_time),
            field("product-moq", "MOQ", &product.moq),
        ];

        Self {
            title: product.name.clone(),
            price: or_placeholder(Some(&product.price)),
            main_image: product.main_image().to_string(),
            image_alt: product.name.clone(),
            fields,
            gallery: Gallery::new(&product.images),
            inquiry: InquiryContext {
                product_id: product.id.clone(),
                product_name: product.name.clone(),
            },
        }
    }

    pub fn field(&self, slot: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.slot == slot)
            .map(|f| f.value.as_str())
    }
}

fn field(slot: &'static str, label: &'static str, value: &Option<String>) -> DetailField {
    DetailField {
        slot,
        label,
        value: or_placeholder(value.as_ref()),
    }
}

fn or_placeholder(value: Option<&String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.clone(),
        _ => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shirt() -> Product {
        let mut p = Product::new("42", "Linen Shirt");
        p.price = "$120".to_string();
        p.image = "img/linen.jpg".to_string();
        p.description = Some("Relaxed fit".to_string());
        p.sizes = Some("S-XL".to_string());
        p.moq = Some("   ".to_string());
        p
    }

    #[test]
    fn test_detail_title_and_inquiry() {
        let detail = ProductDetail::from_product(&shirt());
        assert_eq!(detail.title, "Linen Shirt");
        assert_eq!(detail.image_alt, "Linen Shirt");
        assert_eq!(detail.main_image, "img/linen.jpg");
        assert_eq!(
            detail.inquiry,
            InquiryContext {
                product_id: "42".to_string(),
                product_name: "Linen Shirt".to_string(),
            }
        );
    }

    #[test]
    fn test_inquiry_hidden_fields() {
        let detail = ProductDetail::from_product(&shirt());
        assert_eq!(
            detail.inquiry.hidden_fields(),
            [("product_id", "42"), ("product_name", "Linen Shirt")]
        );
    }

    #[test]
    fn test_missing_fields_render_placeholder() {
        let detail = ProductDetail::from_product(&shirt());
        assert_eq!(detail.field("product-description"), Some("Relaxed fit"));
        assert_eq!(detail.field("product-sizes"), Some("S-XL"));
        assert_eq!(detail.field("product-materials"), Some(PLACEHOLDER));
        assert_eq!(detail.field("product-lead-time"), Some(PLACEHOLDER));
        assert_eq!(detail.field("product-moq"), Some(PLACEHOLDER));
        assert_eq!(detail.fields.len(), 7);

        let bare = ProductDetail::from_product(&Product::new("1", "Bare"));
        assert!(bare.fields.iter().all(|f| f.value == PLACEHOLDER));
        assert_eq!(bare.price, PLACEHOLDER);
    }

    #[test]
    fn test_gallery_requires_more_than_one_image() {
        assert!(Gallery::new(&[]).is_empty());
        assert!(Gallery::new(&["img/a.jpg".to_string()]).is_empty());
        assert_eq!(Gallery::new(&["a".to_string(), "b".to_string()]).thumbnails.len(), 2);
    }

    #[test]
    fn test_thumbnail_click_swaps_main_image() {
        let mut p = shirt();
        p.images = vec!["img/linen.jpg".to_string(), "img/linen-back.jpg".to_string()];

        let detail = ProductDetail::from_product(&p);
        assert_eq!(detail.gallery.thumbnails.len(), 2);
        assert_eq!(detail.gallery.select(1), Some("img/linen-back.jpg"));
        assert_eq!(detail.gallery.select(0), Some("img/linen.jpg"));
        assert_eq!(detail.gallery.select(2), None);
    }
}
