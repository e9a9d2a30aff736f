use serde::Deserialize;

use brecho_catalog::ProductFilter;

// -------------------------
// Request DTOs
// -------------------------

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
}

/// `GET /products` query string.
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

impl ProductQuery {
    /// Blank parameters count as absent.
    pub fn into_filter(self) -> ProductFilter {
        fn present(v: Option<String>) -> Option<String> {
            v.filter(|s| !s.trim().is_empty())
        }

        ProductFilter {
            category: present(self.category),
            search: present(self.search),
        }
    }
}
