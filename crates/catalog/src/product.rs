use serde::{Deserialize, Serialize};

use brecho_core::{Entity, ProductId};

use crate::price::Price;

/// A second-hand clothing item in the catalog.
///
/// Immutable once stored (there is no update path).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    /// Quality label, e.g. "Excelente", "Muito Boa", "Boa".
    pub condition: String,
    pub size: String,
    pub category: String,
    pub image_url: String,
    pub in_stock: bool,
}

impl Product {
    pub fn from_new(id: ProductId, new: NewProduct) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            price: new.price,
            condition: new.condition,
            size: new.size,
            category: new.category,
            image_url: new.image_url,
            in_stock: new.in_stock,
        }
    }

    /// Case-insensitive exact match on category.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Case-insensitive substring match on name, description or category.
    ///
    /// An empty query matches every product.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self.category.to_lowercase().contains(&query)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn default_in_stock() -> bool {
    true
}

/// Product payload without an id (input to `create_product`).
///
/// Every field except `inStock` must be present; empty strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub condition: String,
    pub size: String,
    pub category: String,
    pub image_url: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

/// Optional catalog filters. When both are set a product must satisfy both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub search: Option<String>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|c| product.in_category(c));
        let search_ok = self
            .search
            .as_deref()
            .is_none_or(|q| product.matches_search(q));
        category_ok && search_ok
    }
}
