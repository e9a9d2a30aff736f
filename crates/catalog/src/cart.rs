use serde::{Deserialize, Serialize};

use brecho_core::{CartItemId, Entity, ProductId, SessionId};

use crate::price::Price;
use crate::product::Product;

/// One product line in a session's cart.
///
/// At most one line exists per `(product_id, session_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub session_id: SessionId,
}

impl Entity for CartItem {
    type Id = CartItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Add-to-cart request as seen by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub session_id: SessionId,
}

/// A cart line joined with the product it references (read-time only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItemWithProduct {
    #[serde(flatten)]
    pub item: CartItem,
    pub product: Product,
}

impl CartItemWithProduct {
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.item.quantity)
    }
}

/// Badge count and running total shown by the storefront.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    /// Sum of quantities across all lines.
    pub item_count: u64,
    pub total: Price,
}

impl CartSummary {
    pub fn from_lines(lines: &[CartItemWithProduct]) -> Self {
        Self {
            item_count: lines.iter().map(|l| u64::from(l.item.quantity)).sum(),
            total: lines.iter().map(CartItemWithProduct::line_total).sum(),
        }
    }
}
