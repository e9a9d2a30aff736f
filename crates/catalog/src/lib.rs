//! Catalog + cart domain module.
//!
//! Products and session-scoped cart line items, held in memory behind a single
//! lock. No IO, no HTTP: the API crate calls into [`Storage`].

pub mod cart;
pub mod price;
pub mod product;
pub mod seed;
pub mod store;

pub use cart::{CartItem, CartItemWithProduct, CartSummary, NewCartItem};
pub use price::Price;
pub use product::{NewProduct, Product, ProductFilter};
pub use store::{CatalogCartStore, Storage};
