use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use tracing::{debug, info};

use brecho_core::{CartItemId, DomainError, DomainResult, ProductId, SessionId};

use crate::cart::{CartItem, CartItemWithProduct, CartSummary, NewCartItem};
use crate::product::{NewProduct, Product, ProductFilter};
use crate::seed;

/// Catalog + cart storage contract consumed by the HTTP layer.
///
/// Every call runs to completion; implementations must serialize mutations so
/// the merge in `add_to_cart` and the read-modify-write in
/// `update_cart_item_quantity` cannot interleave.
pub trait Storage: Send + Sync {
    fn list_products(&self) -> Vec<Product>;
    fn list_products_by_category(&self, category: &str) -> Vec<Product>;
    fn get_product(&self, id: &ProductId) -> Option<Product>;
    fn search_products(&self, query: &str) -> Vec<Product>;
    fn create_product(&self, product: NewProduct) -> Product;

    /// All lines of a session joined with their products.
    ///
    /// Fails with `DataIntegrity` if a line references a missing product.
    fn list_cart_items(&self, session: &SessionId) -> DomainResult<Vec<CartItemWithProduct>>;
    fn get_cart_item(&self, id: &CartItemId) -> Option<CartItem>;
    /// Merges into the existing `(product, session)` line when there is one.
    fn add_to_cart(&self, item: NewCartItem) -> CartItem;
    /// `quantity <= 0` deletes the line; both deletion and unknown ids yield `None`.
    fn update_cart_item_quantity(&self, id: &CartItemId, quantity: i64) -> Option<CartItem>;
    fn remove_from_cart(&self, id: &CartItemId) -> bool;
    fn clear_cart(&self, session: &SessionId) -> bool;

    /// Category and search applied together (AND) when both are present.
    fn query_products(&self, filter: &ProductFilter) -> Vec<Product> {
        match (&filter.category, &filter.search) {
            (None, None) => self.list_products(),
            (Some(category), None) => self.list_products_by_category(category),
            (None, Some(query)) => self.search_products(query),
            (Some(_), Some(_)) => self
                .list_products()
                .into_iter()
                .filter(|p| filter.matches(p))
                .collect(),
        }
    }

    /// Distinct category labels in first-seen order (compared case-insensitively).
    fn list_categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for product in self.list_products() {
            if !seen.iter().any(|c| product.in_category(c)) {
                seen.push(product.category);
            }
        }
        seen
    }

    fn cart_summary(&self, session: &SessionId) -> DomainResult<CartSummary> {
        let lines = self.list_cart_items(session)?;
        Ok(CartSummary::from_lines(&lines))
    }
}

impl<S> Storage for Arc<S>
where
    S: Storage + ?Sized,
{
    fn list_products(&self) -> Vec<Product> {
        (**self).list_products()
    }

    fn list_products_by_category(&self, category: &str) -> Vec<Product> {
        (**self).list_products_by_category(category)
    }

    fn get_product(&self, id: &ProductId) -> Option<Product> {
        (**self).get_product(id)
    }

    fn search_products(&self, query: &str) -> Vec<Product> {
        (**self).search_products(query)
    }

    fn create_product(&self, product: NewProduct) -> Product {
        (**self).create_product(product)
    }

    fn list_cart_items(&self, session: &SessionId) -> DomainResult<Vec<CartItemWithProduct>> {
        (**self).list_cart_items(session)
    }

    fn get_cart_item(&self, id: &CartItemId) -> Option<CartItem> {
        (**self).get_cart_item(id)
    }

    fn add_to_cart(&self, item: NewCartItem) -> CartItem {
        (**self).add_to_cart(item)
    }

    fn update_cart_item_quantity(&self, id: &CartItemId, quantity: i64) -> Option<CartItem> {
        (**self).update_cart_item_quantity(id, quantity)
    }

    fn remove_from_cart(&self, id: &CartItemId) -> bool {
        (**self).remove_from_cart(id)
    }

    fn clear_cart(&self, session: &SessionId) -> bool {
        (**self).clear_cart(session)
    }

    fn query_products(&self, filter: &ProductFilter) -> Vec<Product> {
        (**self).query_products(filter)
    }

    fn list_categories(&self) -> Vec<String> {
        (**self).list_categories()
    }

    fn cart_summary(&self, session: &SessionId) -> DomainResult<CartSummary> {
        (**self).cart_summary(session)
    }
}

#[derive(Debug, Default)]
struct Collections {
    products: IndexMap<ProductId, Product>,
    cart_items: IndexMap<CartItemId, CartItem>,
}

/// In-memory store: both collections behind one lock, insertion-ordered.
#[derive(Debug, Default)]
pub struct CatalogCartStore {
    inner: RwLock<Collections>,
}

impl CatalogCartStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the storefront catalog.
    pub fn seeded() -> Self {
        Self::with_products(seed::storefront_products())
    }

    pub fn with_products(products: impl IntoIterator<Item = NewProduct>) -> Self {
        let store = Self::new();
        for product in products {
            store.create_product(product);
        }
        info!(products = store.read().products.len(), "catalog loaded");
        store
    }

    // No code path panics while holding the lock mid-update, so a poisoned
    // guard still wraps consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Storage for CatalogCartStore {
    fn list_products(&self) -> Vec<Product> {
        self.read().products.values().cloned().collect()
    }

    fn list_products_by_category(&self, category: &str) -> Vec<Product> {
        self.read()
            .products
            .values()
            .filter(|p| p.in_category(category))
            .cloned()
            .collect()
    }

    fn get_product(&self, id: &ProductId) -> Option<Product> {
        self.read().products.get(id).cloned()
    }

    fn search_products(&self, query: &str) -> Vec<Product> {
        self.read()
            .products
            .values()
            .filter(|p| p.matches_search(query))
            .cloned()
            .collect()
    }

    fn create_product(&self, product: NewProduct) -> Product {
        let product = Product::from_new(ProductId::new(), product);
        self.write().products.insert(product.id, product.clone());
        debug!(product_id = %product.id, name = %product.name, "product created");
        product
    }

    fn list_cart_items(&self, session: &SessionId) -> DomainResult<Vec<CartItemWithProduct>> {
        let collections = self.read();
        collections
            .cart_items
            .values()
            .filter(|item| &item.session_id == session)
            .map(|item| {
                let product = collections.products.get(&item.product_id).cloned().ok_or_else(|| {
                    DomainError::data_integrity(format!(
                        "cart item {} references missing product {}",
                        item.id, item.product_id
                    ))
                })?;
                Ok(CartItemWithProduct {
                    item: item.clone(),
                    product,
                })
            })
            .collect()
    }

    fn get_cart_item(&self, id: &CartItemId) -> Option<CartItem> {
        self.read().cart_items.get(id).cloned()
    }

    fn add_to_cart(&self, item: NewCartItem) -> CartItem {
        let mut collections = self.write();

        if let Some(existing) = collections
            .cart_items
            .values_mut()
            .find(|i| i.product_id == item.product_id && i.session_id == item.session_id)
        {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
            debug!(
                cart_item_id = %existing.id,
                product_id = %existing.product_id,
                quantity = existing.quantity,
                "cart line merged"
            );
            return existing.clone();
        }

        let line = CartItem {
            id: CartItemId::new(),
            product_id: item.product_id,
            quantity: item.quantity,
            session_id: item.session_id,
        };
        collections.cart_items.insert(line.id, line.clone());
        debug!(
            cart_item_id = %line.id,
            product_id = %line.product_id,
            quantity = line.quantity,
            "cart line created"
        );
        line
    }

    fn update_cart_item_quantity(&self, id: &CartItemId, quantity: i64) -> Option<CartItem> {
        let mut collections = self.write();
        let line = collections.cart_items.get_mut(id)?;

        if quantity <= 0 {
            collections.cart_items.shift_remove(id);
            debug!(cart_item_id = %id, "cart line removed by zero quantity");
            return None;
        }

        line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        debug!(cart_item_id = %id, quantity = line.quantity, "cart line quantity set");
        Some(line.clone())
    }

    fn remove_from_cart(&self, id: &CartItemId) -> bool {
        let removed = self.write().cart_items.shift_remove(id).is_some();
        debug!(cart_item_id = %id, removed, "cart line remove");
        removed
    }

    fn clear_cart(&self, session: &SessionId) -> bool {
        let mut collections = self.write();
        let before = collections.cart_items.len();
        collections.cart_items.retain(|_, item| &item.session_id != session);
        debug!(
            session_id = %session,
            removed = before - collections.cart_items.len(),
            "cart cleared"
        );
        true
    }
}
