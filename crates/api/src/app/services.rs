use std::sync::Arc;

use brecho_catalog::{CatalogCartStore, Storage};

use crate::config::AppConfig;

/// Handles shared by every request.
///
/// The store is owned here and reached only through [`Storage`]; handlers get
/// copies of records, never references into the store.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn Storage>,
}

impl AppServices {
    pub fn new(store: Arc<dyn Storage>) -> Self {
        Self { store }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let store = if config.seed_catalog {
            CatalogCartStore::seeded()
        } else {
            CatalogCartStore::new()
        };
        Self::new(Arc::new(store))
    }

    pub fn store(&self) -> &dyn Storage {
        self.store.as_ref()
    }
}
