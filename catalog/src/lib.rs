//! Product catalog.
//!
//! Wraps a `ProductStore` with offer lookup and claim-slot accounting.
//! Every offer has a bounded number of claim slots (`remaining`); claiming
//! reserves one, and an exhausted offer can no longer be claimed.

pub mod error;
pub mod seed;

pub use error::CatalogError;

use karo_store::{ProductRecord, ProductStore};
use karo_types::ProductId;
use std::sync::{Arc, Mutex};

/// The product catalog, backed by an abstract product store.
#[derive(Clone)]
pub struct Catalog {
    store: Arc<dyn ProductStore>,
    /// Serializes reserve/release so two concurrent claims cannot both take
    /// the last slot.
    slot_guard: Arc<Mutex<()>>,
}

impl Catalog {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self {
            store,
            slot_guard: Arc::new(Mutex::new(())),
        }
    }

    /// Load the demo product fixtures into the backing store.
    pub fn seed_demo_products(&self) -> Result<usize, CatalogError> {
        let products = seed::demo_products();
        let count = products.len();
        for product in &products {
            self.store.put_product(product)?;
        }
        tracing::info!(count, "seeded demo catalog");
        Ok(count)
    }

    pub fn get(&self, id: &ProductId) -> Result<ProductRecord, CatalogError> {
        self.store.get_product(id).map_err(|e| match e {
            karo_store::StoreError::NotFound(_) => CatalogError::NotFound(id.to_string()),
            other => CatalogError::Store(other),
        })
    }

    /// All products, in id order.
    pub fn list(&self) -> Result<Vec<ProductRecord>, CatalogError> {
        Ok(self.store.iter_products()?)
    }

    /// Reserve one claim slot on a product, decrementing `remaining`.
    pub fn reserve_slot(&self, id: &ProductId) -> Result<ProductRecord, CatalogError> {
        let _guard = self.slot_guard.lock().unwrap();
        let mut product = self.get(id)?;
        if product.remaining == 0 {
            return Err(CatalogError::SoldOut(id.to_string()));
        }
        product.remaining -= 1;
        self.store.put_product(&product)?;
        Ok(product)
    }

    /// Return a previously reserved slot (claim creation failed downstream).
    pub fn release_slot(&self, id: &ProductId) -> Result<(), CatalogError> {
        let _guard = self.slot_guard.lock().unwrap();
        let mut product = self.get(id)?;
        product.remaining += 1;
        self.store.put_product(&product)?;
        Ok(())
    }
}
