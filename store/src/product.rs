//! Product storage trait and record.

use crate::StoreError;
use karo_types::{Platform, ProductId, RebateAmount};
use serde::{Deserialize, Serialize};

/// A catalog product carrying a rebate offer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Purchase price.
    pub price: RebateAmount,
    /// Cashback owed on completion, fixed per product at catalog time.
    pub rebate: RebateAmount,
    pub image_url: String,
    pub platform: Platform,
    pub purchase_url: String,
    pub category: String,
    /// Remaining claim slots for this offer.
    pub remaining: u32,
}

/// Trait for product storage operations.
pub trait ProductStore: Send + Sync {
    fn get_product(&self, id: &ProductId) -> Result<ProductRecord, StoreError>;
    fn put_product(&self, record: &ProductRecord) -> Result<(), StoreError>;
    fn iter_products(&self) -> Result<Vec<ProductRecord>, StoreError>;
    fn product_count(&self) -> Result<u64, StoreError>;
}
