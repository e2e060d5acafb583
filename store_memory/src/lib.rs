//! In-memory storage backend.
//!
//! A `Mutex<HashMap>`-backed implementation of the `karo-store` traits.
//! Thread-safe for use with tokio's multi-threaded runtime; reads are
//! strongly consistent with the most recent write.

use karo_store::{CampaignRecord, CampaignStore, ProductRecord, ProductStore, StoreError};
use karo_types::{CampaignId, ProductId, UserId};
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory campaign + product store.
pub struct MemoryStore {
    campaigns: Mutex<HashMap<String, CampaignRecord>>,
    /// (product, user) pair -> campaign id, for duplicate-claim lookups.
    claims: Mutex<HashMap<(String, String), CampaignId>>,
    products: Mutex<HashMap<String, ProductRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            campaigns: Mutex::new(HashMap::new()),
            claims: Mutex::new(HashMap::new()),
            products: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CampaignStore for MemoryStore {
    fn get_campaign(&self, id: &CampaignId) -> Result<CampaignRecord, StoreError> {
        self.campaigns
            .lock()
            .unwrap()
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn put_campaign(&self, record: &CampaignRecord) -> Result<(), StoreError> {
        self.claims.lock().unwrap().insert(
            (
                record.product_id.to_string(),
                record.user_id.to_string(),
            ),
            record.id.clone(),
        );
        self.campaigns
            .lock()
            .unwrap()
            .insert(record.id.to_string(), record.clone());
        Ok(())
    }

    fn find_claim(
        &self,
        product_id: &ProductId,
        user_id: &UserId,
    ) -> Result<Option<CampaignRecord>, StoreError> {
        let claims = self.claims.lock().unwrap();
        match claims.get(&(product_id.to_string(), user_id.to_string())) {
            Some(id) => Ok(self.campaigns.lock().unwrap().get(id.as_str()).cloned()),
            None => Ok(None),
        }
    }

    fn iter_user_campaigns(&self, user_id: &UserId) -> Result<Vec<CampaignRecord>, StoreError> {
        Ok(self
            .campaigns
            .lock()
            .unwrap()
            .values()
            .filter(|c| c.user_id == *user_id)
            .cloned()
            .collect())
    }

    fn campaign_count(&self) -> Result<u64, StoreError> {
        Ok(self.campaigns.lock().unwrap().len() as u64)
    }
}

impl ProductStore for MemoryStore {
    fn get_product(&self, id: &ProductId) -> Result<ProductRecord, StoreError> {
        self.products
            .lock()
            .unwrap()
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn put_product(&self, record: &ProductRecord) -> Result<(), StoreError> {
        self.products
            .lock()
            .unwrap()
            .insert(record.id.to_string(), record.clone());
        Ok(())
    }

    fn iter_products(&self) -> Result<Vec<ProductRecord>, StoreError> {
        let mut products: Vec<ProductRecord> =
            self.products.lock().unwrap().values().cloned().collect();
        products.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));
        Ok(products)
    }

    fn product_count(&self) -> Result<u64, StoreError> {
        Ok(self.products.lock().unwrap().len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use karo_types::{CampaignStatus, PayoutStatus, Platform, RebateAmount, Timestamp};

    fn test_campaign(id: &str, product: &str, user: &str) -> CampaignRecord {
        CampaignRecord {
            id: CampaignId::new(id),
            product_id: ProductId::new(product),
            user_id: UserId::new(user),
            status: CampaignStatus::Claimed,
            order_proof: None,
            review_proof: None,
            order_verified: false,
            review_verified: false,
            payout_status: PayoutStatus::Pending,
            payout_amount: Some(RebateAmount::from_rupees(699)),
            paid_at: None,
            updated_at: Timestamp::new(1000),
        }
    }

    fn test_product(id: &str) -> ProductRecord {
        ProductRecord {
            id: ProductId::new(id),
            name: "Stainless Steel Water Bottle".into(),
            description: "Double-walled vacuum insulated water bottle.".into(),
            price: RebateAmount::from_rupees(999),
            rebate: RebateAmount::from_rupees(699),
            image_url: "https://example.com/bottle.jpg".into(),
            platform: Platform::Amazon,
            purchase_url: "https://www.amazon.in/s?k=water+bottle".into(),
            category: "Home & Kitchen".into(),
            remaining: 45,
        }
    }

    #[test]
    fn put_get_campaign_round_trips() {
        let store = MemoryStore::new();
        let record = test_campaign("camp_1", "prod_1", "user_1");
        store.put_campaign(&record).unwrap();
        assert_eq!(store.get_campaign(&record.id).unwrap(), record);
    }

    #[test]
    fn missing_campaign_is_not_found() {
        let store = MemoryStore::new();
        let err = store.get_campaign(&CampaignId::new("camp_missing")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn find_claim_by_pair() {
        let store = MemoryStore::new();
        let record = test_campaign("camp_1", "prod_1", "user_1");
        store.put_campaign(&record).unwrap();

        let found = store
            .find_claim(&ProductId::new("prod_1"), &UserId::new("user_1"))
            .unwrap();
        assert_eq!(found, Some(record));

        let other = store
            .find_claim(&ProductId::new("prod_1"), &UserId::new("user_2"))
            .unwrap();
        assert!(other.is_none());
    }

    #[test]
    fn iter_user_campaigns_filters_by_user() {
        let store = MemoryStore::new();
        store.put_campaign(&test_campaign("camp_1", "prod_1", "user_1")).unwrap();
        store.put_campaign(&test_campaign("camp_2", "prod_2", "user_1")).unwrap();
        store.put_campaign(&test_campaign("camp_3", "prod_3", "user_2")).unwrap();

        let mine = store.iter_user_campaigns(&UserId::new("user_1")).unwrap();
        assert_eq!(mine.len(), 2);
        assert_eq!(store.campaign_count().unwrap(), 3);
    }

    #[test]
    fn products_iterate_in_id_order() {
        let store = MemoryStore::new();
        store.put_product(&test_product("2")).unwrap();
        store.put_product(&test_product("1")).unwrap();

        let products = store.iter_products().unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id.as_str(), "1");
    }
}
