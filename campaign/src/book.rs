//! The campaign book — create, advance, and settle campaign records.

use crate::error::CampaignError;
use karo_store::{CampaignRecord, CampaignStore};
use karo_types::{
    CampaignId, CampaignStatus, PayoutStatus, ProductId, ProofRef, RebateAmount, Timestamp, UserId,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Fields an accepted verdict writes alongside a status transition.
#[derive(Clone, Debug, Default)]
pub struct CampaignUpdate {
    pub order_proof: Option<ProofRef>,
    pub review_proof: Option<ProofRef>,
    pub order_verified: Option<bool>,
    pub review_verified: Option<bool>,
}

impl CampaignUpdate {
    /// No field changes — a bare status transition.
    pub fn none() -> Self {
        Self::default()
    }

    /// Update applied when an order proof is accepted.
    pub fn order_accepted(proof: ProofRef) -> Self {
        Self {
            order_proof: Some(proof),
            order_verified: Some(true),
            ..Self::default()
        }
    }

    /// Update applied when a review proof is accepted.
    pub fn review_accepted(proof: ProofRef) -> Self {
        Self {
            review_proof: Some(proof),
            review_verified: Some(true),
            ..Self::default()
        }
    }
}

/// All campaign mutation funnels through this book.
///
/// Each campaign is guarded by an exclusive lock so that two concurrent
/// submissions cannot both be accepted — at most one transition per verdict
/// holds even under concurrency.
#[derive(Clone)]
pub struct CampaignBook {
    store: Arc<dyn CampaignStore>,
    locks: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
    claim_guard: Arc<Mutex<()>>,
}

impl CampaignBook {
    pub fn new(store: Arc<dyn CampaignStore>) -> Self {
        Self {
            store,
            locks: Arc::new(Mutex::new(HashMap::new())),
            claim_guard: Arc::new(Mutex::new(())),
        }
    }

    fn lock_for(&self, id: &CampaignId) -> Arc<Mutex<()>> {
        self.locks
            .lock()
            .unwrap()
            .entry(id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Create a campaign for a (product, user) pair.
    ///
    /// The rebate amount is frozen here and never recomputed, even if the
    /// product's rebate changes later.
    pub fn claim(
        &self,
        product_id: &ProductId,
        user_id: &UserId,
        rebate: RebateAmount,
    ) -> Result<CampaignRecord, CampaignError> {
        let _guard = self.claim_guard.lock().unwrap();

        if self.store.find_claim(product_id, user_id)?.is_some() {
            return Err(CampaignError::AlreadyClaimed {
                product_id: product_id.to_string(),
                user_id: user_id.to_string(),
            });
        }

        let record = CampaignRecord {
            id: CampaignId::generate(),
            product_id: product_id.clone(),
            user_id: user_id.clone(),
            status: CampaignStatus::Claimed,
            order_proof: None,
            review_proof: None,
            order_verified: false,
            review_verified: false,
            payout_status: PayoutStatus::Pending,
            payout_amount: Some(rebate),
            paid_at: None,
            updated_at: Timestamp::now(),
        };
        self.store.put_campaign(&record)?;

        tracing::info!(
            campaign = %record.id,
            product = %product_id,
            user = %user_id,
            rebate = %rebate,
            "campaign claimed"
        );
        Ok(record)
    }

    pub fn get(&self, id: &CampaignId) -> Result<CampaignRecord, CampaignError> {
        self.store.get_campaign(id).map_err(|e| match e {
            karo_store::StoreError::NotFound(_) => CampaignError::NotFound(id.to_string()),
            other => CampaignError::Store(other),
        })
    }

    /// Move a campaign to `target`, applying `update` atomically.
    ///
    /// Fails with `InvalidTransition` when `target` is not a permitted
    /// successor of the current status. An accepted transition refreshes
    /// `updated_at`; reaching `Completed` starts the payout
    /// (`payout_status = Processing`).
    pub fn advance(
        &self,
        id: &CampaignId,
        target: CampaignStatus,
        update: CampaignUpdate,
    ) -> Result<CampaignRecord, CampaignError> {
        let lock = self.lock_for(id);
        let _guard = lock.lock().unwrap();

        let mut record = self.get(id)?;
        if !record.status.can_advance_to(target) {
            return Err(CampaignError::InvalidTransition {
                from: record.status,
                to: target,
            });
        }

        if let Some(proof) = update.order_proof {
            record.order_proof = Some(proof);
        }
        if let Some(proof) = update.review_proof {
            record.review_proof = Some(proof);
        }
        if let Some(flag) = update.order_verified {
            record.order_verified = flag;
        }
        if let Some(flag) = update.review_verified {
            record.review_verified = flag;
        }

        let from = record.status;
        record.status = target;
        if target == CampaignStatus::Completed {
            record.payout_status = PayoutStatus::Processing;
        }
        record.updated_at = Timestamp::now();
        self.store.put_campaign(&record)?;

        tracing::info!(campaign = %id, ?from, to = ?target, "campaign advanced");
        Ok(record)
    }

    /// Settle a processing payout: `Processing -> Paid`, stamping `paid_at`.
    pub fn settle_payout(&self, id: &CampaignId) -> Result<CampaignRecord, CampaignError> {
        let lock = self.lock_for(id);
        let _guard = lock.lock().unwrap();

        let mut record = self.get(id)?;
        if record.status != CampaignStatus::Completed
            || record.payout_status != PayoutStatus::Processing
        {
            return Err(CampaignError::PayoutNotDue(record.status));
        }

        record.payout_status = PayoutStatus::Paid;
        record.paid_at = Some(Timestamp::now());
        record.updated_at = Timestamp::now();
        self.store.put_campaign(&record)?;

        tracing::info!(campaign = %id, "payout settled");
        Ok(record)
    }

    /// All campaigns belonging to a user.
    pub fn user_campaigns(&self, user_id: &UserId) -> Result<Vec<CampaignRecord>, CampaignError> {
        Ok(self.store.iter_user_campaigns(user_id)?)
    }

    /// The campaign for a (product, user) pair, if one exists.
    pub fn find_claim(
        &self,
        product_id: &ProductId,
        user_id: &UserId,
    ) -> Result<Option<CampaignRecord>, CampaignError> {
        Ok(self.store.find_claim(product_id, user_id)?)
    }
}
