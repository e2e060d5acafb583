//! Campaign storage trait and record.

use crate::StoreError;
use karo_types::{
    CampaignId, CampaignStatus, PayoutStatus, ProductId, ProofRef, RebateAmount, Timestamp, UserId,
};
use serde::{Deserialize, Serialize};

/// One user's claim on one product's rebate offer, tracked from claim
/// through proof submission to payout.
///
/// A record only exists from `Claimed` onward — the `Available` status is
/// the virtual pre-claim state and is never persisted. Records are never
/// deleted; terminal campaigns stay for audit and wallet history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignRecord {
    pub id: CampaignId,
    pub product_id: ProductId,
    pub user_id: UserId,
    pub status: CampaignStatus,
    /// Reference to the uploaded order-confirmation evidence.
    pub order_proof: Option<ProofRef>,
    /// Reference to the uploaded published-review evidence.
    pub review_proof: Option<ProofRef>,
    /// Set only by an accepted order-proof verdict.
    pub order_verified: bool,
    /// Set only by an accepted review-proof verdict.
    pub review_verified: bool,
    pub payout_status: PayoutStatus,
    /// Fixed at claim time from the product's rebate value; never recomputed.
    pub payout_amount: Option<RebateAmount>,
    /// When the payout settled, if it has.
    pub paid_at: Option<Timestamp>,
    /// Refreshed on every accepted mutation.
    pub updated_at: Timestamp,
}

/// Trait for campaign storage operations.
pub trait CampaignStore: Send + Sync {
    fn get_campaign(&self, id: &CampaignId) -> Result<CampaignRecord, StoreError>;
    fn put_campaign(&self, record: &CampaignRecord) -> Result<(), StoreError>;
    /// Look up the campaign for a (product, user) pair, if one exists.
    fn find_claim(
        &self,
        product_id: &ProductId,
        user_id: &UserId,
    ) -> Result<Option<CampaignRecord>, StoreError>;
    fn iter_user_campaigns(&self, user_id: &UserId) -> Result<Vec<CampaignRecord>, StoreError>;
    fn campaign_count(&self) -> Result<u64, StoreError>;
}
