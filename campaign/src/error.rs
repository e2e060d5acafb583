use karo_types::CampaignStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CampaignError {
    #[error("campaign not found: {0}")]
    NotFound(String),

    #[error("product {product_id} already claimed by {user_id}")]
    AlreadyClaimed { product_id: String, user_id: String },

    #[error("invalid transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: CampaignStatus,
        to: CampaignStatus,
    },

    #[error("payout not due: campaign is {0:?}")]
    PayoutNotDue(CampaignStatus),

    #[error("store error: {0}")]
    Store(#[from] karo_store::StoreError),
}
