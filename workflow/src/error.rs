use karo_campaign::CampaignError;
use karo_catalog::CatalogError;
use karo_types::{CampaignStatus, ProofKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The submitted proof kind is not accepted at the campaign's current
    /// status. No verification call is made in this case.
    #[error("a {kind} proof is not accepted while the campaign is {status:?}")]
    InvalidState {
        status: CampaignStatus,
        kind: ProofKind,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Campaign(#[from] CampaignError),
}
