use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error(transparent)]
    Campaign(#[from] karo_campaign::CampaignError),

    #[error(transparent)]
    Catalog(#[from] karo_catalog::CatalogError),
}
