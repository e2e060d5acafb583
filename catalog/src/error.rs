use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product not found: {0}")]
    NotFound(String),

    #[error("offer sold out: {0}")]
    SoldOut(String),

    #[error("store error: {0}")]
    Store(#[from] karo_store::StoreError),
}
