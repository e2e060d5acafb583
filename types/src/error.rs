use thiserror::Error;

#[derive(Debug, Error)]
pub enum TypeError {
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("unknown proof kind: {0}")]
    UnknownProofKind(String),
}
