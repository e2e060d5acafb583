//! API error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use karo_campaign::CampaignError;
use karo_catalog::CatalogError;
use karo_wallet::WalletError;
use karo_workflow::WorkflowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl RpcError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<CatalogError> for RpcError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(id) => Self::NotFound(id),
            CatalogError::SoldOut(_) => Self::Conflict("this offer is sold out".into()),
            CatalogError::Store(e) => Self::Internal(e.to_string()),
        }
    }
}

impl From<CampaignError> for RpcError {
    fn from(e: CampaignError) -> Self {
        match e {
            CampaignError::NotFound(id) => Self::NotFound(id),
            CampaignError::AlreadyClaimed { .. } => {
                Self::Conflict("you have already claimed this offer".into())
            }
            CampaignError::InvalidTransition { .. } | CampaignError::PayoutNotDue(_) => {
                Self::Conflict("this action is not allowed right now".into())
            }
            CampaignError::Store(e) => Self::Internal(e.to_string()),
        }
    }
}

impl From<WorkflowError> for RpcError {
    fn from(e: WorkflowError) -> Self {
        match e {
            WorkflowError::InvalidState { .. } => {
                Self::Conflict("this action is not allowed right now".into())
            }
            WorkflowError::Catalog(e) => e.into(),
            WorkflowError::Campaign(e) => e.into(),
        }
    }
}

impl From<WalletError> for RpcError {
    fn from(e: WalletError) -> Self {
        match e {
            WalletError::Campaign(e) => e.into(),
            WalletError::Catalog(e) => e.into(),
        }
    }
}
