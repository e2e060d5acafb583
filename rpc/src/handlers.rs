//! Request handlers and wire DTOs.

use crate::error::RpcError;
use crate::server::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use karo_store::{CampaignRecord, ProductRecord};
use karo_types::{CampaignId, ProductId, ProofKind, UserId};
use karo_verification::ProofVerifier;
use karo_wallet::{Claim, WalletSummary};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ── Catalog ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ProductsResponse {
    pub products: Vec<ProductRecord>,
}

pub async fn list_products<V: ProofVerifier + 'static>(
    State(state): State<Arc<AppState<V>>>,
) -> Result<Json<ProductsResponse>, RpcError> {
    let products = state.workflow.catalog().list()?;
    Ok(Json(ProductsResponse { products }))
}

pub async fn get_product<V: ProofVerifier + 'static>(
    State(state): State<Arc<AppState<V>>>,
    Path(id): Path<String>,
) -> Result<Json<ProductRecord>, RpcError> {
    let product = state.workflow.catalog().get(&ProductId::new(id))?;
    Ok(Json(product))
}

// ── Campaigns ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ClaimRequest {
    pub product_id: String,
    pub user_id: String,
}

pub async fn create_campaign<V: ProofVerifier + 'static>(
    State(state): State<Arc<AppState<V>>>,
    Json(req): Json<ClaimRequest>,
) -> Result<(StatusCode, Json<CampaignRecord>), RpcError> {
    let campaign = state
        .workflow
        .claim_offer(&ProductId::new(req.product_id), &UserId::new(req.user_id))?;
    Ok((StatusCode::CREATED, Json(campaign)))
}

pub async fn get_campaign<V: ProofVerifier + 'static>(
    State(state): State<Arc<AppState<V>>>,
    Path(id): Path<String>,
) -> Result<Json<CampaignRecord>, RpcError> {
    let campaign = state.workflow.book().get(&CampaignId::new(id))?;
    Ok(Json(campaign))
}

// ── Proof submission ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ProofRequest {
    pub kind: ProofKind,
    /// Standard-alphabet base64 of the screenshot bytes.
    pub image_base64: String,
}

/// A failed verdict is a 200: `valid = false` plus the oracle's reason.
#[derive(Serialize)]
pub struct ProofResponse {
    pub valid: bool,
    pub reason: String,
    #[serde(rename = "detectedText", skip_serializing_if = "Option::is_none")]
    pub detected_text: Option<String>,
    pub campaign: CampaignRecord,
}

pub async fn submit_proof<V: ProofVerifier + 'static>(
    State(state): State<Arc<AppState<V>>>,
    Path(id): Path<String>,
    Json(req): Json<ProofRequest>,
) -> Result<Json<ProofResponse>, RpcError> {
    let image = BASE64
        .decode(req.image_base64.as_bytes())
        .map_err(|_| RpcError::InvalidRequest("image is not valid base64".into()))?;
    if image.is_empty() {
        return Err(RpcError::InvalidRequest("image is empty".into()));
    }

    let outcome = state
        .workflow
        .submit_proof(&CampaignId::new(id), req.kind, &image)
        .await?;
    Ok(Json(ProofResponse {
        valid: outcome.verdict.valid,
        reason: outcome.verdict.reason,
        detected_text: outcome.verdict.detected_text,
        campaign: outcome.campaign,
    }))
}

// ── Wallet ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ClaimsResponse {
    pub claims: Vec<Claim>,
}

pub async fn user_claims<V: ProofVerifier + 'static>(
    State(state): State<Arc<AppState<V>>>,
    Path(id): Path<String>,
) -> Result<Json<ClaimsResponse>, RpcError> {
    let claims = state.wallet.list_claims(&UserId::new(id))?;
    Ok(Json(ClaimsResponse { claims }))
}

pub async fn user_wallet<V: ProofVerifier + 'static>(
    State(state): State<Arc<AppState<V>>>,
    Path(id): Path<String>,
) -> Result<Json<WalletSummary>, RpcError> {
    let summary = state.wallet.summary(&UserId::new(id))?;
    Ok(Json(summary))
}

pub async fn settle_payout<V: ProofVerifier + 'static>(
    State(state): State<Arc<AppState<V>>>,
    Path(id): Path<String>,
) -> Result<Json<CampaignRecord>, RpcError> {
    let campaign = state.wallet.settle_payout(&CampaignId::new(id))?;
    Ok(Json(campaign))
}

// ── Health ───────────────────────────────────────────────────────────────

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
