//! Axum router and server.

use crate::error::RpcError;
use crate::handlers;
use axum::routing::{get, post};
use axum::Router;
use karo_verification::ProofVerifier;
use karo_wallet::WalletLedger;
use karo_workflow::SubmissionWorkflow;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Shared state behind every handler.
pub struct AppState<V: ProofVerifier> {
    pub workflow: SubmissionWorkflow<V>,
    pub wallet: WalletLedger,
}

/// Build the API router.
///
/// CORS is permissive: the consumer is a browser frontend served from a
/// different origin.
pub fn router<V: ProofVerifier + 'static>(state: Arc<AppState<V>>) -> Router {
    Router::new()
        .route("/api/v1/products", get(handlers::list_products::<V>))
        .route("/api/v1/products/:id", get(handlers::get_product::<V>))
        .route("/api/v1/campaigns", post(handlers::create_campaign::<V>))
        .route("/api/v1/campaigns/:id", get(handlers::get_campaign::<V>))
        .route(
            "/api/v1/campaigns/:id/proofs",
            post(handlers::submit_proof::<V>),
        )
        .route(
            "/api/v1/campaigns/:id/payout/settle",
            post(handlers::settle_payout::<V>),
        )
        .route("/api/v1/users/:id/claims", get(handlers::user_claims::<V>))
        .route("/api/v1/users/:id/wallet", get(handlers::user_wallet::<V>))
        .route("/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// The HTTP server, configured with a port and shared state.
pub struct RpcServer<V: ProofVerifier> {
    pub port: u16,
    pub state: Arc<AppState<V>>,
}

impl<V: ProofVerifier + 'static> RpcServer<V> {
    pub fn new(port: u16, state: Arc<AppState<V>>) -> Self {
        Self { port, state }
    }

    /// Start serving. Runs until `shutdown` resolves.
    pub async fn start(
        &self,
        shutdown: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> Result<(), RpcError> {
        let app = router(self.state.clone());

        let addr = format!("0.0.0.0:{}", self.port);
        info!("API listening on {}", addr);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| RpcError::Internal(e.to_string()))?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| RpcError::Internal(e.to_string()))?;
        Ok(())
    }
}
