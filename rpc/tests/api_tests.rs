//! API tests driven through the router without a live socket.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use http_body_util::BodyExt;
use karo_campaign::CampaignBook;
use karo_catalog::Catalog;
use karo_nullables::ScriptedVerifier;
use karo_rpc::{router, AppState};
use karo_store_memory::MemoryStore;
use karo_verification::Verdict;
use karo_wallet::WalletLedger;
use karo_workflow::SubmissionWorkflow;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app(verifier: ScriptedVerifier) -> Router {
    let store = Arc::new(MemoryStore::new());
    let catalog = Catalog::new(store.clone());
    catalog.seed_demo_products().unwrap();
    let book = CampaignBook::new(store);
    let state = AppState {
        workflow: SubmissionWorkflow::new(catalog.clone(), book.clone(), verifier),
        wallet: WalletLedger::new(book, catalog),
    };
    router(Arc::new(state))
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

fn post_json(path: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn claim_body(product_id: &str) -> Value {
    json!({ "product_id": product_id, "user_id": "user_1" })
}

fn proof_body(kind: &str) -> Value {
    json!({ "kind": kind, "image_base64": BASE64.encode(b"screenshot") })
}

#[tokio::test]
async fn health_is_ok() {
    let app = app(ScriptedVerifier::always_valid());
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn products_lists_the_seeded_catalog() {
    let app = app(ScriptedVerifier::always_valid());
    let (status, body) = send(&app, get("/api/v1/products")).await;
    assert_eq!(status, StatusCode::OK);
    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 5);
    assert_eq!(products[2]["name"], "Stainless Steel Water Bottle");
}

#[tokio::test]
async fn unknown_product_is_404() {
    let app = app(ScriptedVerifier::always_valid());
    let (status, _) = send(&app, get("/api/v1/products/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn claiming_creates_a_campaign() {
    let app = app(ScriptedVerifier::always_valid());
    let (status, body) = send(&app, post_json("/api/v1/campaigns", claim_body("3"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "CLAIMED");
    assert_eq!(body["payout_status"], "PENDING");
    // ₹699 rebate, in paise.
    assert_eq!(body["payout_amount"], 69900);
    assert!(body["id"].as_str().unwrap().starts_with("camp_"));
}

#[tokio::test]
async fn duplicate_claim_is_409() {
    let app = app(ScriptedVerifier::always_valid());
    send(&app, post_json("/api/v1/campaigns", claim_body("3"))).await;
    let (status, body) = send(&app, post_json("/api/v1/campaigns", claim_body("3"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("already claimed"));
}

#[tokio::test]
async fn malformed_image_is_400() {
    let app = app(ScriptedVerifier::always_valid());
    let (_, claim) = send(&app, post_json("/api/v1/campaigns", claim_body("1"))).await;
    let id = claim["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        post_json(
            &format!("/api/v1/campaigns/{id}/proofs"),
            json!({ "kind": "ORDER", "image_base64": "!!not-base64!!" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn accepted_proof_advances_the_campaign() {
    let app = app(ScriptedVerifier::always_valid());
    let (_, claim) = send(&app, post_json("/api/v1/campaigns", claim_body("1"))).await;
    let id = claim["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        post_json(&format!("/api/v1/campaigns/{id}/proofs"), proof_body("ORDER")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], true);
    assert_eq!(body["campaign"]["status"], "ORDER_VERIFIED");
}

#[tokio::test]
async fn failed_verification_is_200_with_the_reason() {
    let app = app(ScriptedVerifier::new([Verdict::reject("no order ID visible")]));
    let (_, claim) = send(&app, post_json("/api/v1/campaigns", claim_body("1"))).await;
    let id = claim["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        post_json(&format!("/api/v1/campaigns/{id}/proofs"), proof_body("ORDER")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
    assert_eq!(body["reason"], "no order ID visible");
    assert_eq!(body["campaign"]["status"], "CLAIMED");
}

#[tokio::test]
async fn out_of_order_proof_is_409() {
    let app = app(ScriptedVerifier::always_valid());
    let (_, claim) = send(&app, post_json("/api/v1/campaigns", claim_body("1"))).await;
    let id = claim["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        post_json(&format!("/api/v1/campaigns/{id}/proofs"), proof_body("REVIEW")),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn wallet_reflects_completion_and_settlement() {
    let app = app(ScriptedVerifier::always_valid());
    let (_, claim) = send(&app, post_json("/api/v1/campaigns", claim_body("3"))).await;
    let id = claim["id"].as_str().unwrap().to_string();

    send(
        &app,
        post_json(&format!("/api/v1/campaigns/{id}/proofs"), proof_body("ORDER")),
    )
    .await;
    let (_, done) = send(
        &app,
        post_json(&format!("/api/v1/campaigns/{id}/proofs"), proof_body("REVIEW")),
    )
    .await;
    assert_eq!(done["campaign"]["status"], "COMPLETED");
    assert_eq!(done["campaign"]["payout_status"], "PROCESSING");

    let (_, wallet) = send(&app, get("/api/v1/users/user_1/wallet")).await;
    assert_eq!(wallet["pending_total"], 69900);
    assert_eq!(wallet["paid_total"], 0);

    let (status, settled) = send(
        &app,
        post_json(&format!("/api/v1/campaigns/{id}/payout/settle"), json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(settled["payout_status"], "PAID");

    let (_, wallet) = send(&app, get("/api/v1/users/user_1/wallet")).await;
    assert_eq!(wallet["pending_total"], 0);
    assert_eq!(wallet["paid_total"], 69900);
}

#[tokio::test]
async fn claims_listing_joins_products() {
    let app = app(ScriptedVerifier::always_valid());
    send(&app, post_json("/api/v1/campaigns", claim_body("2"))).await;

    let (status, body) = send(&app, get("/api/v1/users/user_1/claims")).await;
    assert_eq!(status, StatusCode::OK);
    let claims = body["claims"].as_array().unwrap();
    assert_eq!(claims.len(), 1);
    assert_eq!(claims[0]["product"]["name"], "Organic Vitamin C Serum");
    assert_eq!(claims[0]["campaign"]["status"], "CLAIMED");
    assert_eq!(claims[0]["progress_percent"], 33);
}

#[tokio::test]
async fn settling_an_unfinished_campaign_is_409() {
    let app = app(ScriptedVerifier::always_valid());
    let (_, claim) = send(&app, post_json("/api/v1/campaigns", claim_body("5"))).await;
    let id = claim["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        post_json(&format!("/api/v1/campaigns/{id}/payout/settle"), json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}
