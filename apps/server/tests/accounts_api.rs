use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use teller_core::TransactionPolicy;
use teller_server::{api::app_router, build_state, config::Config};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

/// Router over a fresh database seeded with five customers, each holding
/// savings account N with 100.00.
async fn build_test_router(policy: TransactionPolicy) -> (Router, TempDir) {
    let tmp = tempdir().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: tmp.path().join("test.db").to_string_lossy().to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
        seed_demo_data: true,
        policy,
    };
    let state = build_state(&config).await.unwrap();
    (app_router(state, &config), tmp)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

#[tokio::test]
async fn healthz_works() {
    let (app, _tmp) = build_test_router(TransactionPolicy::default()).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn seeded_customers_are_listed() {
    let (app, _tmp) = build_test_router(TransactionPolicy::default()).await;

    let (status, body) = send(&app, Method::GET, "/api/v1/customers", None).await;
    assert_eq!(status, StatusCode::OK);
    let customers = body.as_array().unwrap();
    assert_eq!(customers.len(), 5);
    assert_eq!(customers[0]["accounts"][0]["accountType"], "SAVINGS");
    assert_eq!(customers[0]["accounts"][0]["balance"], "100.00");
}

#[tokio::test]
async fn deposit_then_read_account() {
    let (app, _tmp) = build_test_router(TransactionPolicy::default()).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/accounts/deposit",
        Some(json!({ "customerId": 1, "accountId": 1, "amount": "25.50" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "COMPLETED");
    assert_eq!(body["newBalance"], "125.50");

    let (status, body) = send(&app, Method::GET, "/api/v1/customers/1/accounts/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["balance"], "125.50");
    assert_eq!(body["status"], "OPEN");
}

#[tokio::test]
async fn withdrawal_above_balance_is_rejected() {
    let (app, _tmp) = build_test_router(TransactionPolicy::default()).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/accounts/withdrawal",
        Some(json!({ "customerId": 1, "accountId": 1, "amount": "100.01" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["outcome"], "INSUFFICIENT_FUNDS");
    assert_eq!(body["balance"], "100.00");
}

#[tokio::test]
async fn deposit_validation_uses_configured_policy() {
    let policy = TransactionPolicy::new(dec!(1000000.23), dec!(1000000.23), dec!(100), 2).unwrap();
    let (app, _tmp) = build_test_router(policy).await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/accounts/deposit",
        Some(json!({ "customerId": 1, "accountId": 1, "amount": "1000000" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/accounts/deposit",
        Some(json!({ "customerId": 1, "accountId": 1, "amount": "10000000" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["outcome"], "VALIDATION_FAILED");
    assert!(body["errors"]["amount"].as_array().unwrap().len() >= 1);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/accounts/deposit",
        Some(json!({ "customerId": 1, "accountId": 1, "amount": "1.001" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["outcome"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn numeric_amounts_are_validated_exactly() {
    let (app, _tmp) = build_test_router(TransactionPolicy::default()).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/accounts/deposit",
        Some(json!({ "customerId": 1, "accountId": 1, "amount": 1.001 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["outcome"], "VALIDATION_FAILED");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/accounts/deposit",
        Some(json!({ "customerId": 1, "accountId": 1, "amount": 25.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["newBalance"], "125.50");
}

#[tokio::test]
async fn foreign_account_is_not_found() {
    let (app, _tmp) = build_test_router(TransactionPolicy::default()).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/accounts/deposit",
        Some(json!({ "customerId": 2, "accountId": 1, "amount": "10" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["outcome"], "ACCOUNT_NOT_FOUND");

    let (status, _) = send(&app, Method::GET, "/api/v1/customers/2/accounts/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn open_checking_requires_savings() {
    let (app, _tmp) = build_test_router(TransactionPolicy::default()).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/customers",
        Some(json!({ "name": "Ada" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let ada_id = body["customer"]["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/accounts/open",
        Some(json!({ "customerId": ada_id, "accountType": "CHECKING", "initialDeposit": "100" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["outcome"], "SAVINGS_ACCOUNT_REQUIRED");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/accounts/open",
        Some(json!({ "customerId": ada_id, "accountType": "SAVINGS", "initialDeposit": "100" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["outcome"], "OPENED");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/accounts/open",
        Some(json!({ "customerId": ada_id, "accountType": "CHECKING", "initialDeposit": "100" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, Method::GET, &format!("/api/v1/customers/{}", ada_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["accounts"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn close_requires_zero_balance() {
    let (app, _tmp) = build_test_router(TransactionPolicy::default()).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/accounts/close",
        Some(json!({ "customerId": 1, "accountId": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["outcome"], "ACCOUNT_HAS_FUNDED_BALANCE");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/accounts/withdrawal",
        Some(json!({ "customerId": 1, "accountId": 1, "amount": "100.00" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/accounts/close",
        Some(json!({ "customerId": 1, "accountId": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "CLOSED");
    assert_eq!(body["finalStatus"], "CLOSED");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/accounts/deposit",
        Some(json!({ "customerId": 1, "accountId": 1, "amount": "5" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["outcome"], "ACCOUNT_CLOSED");
}

#[tokio::test]
async fn unknown_customer_is_not_found() {
    let (app, _tmp) = build_test_router(TransactionPolicy::default()).await;

    let (status, body) = send(&app, Method::GET, "/api/v1/customers/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}
