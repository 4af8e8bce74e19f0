mod common;

use axum_test::TestServer;
use http::StatusCode;
use kudipay_core::repositories::CurrencyRepository;
use kudipay_primitives::models::entities::enum_types::CurrencyCode;
use serde_json::json;
use serial_test::serial;
use uuid::Uuid;

#[tokio::test]
#[serial]
async fn health_endpoint_answers() {
    let state = common::create_test_app_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/api/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "200 OK");
}

#[tokio::test]
#[serial]
async fn set_pin_enforces_policy_over_http() {
    let state = common::create_test_app_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();
    let user_id = Uuid::new_v4();

    let response = server
        .post("/api/pin")
        .json(&json!({ "user_id": user_id, "pin": "294817" }))
        .await;
    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);

    // A sequential run is refused with the standard error envelope.
    let response = server
        .post("/api/pin")
        .json(&json!({ "user_id": user_id, "pin": "123456" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
}

#[tokio::test]
#[serial]
async fn first_bank_account_becomes_default() {
    let state = common::create_test_app_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();
    let user_id = Uuid::new_v4();

    let response = server
        .post("/api/bank_accounts")
        .json(&json!({
            "user_id": user_id,
            "bank_code": "057",
            "account_number": "0987654321",
            "account_name": "Ama Mensah"
        }))
        .await;
    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["is_default"], true);
    assert_eq!(body["is_verified"], false);

    let response = server.get(&format!("/api/bank_accounts/{}", user_id)).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["bank_accounts"].as_array().unwrap().len(), 1);
}

#[tokio::test]
#[serial]
async fn transfer_endpoint_converts_and_reports() {
    let state = common::create_test_app_state();
    let sender_id = Uuid::new_v4();
    let recipient_id = Uuid::new_v4();

    {
        let conn = &mut state.db.get().unwrap();
        CurrencyRepository::upsert(conn, CurrencyCode::NGN, 1_500_000_000).unwrap();
        CurrencyRepository::upsert(conn, CurrencyCode::GHS, 120_000_000).unwrap();
        common::insert_wallet(conn, sender_id, CurrencyCode::NGN, 100_000);
        common::insert_wallet(conn, recipient_id, CurrencyCode::GHS, 0);
    }

    let server = TestServer::new(common::create_test_app(state.clone())).unwrap();

    let response = server
        .post("/api/transfer")
        .json(&json!({
            "sender_id": sender_id,
            "recipient_id": recipient_id,
            "amount": 10_000,
            "sender_currency": "NGN",
            "recipient_currency": "GHS"
        }))
        .await;
    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["amount_received"], 800);
    assert_eq!(body["transfer_fee"], 100);

    let conn = &mut state.db.get().unwrap();
    assert_eq!(
        common::wallet_balance(conn, sender_id, CurrencyCode::NGN),
        89_900
    );
}

#[tokio::test]
#[serial]
async fn transfer_to_self_is_a_bad_request() {
    let state = common::create_test_app_state();
    let user_id = Uuid::new_v4();

    {
        let conn = &mut state.db.get().unwrap();
        CurrencyRepository::upsert(conn, CurrencyCode::NGN, 1_500_000_000).unwrap();
        common::insert_wallet(conn, user_id, CurrencyCode::NGN, 50_000);
    }

    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .post("/api/transfer")
        .json(&json!({
            "sender_id": user_id,
            "recipient_id": user_id,
            "amount": 1_000,
            "sender_currency": "NGN",
            "recipient_currency": "NGN"
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
}
