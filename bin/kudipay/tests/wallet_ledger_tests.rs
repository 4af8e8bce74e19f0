mod common;

use diesel::prelude::*;
use kudipay_core::services::wallet_service::WalletService;
use kudipay_primitives::error::ApiError;
use kudipay_primitives::models::entities::enum_types::CurrencyCode;
use kudipay_primitives::schema::wallet_ledger;
use serial_test::serial;
use uuid::Uuid;

#[tokio::test]
#[serial]
async fn repeated_adjustment_with_same_reference_applies_once() {
    let state = common::create_test_app_state();
    let user_id = Uuid::new_v4();
    let reference = Uuid::new_v4();

    let wallet_id = {
        let conn = &mut state.db.get().unwrap();
        common::insert_wallet(conn, user_id, CurrencyCode::NGN, 100_000)
    };

    let first =
        WalletService::adjust_balance(&state, user_id, CurrencyCode::NGN, -20_000, reference)
            .await
            .unwrap();
    assert_eq!(first, 80_000);

    // Retry after a timeout: same reference, same delta, no second debit.
    let second =
        WalletService::adjust_balance(&state, user_id, CurrencyCode::NGN, -20_000, reference)
            .await
            .unwrap();
    assert_eq!(second, 80_000);

    let conn = &mut state.db.get().unwrap();
    assert_eq!(
        common::wallet_balance(conn, user_id, CurrencyCode::NGN),
        80_000
    );

    let entries: i64 = wallet_ledger::table
        .filter(wallet_ledger::wallet_id.eq(wallet_id))
        .count()
        .get_result(conn)
        .unwrap();
    assert_eq!(entries, 1);
}

#[tokio::test]
#[serial]
async fn reused_reference_with_different_delta_is_rejected() {
    let state = common::create_test_app_state();
    let user_id = Uuid::new_v4();
    let reference = Uuid::new_v4();

    {
        let conn = &mut state.db.get().unwrap();
        common::insert_wallet(conn, user_id, CurrencyCode::NGN, 100_000);
    }

    WalletService::adjust_balance(&state, user_id, CurrencyCode::NGN, -20_000, reference)
        .await
        .unwrap();

    let result =
        WalletService::adjust_balance(&state, user_id, CurrencyCode::NGN, -30_000, reference)
            .await;
    assert!(matches!(result, Err(ApiError::DuplicateReference)));

    let conn = &mut state.db.get().unwrap();
    assert_eq!(
        common::wallet_balance(conn, user_id, CurrencyCode::NGN),
        80_000
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[serial]
async fn concurrent_debits_never_overdraw() {
    let state = common::create_test_app_state();
    let user_id = Uuid::new_v4();

    {
        let conn = &mut state.db.get().unwrap();
        common::insert_wallet(conn, user_id, CurrencyCode::NGN, 10_000);
    }

    // Two debits race for a balance that covers only one of them.
    let s1 = state.clone();
    let a = tokio::spawn(async move {
        WalletService::adjust_balance(&s1, user_id, CurrencyCode::NGN, -8_000, Uuid::new_v4())
            .await
    });
    let s2 = state.clone();
    let b = tokio::spawn(async move {
        WalletService::adjust_balance(&s2, user_id, CurrencyCode::NGN, -8_000, Uuid::new_v4())
            .await
    });

    let results = [a.await.unwrap(), b.await.unwrap()];
    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    assert!(results
        .iter()
        .any(|r| matches!(r, Err(ApiError::InsufficientFunds))));

    let conn = &mut state.db.get().unwrap();
    assert_eq!(
        common::wallet_balance(conn, user_id, CurrencyCode::NGN),
        2_000
    );
}

#[tokio::test]
#[serial]
async fn overdraw_is_rejected_without_movement() {
    let state = common::create_test_app_state();
    let user_id = Uuid::new_v4();

    {
        let conn = &mut state.db.get().unwrap();
        common::insert_wallet(conn, user_id, CurrencyCode::GHS, 5_000);
    }

    let result =
        WalletService::adjust_balance(&state, user_id, CurrencyCode::GHS, -10_000, Uuid::new_v4())
            .await;
    assert!(matches!(result, Err(ApiError::InsufficientFunds)));

    let conn = &mut state.db.get().unwrap();
    assert_eq!(
        common::wallet_balance(conn, user_id, CurrencyCode::GHS),
        5_000
    );
}

#[tokio::test]
#[serial]
async fn oversized_credit_is_rejected_without_movement() {
    let state = common::create_test_app_state();
    let user_id = Uuid::new_v4();

    {
        let conn = &mut state.db.get().unwrap();
        common::insert_wallet(conn, user_id, CurrencyCode::NGN, 5_000);
    }

    let result =
        WalletService::adjust_balance(&state, user_id, CurrencyCode::NGN, i64::MAX, Uuid::new_v4())
            .await;
    assert!(matches!(result, Err(ApiError::InvalidAmount(_))));

    let conn = &mut state.db.get().unwrap();
    assert_eq!(
        common::wallet_balance(conn, user_id, CurrencyCode::NGN),
        5_000
    );
}
