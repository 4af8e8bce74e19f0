mod common;

use diesel::prelude::*;
use kudipay_core::repositories::CurrencyRepository;
use kudipay_core::services::transfer_service::TransferService;
use kudipay_primitives::error::ApiError;
use kudipay_primitives::models::dtos::transfer_dto::TransferRequest;
use kudipay_primitives::models::entities::enum_types::CurrencyCode;
use kudipay_primitives::schema::transactions;
use serial_test::serial;
use uuid::Uuid;

fn seed_rates(conn: &mut diesel::PgConnection) {
    // Units per base, scaled by 1e6: 1 base = 1500 NGN = 120 GHS.
    CurrencyRepository::upsert(conn, CurrencyCode::NGN, 1_500_000_000).unwrap();
    CurrencyRepository::upsert(conn, CurrencyCode::GHS, 120_000_000).unwrap();
}

#[tokio::test]
#[serial]
async fn ngn_to_ghs_transfer_settles_both_legs() {
    let state = common::create_test_app_state();
    let sender_id = Uuid::new_v4();
    let recipient_id = Uuid::new_v4();

    {
        let conn = &mut state.db.get().unwrap();
        seed_rates(conn);
        common::insert_wallet(conn, sender_id, CurrencyCode::NGN, 100_000);
        common::insert_wallet(conn, recipient_id, CurrencyCode::GHS, 0);
    }

    let res = TransferService::transfer(
        &state,
        TransferRequest {
            sender_id,
            recipient_id,
            amount: 10_000,
            sender_currency: CurrencyCode::NGN,
            recipient_currency: CurrencyCode::GHS,
            description: Some("Lunch money".to_string()),
        },
    )
    .await
    .unwrap();

    assert_eq!(res.amount_sent, 10_000);
    assert_eq!(res.transfer_fee, 100);
    assert_eq!(res.amount_received, 800);
    assert!((res.exchange_rate - 0.08).abs() < 1e-9);

    let conn = &mut state.db.get().unwrap();
    assert_eq!(
        common::wallet_balance(conn, sender_id, CurrencyCode::NGN),
        89_900
    );
    assert_eq!(
        common::wallet_balance(conn, recipient_id, CurrencyCode::GHS),
        800
    );

    // One history row per side, sharing the reference.
    let rows: i64 = transactions::table
        .filter(transactions::reference.eq(res.reference_number))
        .count()
        .get_result(conn)
        .unwrap();
    assert_eq!(rows, 2);
}

#[tokio::test]
#[serial]
async fn insufficient_funds_moves_nothing() {
    let state = common::create_test_app_state();
    let sender_id = Uuid::new_v4();
    let recipient_id = Uuid::new_v4();

    {
        let conn = &mut state.db.get().unwrap();
        seed_rates(conn);
        common::insert_wallet(conn, sender_id, CurrencyCode::NGN, 5_000);
        common::insert_wallet(conn, recipient_id, CurrencyCode::GHS, 0);
    }

    let result = TransferService::transfer(
        &state,
        TransferRequest {
            sender_id,
            recipient_id,
            amount: 10_000,
            sender_currency: CurrencyCode::NGN,
            recipient_currency: CurrencyCode::GHS,
            description: None,
        },
    )
    .await;
    assert!(matches!(result, Err(ApiError::InsufficientFunds)));

    let conn = &mut state.db.get().unwrap();
    assert_eq!(
        common::wallet_balance(conn, sender_id, CurrencyCode::NGN),
        5_000
    );
    assert_eq!(
        common::wallet_balance(conn, recipient_id, CurrencyCode::GHS),
        0
    );
}

#[tokio::test]
#[serial]
async fn transfer_to_self_is_rejected() {
    let state = common::create_test_app_state();
    let user_id = Uuid::new_v4();

    {
        let conn = &mut state.db.get().unwrap();
        seed_rates(conn);
        common::insert_wallet(conn, user_id, CurrencyCode::NGN, 50_000);
    }

    let result = TransferService::transfer(
        &state,
        TransferRequest {
            sender_id: user_id,
            recipient_id: user_id,
            amount: 1_000,
            sender_currency: CurrencyCode::NGN,
            recipient_currency: CurrencyCode::NGN,
            description: None,
        },
    )
    .await;
    assert!(matches!(result, Err(ApiError::SelfTransfer)));

    let conn = &mut state.db.get().unwrap();
    assert_eq!(
        common::wallet_balance(conn, user_id, CurrencyCode::NGN),
        50_000
    );
}

#[tokio::test]
#[serial]
async fn unknown_recipient_is_rejected() {
    let state = common::create_test_app_state();
    let sender_id = Uuid::new_v4();

    {
        let conn = &mut state.db.get().unwrap();
        seed_rates(conn);
        common::insert_wallet(conn, sender_id, CurrencyCode::NGN, 50_000);
    }

    let result = TransferService::transfer(
        &state,
        TransferRequest {
            sender_id,
            recipient_id: Uuid::new_v4(),
            amount: 1_000,
            sender_currency: CurrencyCode::NGN,
            recipient_currency: CurrencyCode::GHS,
            description: None,
        },
    )
    .await;
    assert!(matches!(result, Err(ApiError::RecipientNotFound)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[serial]
async fn opposite_direction_transfers_both_complete() {
    let state = common::create_test_app_state();
    let user_a = Uuid::new_v4();
    let user_b = Uuid::new_v4();

    {
        let conn = &mut state.db.get().unwrap();
        seed_rates(conn);
        common::insert_wallet(conn, user_a, CurrencyCode::NGN, 100_000);
        common::insert_wallet(conn, user_b, CurrencyCode::GHS, 100_000);
    }

    // A pays B in NGN->GHS while B pays A in GHS->NGN. The two touch the
    // same pair of wallets from opposite ends at the same time.
    let s1 = state.clone();
    let a_to_b = tokio::spawn(async move {
        TransferService::transfer(
            &s1,
            TransferRequest {
                sender_id: user_a,
                recipient_id: user_b,
                amount: 10_000,
                sender_currency: CurrencyCode::NGN,
                recipient_currency: CurrencyCode::GHS,
                description: None,
            },
        )
        .await
    });
    let s2 = state.clone();
    let b_to_a = tokio::spawn(async move {
        TransferService::transfer(
            &s2,
            TransferRequest {
                sender_id: user_b,
                recipient_id: user_a,
                amount: 10_000,
                sender_currency: CurrencyCode::GHS,
                recipient_currency: CurrencyCode::NGN,
                description: None,
            },
        )
        .await
    });

    let first = a_to_b.await.unwrap();
    let second = b_to_a.await.unwrap();
    assert!(first.is_ok(), "A->B failed: {:?}", first.err());
    assert!(second.is_ok(), "B->A failed: {:?}", second.err());

    let conn = &mut state.db.get().unwrap();
    // A: -10_100 NGN sent, +125_000 NGN received (10_000 GHS at 12.5).
    assert_eq!(
        common::wallet_balance(conn, user_a, CurrencyCode::NGN),
        214_900
    );
    // B: -10_100 GHS sent, +800 GHS received (10_000 NGN at 0.08).
    assert_eq!(
        common::wallet_balance(conn, user_b, CurrencyCode::GHS),
        90_700
    );
}
