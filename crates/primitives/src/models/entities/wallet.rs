use crate::models::entities::enum_types::CurrencyCode;
use chrono::{DateTime, Utc};
use diesel::{Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = crate::schema::wallets)]
pub struct Wallet {
    pub id: Uuid,
    pub user_id: Uuid,
    pub currency: CurrencyCode,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::wallets)]
pub struct NewWallet {
    pub user_id: Uuid,
    pub currency: CurrencyCode,
}

/// One immutable balance-affecting event. `reference` is the idempotency
/// key: a (wallet, reference) pair is applied at most once.
#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = crate::schema::wallet_ledger)]
pub struct WalletLedgerEntry {
    pub id: Uuid,
    pub wallet_id: Uuid,
    pub amount: i64,
    pub reference: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::wallet_ledger)]
pub struct NewWalletLedgerEntry {
    pub wallet_id: Uuid,
    pub amount: i64,
    pub reference: Uuid,
}
