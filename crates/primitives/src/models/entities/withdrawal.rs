use crate::models::entities::enum_types::{CurrencyCode, WithdrawalState};
use chrono::{DateTime, Utc};
use diesel::{Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

/// Stored withdrawal PIN. The plaintext is never persisted; `pin_hash` is
/// an Argon2id digest.
#[derive(Debug, Clone, Queryable, Identifiable)]
#[diesel(table_name = crate::schema::withdrawal_pins)]
#[diesel(primary_key(user_id))]
pub struct WithdrawalPin {
    pub user_id: Uuid,
    pub pin_hash: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::withdrawal_pins)]
pub struct NewWithdrawalPin<'a> {
    pub user_id: Uuid,
    pub pin_hash: &'a str,
}

/// Single-use passcode bound to the (amount, bank_account) pair it was
/// issued for. The binding is frozen at issuance and cannot be substituted
/// at verification time.
#[derive(Debug, Clone, Queryable, Identifiable)]
#[diesel(table_name = crate::schema::withdrawal_otps)]
pub struct WithdrawalOtp {
    pub id: Uuid,
    pub user_id: Uuid,
    pub code_hash: String,
    pub amount: i64,
    pub bank_account_id: Uuid,
    pub expires_at: DateTime<Utc>,
    pub used: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::withdrawal_otps)]
pub struct NewWithdrawalOtp<'a> {
    pub user_id: Uuid,
    pub code_hash: &'a str,
    pub amount: i64,
    pub bank_account_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = crate::schema::withdrawal_requests)]
pub struct WithdrawalRequest {
    pub id: Uuid,
    pub user_id: Uuid,
    pub bank_account_id: Uuid,
    pub amount: i64,
    pub currency: CurrencyCode,
    pub reference: Uuid,
    pub status: WithdrawalState,
    pub pin_verified: bool,
    pub otp_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::withdrawal_requests)]
pub struct NewWithdrawalRequest {
    pub user_id: Uuid,
    pub bank_account_id: Uuid,
    pub amount: i64,
    pub currency: CurrencyCode,
    pub reference: Uuid,
    pub status: WithdrawalState,
    pub pin_verified: bool,
    pub otp_verified: bool,
}
