use crate::models::entities::enum_types::MicroDepositState;
use chrono::{DateTime, Utc};
use diesel::{Identifiable, Insertable, Queryable};
use uuid::Uuid;

/// Micro-deposit challenge for one bank account. `amount_one` and
/// `amount_two` are distinct values in minor units (1..=99); they are never
/// returned over the API.
#[derive(Debug, Clone, Queryable, Identifiable)]
#[diesel(table_name = crate::schema::verification_tokens)]
pub struct VerificationToken {
    pub id: Uuid,
    pub bank_account_id: Uuid,
    pub amount_one: i32,
    pub amount_two: i32,
    pub attempts: i32,
    pub max_attempts: i32,
    pub status: MicroDepositState,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::verification_tokens)]
pub struct NewVerificationToken {
    pub bank_account_id: Uuid,
    pub amount_one: i32,
    pub amount_two: i32,
    pub max_attempts: i32,
    pub expires_at: DateTime<Utc>,
}
