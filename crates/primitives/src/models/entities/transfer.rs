use crate::models::entities::enum_types::{CurrencyCode, PaymentState};
use chrono::{DateTime, Utc};
use diesel::{Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

/// Completed wallet-to-wallet transfer. Immutable once written; the shared
/// `reference` correlates the two ledger legs it caused.
#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = crate::schema::transfers)]
pub struct MoneyTransfer {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub recipient_id: Uuid,
    pub sender_currency: CurrencyCode,
    pub recipient_currency: CurrencyCode,
    pub amount_sent: i64,
    pub amount_received: i64,
    pub exchange_rate_scaled: i64,
    pub fee: i64,
    pub reference: Uuid,
    pub status: PaymentState,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::transfers)]
pub struct NewMoneyTransfer<'a> {
    pub sender_id: Uuid,
    pub recipient_id: Uuid,
    pub sender_currency: CurrencyCode,
    pub recipient_currency: CurrencyCode,
    pub amount_sent: i64,
    pub amount_received: i64,
    pub exchange_rate_scaled: i64,
    pub fee: i64,
    pub reference: Uuid,
    pub status: PaymentState,
    pub description: Option<&'a str>,
}
