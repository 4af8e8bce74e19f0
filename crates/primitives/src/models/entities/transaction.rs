use crate::models::entities::enum_types::{CurrencyCode, PaymentState, TransactionIntent};
use chrono::{DateTime, Utc};
use diesel::{Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

/// History record consumed by reporting collaborators.
#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = crate::schema::transactions)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub counterparty_id: Option<Uuid>,
    pub intent: TransactionIntent,
    pub amount: i64,
    pub currency: CurrencyCode,
    pub txn_state: PaymentState,
    pub reference: Uuid,
    pub description: Option<String>,
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::transactions)]
pub struct NewTransaction<'a> {
    pub user_id: Uuid,
    pub counterparty_id: Option<Uuid>,
    pub intent: TransactionIntent,
    pub amount: i64,
    pub currency: CurrencyCode,
    pub txn_state: PaymentState,
    pub reference: Uuid,
    pub description: Option<&'a str>,
    pub metadata: serde_json::Value,
}
