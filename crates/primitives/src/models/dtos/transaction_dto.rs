use crate::models::entities::enum_types::{CurrencyCode, PaymentState, TransactionIntent};
use crate::models::entities::transaction::Transaction;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Shape of a ledger event as consumed by history and reporting UIs.
#[derive(Debug, Serialize, ToSchema)]
pub struct TransactionDto {
    pub user_id: Uuid,
    pub amount: i64,
    pub currency: CurrencyCode,
    #[serde(rename = "type")]
    pub intent: TransactionIntent,
    pub status: PaymentState,
    pub reference_number: Uuid,
    pub metadata: serde_json::Value,
}

impl From<Transaction> for TransactionDto {
    fn from(tx: Transaction) -> Self {
        Self {
            user_id: tx.user_id,
            amount: tx.amount,
            currency: tx.currency,
            intent: tx.intent,
            status: tx.txn_state,
            reference_number: tx.reference,
            metadata: tx.metadata,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TransactionsResponse {
    pub transactions: Vec<TransactionDto>,
}
