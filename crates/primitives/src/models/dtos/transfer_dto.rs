use crate::models::entities::enum_types::CurrencyCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct TransferRequest {
    pub sender_id: Uuid,
    pub recipient_id: Uuid,
    /// Amount in the sender's currency, minor units. The fee is charged on
    /// top of this.
    #[validate(range(min = 1))]
    pub amount: i64,
    #[schema(example = "NGN")]
    pub sender_currency: CurrencyCode,
    #[schema(example = "GHS")]
    pub recipient_currency: CurrencyCode,
    #[validate(length(max = 140))]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TransferResponse {
    pub success: bool,
    pub reference_number: Uuid,
    pub amount_sent: i64,
    pub amount_received: i64,
    pub exchange_rate: f64,
    pub transfer_fee: i64,
}
