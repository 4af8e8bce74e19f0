use crate::models::entities::enum_types::CurrencyCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Amounts everywhere are integers in minor units.

/// Step A of the withdrawal flow: PIN check and passcode issuance.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct VerifyPinRequest {
    pub user_id: Uuid,
    #[validate(length(min = 6, max = 6))]
    pub pin: String,
    #[validate(range(min = 1))]
    pub amount: i64,
    pub bank_account_id: Uuid,
    #[schema(example = "NGN")]
    pub currency: CurrencyCode,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyPinResponse {
    pub success: bool,
    pub message: String,
}

/// Step B: passcode check and the actual fund movement.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct VerifyOtpRequest {
    pub user_id: Uuid,
    #[validate(range(min = 1))]
    pub amount: i64,
    pub bank_account_id: Uuid,
    #[schema(example = "NGN")]
    pub currency: CurrencyCode,
    #[validate(length(min = 6, max = 6))]
    pub otp_code: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyOtpResponse {
    pub success: bool,
    pub reference_number: Uuid,
}
