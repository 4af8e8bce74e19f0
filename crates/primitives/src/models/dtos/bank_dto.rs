use crate::models::entities::bank_account::BankAccount;
use crate::models::entities::enum_types::AccountVerificationState;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AddBankAccountRequest {
    pub user_id: Uuid,
    #[validate(length(min = 3, max = 10))]
    pub bank_code: String,
    #[validate(length(min = 10, max = 10))]
    pub account_number: String,
    #[validate(length(min = 2, max = 100))]
    pub account_name: Option<String>,
    pub is_default: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BankAccountDto {
    pub id: Uuid,
    pub bank_code: String,
    pub account_number: String,
    pub account_name: Option<String>,
    pub is_default: bool,
    pub is_verified: bool,
    pub verification_status: AccountVerificationState,
}

impl From<BankAccount> for BankAccountDto {
    fn from(account: BankAccount) -> Self {
        Self {
            id: account.id,
            bank_code: account.bank_code,
            account_number: account.account_number,
            account_name: account.account_name,
            is_default: account.is_default,
            is_verified: account.is_verified,
            verification_status: account.verification_status,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BankAccountsResponse {
    pub bank_accounts: Vec<BankAccountDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct InitiateVerificationRequest {
    pub bank_account_id: Uuid,
    #[schema(example = "micro_deposit")]
    #[validate(length(min = 1, max = 32))]
    pub method: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct VerifyDepositsRequest {
    pub bank_account_id: Uuid,
    /// Observed deposit amounts in minor units, in either order.
    #[validate(range(min = 1))]
    pub amount1: i32,
    #[validate(range(min = 1))]
    pub amount2: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VerificationMessageResponse {
    pub success: bool,
    pub message: String,
}
