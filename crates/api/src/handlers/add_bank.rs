use axum::extract::State;
use axum::Json;
use kudipay_core::services::bank_account_service::BankAccountService;
use kudipay_core::AppState;
use kudipay_primitives::error::{ApiError, ApiErrorResponse};
use kudipay_primitives::models::dtos::bank_dto::{AddBankAccountRequest, BankAccountDto};
use std::sync::Arc;
use tracing::error;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/bank_accounts",
    tag = "Bank Accounts",
    summary = "Register a bank account for withdrawals",
    description = "The account starts unverified; a user's first account becomes the default.",
    operation_id = "addBankAccount",
    request_body = AddBankAccountRequest,
    responses(
        ( status = 200, description = "Bank account registered", body = BankAccountDto),
        ( status = 400, description = "Validation failed", body = ApiErrorResponse),
    ),
)]
pub async fn add_bank(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddBankAccountRequest>,
) -> Result<Json<BankAccountDto>, ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let res = BankAccountService::add_account(&state, req).await?;

    Ok(Json(res))
}
