use axum::extract::State;
use axum::Json;
use kudipay_core::services::withdrawal_service::WithdrawalService;
use kudipay_core::AppState;
use kudipay_primitives::error::{ApiError, ApiErrorResponse};
use kudipay_primitives::models::dtos::withdrawal_dto::{VerifyPinRequest, VerifyPinResponse};
use std::sync::Arc;
use tracing::error;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/withdraw/verify_pin",
    tag = "Withdrawal",
    summary = "Withdrawal step A: verify PIN and issue a one-time passcode",
    description = "Checks the user's withdrawal PIN against the submitted amount and bank account. \
                   On success a single-use, 10-minute passcode bound to exactly this (amount, bank account) \
                   pair is emailed out-of-band. The response never contains the passcode. \
                   No balance is moved by this step.",
    operation_id = "withdrawVerifyPin",
    request_body = VerifyPinRequest,
    responses(
        ( status = 200, description = "PIN accepted, passcode dispatched", body = VerifyPinResponse),
        ( status = 400, description = "Invalid amount, unsupported currency, or no PIN set", body = ApiErrorResponse),
        ( status = 401, description = "PIN mismatch", body = ApiErrorResponse),
        ( status = 402, description = "Amount exceeds current wallet balance", body = ApiErrorResponse),
        ( status = 404, description = "Bank account or wallet not found for this user", body = ApiErrorResponse),
        ( status = 429, description = "Too many attempts", body = ApiErrorResponse),
    ),
)]
pub async fn verify_pin(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VerifyPinRequest>,
) -> Result<Json<VerifyPinResponse>, ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let res = WithdrawalService::verify_pin(&state, req).await?;

    Ok(Json(res))
}
