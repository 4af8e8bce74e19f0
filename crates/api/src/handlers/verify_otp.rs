use axum::extract::State;
use axum::Json;
use kudipay_core::services::withdrawal_service::WithdrawalService;
use kudipay_core::AppState;
use kudipay_primitives::error::{ApiError, ApiErrorResponse};
use kudipay_primitives::models::dtos::withdrawal_dto::{VerifyOtpRequest, VerifyOtpResponse};
use std::sync::Arc;
use tracing::error;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/withdraw/verify_otp",
    tag = "Withdrawal",
    summary = "Withdrawal step B: verify the passcode and move the funds",
    description = "Consumes the passcode issued by step A (single use, replays fail) and, if the \
                   wallet still covers the amount, debits it exactly once under a fresh reference \
                   number. The (amount, bank account) pair must match the passcode's binding; an OTP \
                   issued for one amount never authorizes another. A failed debit marks the \
                   withdrawal request `failed` and the flow restarts from step A.",
    operation_id = "withdrawVerifyOtp",
    request_body = VerifyOtpRequest,
    responses(
        ( status = 200, description = "Withdrawal completed", body = VerifyOtpResponse),
        ( status = 401, description = "Wrong, expired, or already-used passcode", body = ApiErrorResponse),
        ( status = 402, description = "Balance no longer covers the amount", body = ApiErrorResponse),
        ( status = 404, description = "Bank account or wallet not found for this user", body = ApiErrorResponse),
    ),
)]
pub async fn verify_otp(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VerifyOtpRequest>,
) -> Result<Json<VerifyOtpResponse>, ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let res = WithdrawalService::verify_otp_and_withdraw(&state, req).await?;

    Ok(Json(res))
}
