use axum::extract::State;
use axum::Json;
use kudipay_core::services::bank_verification_service::BankVerificationService;
use kudipay_core::AppState;
use kudipay_primitives::error::{ApiError, ApiErrorResponse};
use kudipay_primitives::models::dtos::bank_dto::{
    VerificationMessageResponse, VerifyDepositsRequest,
};
use std::sync::Arc;
use tracing::error;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/bank_verification/verify",
    tag = "Bank Verification",
    summary = "Confirm the micro-deposit amounts",
    description = "Compares the submitted pair against the pending challenge, in either order. \
                   Three mismatches fail the verification and a new challenge must be initiated. \
                   Challenges expire 3 days after initiation.",
    operation_id = "verifyMicroDeposits",
    request_body = VerifyDepositsRequest,
    responses(
        ( status = 200, description = "Bank account verified", body = VerificationMessageResponse),
        ( status = 401, description = "Amounts do not match; body carries remaining attempts", body = ApiErrorResponse),
        ( status = 403, description = "Attempt limit reached", body = ApiErrorResponse),
        ( status = 404, description = "Bank account or pending challenge not found", body = ApiErrorResponse),
        ( status = 409, description = "Account already verified", body = ApiErrorResponse),
        ( status = 410, description = "Challenge expired", body = ApiErrorResponse),
    ),
)]
pub async fn verify_deposits(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VerifyDepositsRequest>,
) -> Result<Json<VerificationMessageResponse>, ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let res = BankVerificationService::verify(&state, req).await?;

    Ok(Json(res))
}
