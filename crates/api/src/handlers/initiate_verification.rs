use axum::extract::State;
use axum::Json;
use kudipay_core::services::bank_verification_service::BankVerificationService;
use kudipay_core::AppState;
use kudipay_primitives::error::{ApiError, ApiErrorResponse};
use kudipay_primitives::models::dtos::bank_dto::{
    InitiateVerificationRequest, VerificationMessageResponse,
};
use std::sync::Arc;
use tracing::error;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/bank_verification/initiate",
    tag = "Bank Verification",
    summary = "Start micro-deposit verification for a bank account",
    description = "Sends two small deposits of distinct random amounts (1 to 99 minor units) to the \
                   account. The owner confirms them within 3 days via the verify endpoint. \
                   Re-initiating supersedes any pending challenge for the account.",
    operation_id = "initiateBankVerification",
    request_body = InitiateVerificationRequest,
    responses(
        ( status = 200, description = "Micro-deposits dispatched", body = VerificationMessageResponse),
        ( status = 400, description = "Unsupported verification method", body = ApiErrorResponse),
        ( status = 404, description = "Bank account not found", body = ApiErrorResponse),
        ( status = 409, description = "Account already verified", body = ApiErrorResponse),
    ),
)]
pub async fn initiate_verification(
    State(state): State<Arc<AppState>>,
    Json(req): Json<InitiateVerificationRequest>,
) -> Result<Json<VerificationMessageResponse>, ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let res = BankVerificationService::initiate(&state, req).await?;

    Ok(Json(res))
}
