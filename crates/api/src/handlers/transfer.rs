use axum::extract::State;
use axum::Json;
use kudipay_core::services::transfer_service::TransferService;
use kudipay_core::AppState;
use kudipay_primitives::error::{ApiError, ApiErrorResponse};
use kudipay_primitives::models::dtos::transfer_dto::{TransferRequest, TransferResponse};
use std::sync::Arc;
use tracing::error;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/transfer",
    tag = "Transfer",
    summary = "Wallet-to-wallet transfer with currency conversion",
    description = "Debits the sender's wallet by amount plus a 1% fee and credits the recipient's \
                   wallet with the converted amount, atomically. Conversion uses the stored \
                   per-currency rates; the converted amount is truncated toward zero. The recipient \
                   wallet is created on the fly if the recipient exists but holds no wallet in the \
                   target currency.",
    operation_id = "walletTransfer",
    request_body = TransferRequest,
    responses(
        ( status = 200, description = "Transfer completed", body = TransferResponse),
        ( status = 400, description = "Invalid amount, unsupported currency, or sender equals recipient", body = ApiErrorResponse),
        ( status = 402, description = "Sender balance cannot cover amount plus fee", body = ApiErrorResponse),
        ( status = 404, description = "Recipient unknown or sender wallet missing", body = ApiErrorResponse),
    ),
)]
pub async fn transfer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TransferRequest>,
) -> Result<Json<TransferResponse>, ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let res = TransferService::transfer(&state, req).await?;

    Ok(Json(res))
}
