use axum::extract::State;
use axum::Json;
use kudipay_core::services::pin_service::PinService;
use kudipay_core::AppState;
use kudipay_primitives::error::{ApiError, ApiErrorResponse};
use kudipay_primitives::models::dtos::pin_dto::{SetPinRequest, SetPinResponse};
use std::sync::Arc;
use tracing::error;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/pin",
    tag = "Withdrawal",
    summary = "Set or replace the withdrawal PIN",
    description = "Stores an Argon2id hash of the PIN. The PIN must be exactly 6 digits and must \
                   not be a single repeated digit or a straight ascending/descending run.",
    operation_id = "setWithdrawalPin",
    request_body = SetPinRequest,
    responses(
        ( status = 200, description = "PIN stored", body = SetPinResponse),
        ( status = 400, description = "PIN violates the policy", body = ApiErrorResponse),
    ),
)]
pub async fn set_pin(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SetPinRequest>,
) -> Result<Json<SetPinResponse>, ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let res = PinService::set_pin(&state, req).await?;

    Ok(Json(res))
}
