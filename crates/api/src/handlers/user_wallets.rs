use axum::extract::{Path, State};
use axum::Json;
use kudipay_core::services::wallet_service::WalletService;
use kudipay_core::AppState;
use kudipay_primitives::error::{ApiError, ApiErrorResponse};
use kudipay_primitives::models::dtos::wallet_dto::WalletsResponse;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/wallets/{user_id}",
    tag = "Wallets",
    summary = "List a user's wallets with current balances",
    operation_id = "listWallets",
    params(
        ("user_id" = Uuid, Path, description = "Owner of the wallets"),
    ),
    responses(
        ( status = 200, description = "Wallets for the user", body = WalletsResponse),
        ( status = 500, description = "Server error", body = ApiErrorResponse),
    ),
)]
pub async fn user_wallets(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<WalletsResponse>, ApiError> {
    let res = WalletService::list_wallets(&state, user_id).await?;

    Ok(Json(res))
}
