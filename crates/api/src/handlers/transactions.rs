use axum::extract::{Path, State};
use axum::Json;
use kudipay_core::services::transaction_service::TransactionService;
use kudipay_core::AppState;
use kudipay_primitives::error::{ApiError, ApiErrorResponse};
use kudipay_primitives::models::dtos::transaction_dto::TransactionsResponse;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/transactions/{user_id}",
    tag = "Transactions",
    summary = "List a user's transaction history, newest first",
    operation_id = "listTransactions",
    params(
        ("user_id" = Uuid, Path, description = "Owner of the transactions"),
    ),
    responses(
        ( status = 200, description = "Transactions for the user", body = TransactionsResponse),
        ( status = 500, description = "Server error", body = ApiErrorResponse),
    ),
)]
pub async fn transactions(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<TransactionsResponse>, ApiError> {
    let res = TransactionService::list_for_user(&state, user_id).await?;

    Ok(Json(res))
}
