use axum::extract::{Path, State};
use axum::Json;
use kudipay_core::services::bank_account_service::BankAccountService;
use kudipay_core::AppState;
use kudipay_primitives::error::{ApiError, ApiErrorResponse};
use kudipay_primitives::models::dtos::bank_dto::BankAccountsResponse;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/bank_accounts/{user_id}",
    tag = "Bank Accounts",
    summary = "List a user's registered bank accounts",
    operation_id = "listBankAccounts",
    params(
        ("user_id" = Uuid, Path, description = "Owner of the accounts"),
    ),
    responses(
        ( status = 200, description = "Accounts for the user", body = BankAccountsResponse),
        ( status = 500, description = "Server error", body = ApiErrorResponse),
    ),
)]
pub async fn user_bank_accounts(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<BankAccountsResponse>, ApiError> {
    let res = BankAccountService::list_user_accounts(&state, user_id).await?;

    Ok(Json(res))
}
