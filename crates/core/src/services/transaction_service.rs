use crate::app_state::AppState;
use crate::repositories::TransactionRepository;
use kudipay_primitives::error::ApiError;
use kudipay_primitives::models::dtos::transaction_dto::{TransactionDto, TransactionsResponse};
use uuid::Uuid;

pub struct TransactionService;

impl TransactionService {
    /// Ledger-entry feed for history and reporting consumers.
    pub async fn list_for_user(
        state: &AppState,
        user_id: Uuid,
    ) -> Result<TransactionsResponse, ApiError> {
        let mut conn = state.db.get()?;

        let transactions = TransactionRepository::find_all_by_user(&mut conn, user_id)?;

        Ok(TransactionsResponse {
            transactions: transactions.into_iter().map(TransactionDto::from).collect(),
        })
    }
}
