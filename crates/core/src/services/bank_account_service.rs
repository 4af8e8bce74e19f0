use crate::app_state::AppState;
use crate::repositories::BankAccountRepository;
use diesel::prelude::*;
use kudipay_primitives::error::ApiError;
use kudipay_primitives::models::dtos::bank_dto::{
    AddBankAccountRequest, BankAccountDto, BankAccountsResponse,
};
use kudipay_primitives::models::entities::bank_account::NewBankAccount;
use tracing::info;
use uuid::Uuid;

pub struct BankAccountService;

impl BankAccountService {
    /// Links a bank account. It starts unverified; only the micro-deposit
    /// flow can promote it to a trusted withdrawal destination.
    pub async fn add_account(
        state: &AppState,
        req: AddBankAccountRequest,
    ) -> Result<BankAccountDto, ApiError> {
        let mut conn = state.db.get()?;

        let account = conn.transaction::<_, ApiError, _>(|conn| {
            let existing = BankAccountRepository::count_for_user(conn, req.user_id)?;
            let make_default = req.is_default.unwrap_or(false) || existing == 0;

            if make_default {
                BankAccountRepository::clear_default_for_user(conn, req.user_id)?;
            }

            BankAccountRepository::create(
                conn,
                NewBankAccount {
                    user_id: req.user_id,
                    bank_code: &req.bank_code,
                    account_number: &req.account_number,
                    account_name: req.account_name.as_deref(),
                    is_default: make_default,
                },
            )
        })?;

        info!(
            user_id = %req.user_id,
            bank_account_id = %account.id,
            "Bank account linked"
        );

        Ok(BankAccountDto::from(account))
    }

    pub async fn list_user_accounts(
        state: &AppState,
        user_id: Uuid,
    ) -> Result<BankAccountsResponse, ApiError> {
        let mut conn = state.db.get()?;

        let accounts = BankAccountRepository::find_all_by_user(&mut conn, user_id)?;

        Ok(BankAccountsResponse {
            bank_accounts: accounts.into_iter().map(BankAccountDto::from).collect(),
        })
    }
}
