use crate::app_state::AppState;
use crate::repositories::WalletRepository;
use diesel::prelude::*;
use kudipay_primitives::error::ApiError;
use kudipay_primitives::models::entities::enum_types::CurrencyCode;
use kudipay_primitives::models::entities::wallet::NewWalletLedgerEntry;
use kudipay_primitives::models::dtos::wallet_dto::{WalletDto, WalletsResponse};
use tracing::info;
use uuid::Uuid;

pub struct WalletService;

impl WalletService {
    /// Applies a relative balance delta, idempotent on `reference`.
    ///
    /// Must run inside an open database transaction: the row lock taken
    /// here serializes all mutations on the same (user, currency) key, so
    /// the balance check and the write are one atomic unit. A repeated call
    /// with a reference already applied to this wallet is a no-op when the
    /// delta matches and `DuplicateReference` when it does not, which makes
    /// retries after timeouts safe.
    pub fn adjust_balance_in_tx(
        conn: &mut PgConnection,
        user_id: Uuid,
        currency: CurrencyCode,
        delta: i64,
        reference: Uuid,
    ) -> Result<i64, ApiError> {
        if delta == 0 {
            return Err(ApiError::InvalidAmount("delta must be non-zero".into()));
        }

        // Credits create the wallet lazily; debits require it to exist.
        let wallet = if delta > 0 {
            WalletRepository::create_if_not_exists(conn, user_id, currency)?
        } else {
            WalletRepository::find_by_user_and_currency_with_lock(conn, user_id, currency)?
        };

        if let Some(entry) = WalletRepository::find_ledger_entry(conn, wallet.id, reference)? {
            if entry.amount == delta {
                info!(
                    wallet_id = %wallet.id,
                    reference = %reference,
                    "Ledger adjustment already applied, returning current balance"
                );
                return Ok(wallet.balance);
            }
            return Err(ApiError::DuplicateReference);
        }

        let new_balance = wallet
            .balance
            .checked_add(delta)
            .ok_or_else(|| ApiError::InvalidAmount("balance adjustment overflows".into()))?;
        if new_balance < 0 {
            return Err(ApiError::InsufficientFunds);
        }

        WalletRepository::set_balance(conn, wallet.id, new_balance)?;
        WalletRepository::add_ledger_entry(
            conn,
            NewWalletLedgerEntry {
                wallet_id: wallet.id,
                amount: delta,
                reference,
            },
        )?;

        Ok(new_balance)
    }

    /// Standalone adjustment wrapped in its own transaction.
    pub async fn adjust_balance(
        state: &AppState,
        user_id: Uuid,
        currency: CurrencyCode,
        delta: i64,
        reference: Uuid,
    ) -> Result<i64, ApiError> {
        let mut conn = state.db.get()?;

        conn.transaction::<i64, ApiError, _>(|conn| {
            Self::adjust_balance_in_tx(conn, user_id, currency, delta, reference)
        })
    }

    pub async fn list_wallets(
        state: &AppState,
        user_id: Uuid,
    ) -> Result<WalletsResponse, ApiError> {
        let mut conn = state.db.get()?;

        let wallets = WalletRepository::find_all_by_user(&mut conn, user_id)?;

        Ok(WalletsResponse {
            wallets: wallets.into_iter().map(WalletDto::from).collect(),
        })
    }
}
