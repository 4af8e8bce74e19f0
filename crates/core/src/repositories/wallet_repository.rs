use diesel::prelude::*;
use kudipay_primitives::error::ApiError;
use kudipay_primitives::models::entities::enum_types::CurrencyCode;
use kudipay_primitives::models::entities::wallet::{
    NewWallet, NewWalletLedgerEntry, Wallet, WalletLedgerEntry,
};
use kudipay_primitives::schema::{wallet_ledger, wallets};
use uuid::Uuid;

pub struct WalletRepository;

impl WalletRepository {
    pub fn find_all_by_user(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Vec<Wallet>, ApiError> {
        wallets::table
            .filter(wallets::user_id.eq(user_id))
            .order(wallets::created_at.asc())
            .load::<Wallet>(conn)
            .map_err(ApiError::from)
    }

    pub fn find_by_user_and_currency(
        conn: &mut PgConnection,
        user_id: Uuid,
        currency: CurrencyCode,
    ) -> Result<Option<Wallet>, ApiError> {
        wallets::table
            .filter(wallets::user_id.eq(user_id))
            .filter(wallets::currency.eq(currency))
            .first::<Wallet>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    /// Row-locked fetch. Every balance mutation goes through this so that
    /// concurrent adjustments on the same (user, currency) key serialize.
    pub fn find_by_user_and_currency_with_lock(
        conn: &mut PgConnection,
        user_id: Uuid,
        currency: CurrencyCode,
    ) -> Result<Wallet, ApiError> {
        wallets::table
            .filter(wallets::user_id.eq(user_id))
            .filter(wallets::currency.eq(currency))
            .for_update()
            .first::<Wallet>(conn)
            .map_err(|e| {
                if matches!(e, diesel::result::Error::NotFound) {
                    ApiError::WalletNotFound
                } else {
                    ApiError::from(e)
                }
            })
    }

    /// Lazily creates the wallet with balance 0, then re-fetches it locked.
    pub fn create_if_not_exists(
        conn: &mut PgConnection,
        user_id: Uuid,
        currency: CurrencyCode,
    ) -> Result<Wallet, ApiError> {
        diesel::insert_into(wallets::table)
            .values(&NewWallet { user_id, currency })
            .on_conflict((wallets::user_id, wallets::currency))
            .do_nothing()
            .execute(conn)?;

        Self::find_by_user_and_currency_with_lock(conn, user_id, currency)
    }

    pub fn set_balance(
        conn: &mut PgConnection,
        wallet_id: Uuid,
        new_balance: i64,
    ) -> Result<(), ApiError> {
        diesel::update(wallets::table.filter(wallets::id.eq(wallet_id)))
            .set((
                wallets::balance.eq(new_balance),
                wallets::updated_at.eq(diesel::dsl::now),
            ))
            .execute(conn)?;
        Ok(())
    }

    pub fn has_any_wallet(conn: &mut PgConnection, user_id: Uuid) -> Result<bool, ApiError> {
        use diesel::dsl::count_star;

        wallets::table
            .filter(wallets::user_id.eq(user_id))
            .select(count_star())
            .first::<i64>(conn)
            .map(|n| n > 0)
            .map_err(ApiError::from)
    }

    pub fn find_ledger_entry(
        conn: &mut PgConnection,
        wallet_id: Uuid,
        reference: Uuid,
    ) -> Result<Option<WalletLedgerEntry>, ApiError> {
        wallet_ledger::table
            .filter(wallet_ledger::wallet_id.eq(wallet_id))
            .filter(wallet_ledger::reference.eq(reference))
            .first::<WalletLedgerEntry>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn add_ledger_entry(
        conn: &mut PgConnection,
        entry: NewWalletLedgerEntry,
    ) -> Result<(), ApiError> {
        diesel::insert_into(wallet_ledger::table)
            .values(entry)
            .execute(conn)?;
        Ok(())
    }
}
