use diesel::prelude::*;
use kudipay_primitives::error::ApiError;
use kudipay_primitives::models::entities::bank_account::{BankAccount, NewBankAccount};
use kudipay_primitives::models::entities::enum_types::AccountVerificationState;
use kudipay_primitives::schema::bank_accounts;
use uuid::Uuid;

pub struct BankAccountRepository;

impl BankAccountRepository {
    pub fn create(
        conn: &mut PgConnection,
        new_account: NewBankAccount<'_>,
    ) -> Result<BankAccount, ApiError> {
        diesel::insert_into(bank_accounts::table)
            .values(&new_account)
            .get_result(conn)
            .map_err(ApiError::from)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        account_id: Uuid,
    ) -> Result<BankAccount, ApiError> {
        bank_accounts::table
            .filter(bank_accounts::id.eq(account_id))
            .first::<BankAccount>(conn)
            .optional()?
            .ok_or(ApiError::BankAccountNotFound)
    }

    /// Ownership check folded into the lookup: an account belonging to a
    /// different user is indistinguishable from a missing one.
    pub fn find_by_id_and_user(
        conn: &mut PgConnection,
        account_id: Uuid,
        user_id: Uuid,
    ) -> Result<BankAccount, ApiError> {
        bank_accounts::table
            .filter(bank_accounts::id.eq(account_id))
            .filter(bank_accounts::user_id.eq(user_id))
            .first::<BankAccount>(conn)
            .optional()?
            .ok_or(ApiError::BankAccountNotFound)
    }

    pub fn find_all_by_user(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Vec<BankAccount>, ApiError> {
        bank_accounts::table
            .filter(bank_accounts::user_id.eq(user_id))
            .order(bank_accounts::created_at.desc())
            .load::<BankAccount>(conn)
            .map_err(ApiError::from)
    }

    pub fn count_for_user(conn: &mut PgConnection, user_id: Uuid) -> Result<i64, ApiError> {
        use diesel::dsl::count_star;

        bank_accounts::table
            .filter(bank_accounts::user_id.eq(user_id))
            .select(count_star())
            .first::<i64>(conn)
            .map_err(ApiError::from)
    }

    pub fn clear_default_for_user(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<(), ApiError> {
        diesel::update(
            bank_accounts::table
                .filter(bank_accounts::user_id.eq(user_id))
                .filter(bank_accounts::is_default.eq(true)),
        )
        .set(bank_accounts::is_default.eq(false))
        .execute(conn)?;
        Ok(())
    }

    pub fn set_verification_status(
        conn: &mut PgConnection,
        account_id: Uuid,
        status: AccountVerificationState,
    ) -> Result<(), ApiError> {
        diesel::update(bank_accounts::table.filter(bank_accounts::id.eq(account_id)))
            .set((
                bank_accounts::verification_status.eq(status),
                bank_accounts::updated_at.eq(diesel::dsl::now),
            ))
            .execute(conn)?;
        Ok(())
    }

    /// `is_verified` only ever flips here, after a successful micro-deposit
    /// match. Clients cannot assert it.
    pub fn mark_verified(conn: &mut PgConnection, account_id: Uuid) -> Result<(), ApiError> {
        diesel::update(bank_accounts::table.filter(bank_accounts::id.eq(account_id)))
            .set((
                bank_accounts::is_verified.eq(true),
                bank_accounts::verification_status.eq(AccountVerificationState::Verified),
                bank_accounts::updated_at.eq(diesel::dsl::now),
            ))
            .execute(conn)?;
        Ok(())
    }
}
