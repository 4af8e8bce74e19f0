use chrono::{DateTime, Utc};
use diesel::prelude::*;
use kudipay_primitives::error::ApiError;
use kudipay_primitives::models::entities::enum_types::MicroDepositState;
use kudipay_primitives::models::entities::verification_token::{
    NewVerificationToken, VerificationToken,
};
use kudipay_primitives::schema::verification_tokens;
use uuid::Uuid;

pub struct VerificationTokenRepository;

impl VerificationTokenRepository {
    pub fn create(
        conn: &mut PgConnection,
        new_token: NewVerificationToken,
    ) -> Result<VerificationToken, ApiError> {
        diesel::insert_into(verification_tokens::table)
            .values(&new_token)
            .get_result(conn)
            .map_err(ApiError::from)
    }

    pub fn find_newest_pending(
        conn: &mut PgConnection,
        bank_account_id: Uuid,
    ) -> Result<Option<VerificationToken>, ApiError> {
        verification_tokens::table
            .filter(verification_tokens::bank_account_id.eq(bank_account_id))
            .filter(verification_tokens::status.eq(MicroDepositState::Pending))
            .order(verification_tokens::created_at.desc())
            .first::<VerificationToken>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    /// Re-initiating verification supersedes any challenge still open for
    /// the account.
    pub fn expire_pending_for_account(
        conn: &mut PgConnection,
        bank_account_id: Uuid,
    ) -> Result<usize, ApiError> {
        diesel::update(
            verification_tokens::table
                .filter(verification_tokens::bank_account_id.eq(bank_account_id))
                .filter(verification_tokens::status.eq(MicroDepositState::Pending)),
        )
        .set(verification_tokens::status.eq(MicroDepositState::Expired))
        .execute(conn)
        .map_err(ApiError::from)
    }

    /// Conditional promotion; the pending guard means two concurrent correct
    /// submissions settle to one winner.
    pub fn mark_verified_if_pending(
        conn: &mut PgConnection,
        token_id: Uuid,
    ) -> Result<bool, ApiError> {
        let updated = diesel::update(
            verification_tokens::table
                .filter(verification_tokens::id.eq(token_id))
                .filter(verification_tokens::status.eq(MicroDepositState::Pending)),
        )
        .set(verification_tokens::status.eq(MicroDepositState::Verified))
        .execute(conn)?;

        Ok(updated == 1)
    }

    pub fn mark_expired(conn: &mut PgConnection, token_id: Uuid) -> Result<(), ApiError> {
        diesel::update(verification_tokens::table.filter(verification_tokens::id.eq(token_id)))
            .set(verification_tokens::status.eq(MicroDepositState::Expired))
            .execute(conn)?;
        Ok(())
    }

    /// Attempts only ever move up; the returned value is the post-increment
    /// count.
    pub fn increment_attempts(
        conn: &mut PgConnection,
        token_id: Uuid,
    ) -> Result<i32, ApiError> {
        diesel::update(verification_tokens::table.filter(verification_tokens::id.eq(token_id)))
            .set(verification_tokens::attempts.eq(verification_tokens::attempts + 1))
            .returning(verification_tokens::attempts)
            .get_result::<i32>(conn)
            .map_err(ApiError::from)
    }

    pub fn expire_all_overdue(
        conn: &mut PgConnection,
        now: DateTime<Utc>,
    ) -> Result<usize, ApiError> {
        diesel::update(
            verification_tokens::table
                .filter(verification_tokens::status.eq(MicroDepositState::Pending))
                .filter(verification_tokens::expires_at.lt(now)),
        )
        .set(verification_tokens::status.eq(MicroDepositState::Expired))
        .execute(conn)
        .map_err(ApiError::from)
    }
}
