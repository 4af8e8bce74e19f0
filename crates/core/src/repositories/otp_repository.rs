use chrono::{DateTime, Utc};
use diesel::prelude::*;
use kudipay_primitives::error::ApiError;
use kudipay_primitives::models::entities::withdrawal::{NewWithdrawalOtp, WithdrawalOtp};
use kudipay_primitives::schema::withdrawal_otps;
use uuid::Uuid;

pub struct OtpRepository;

impl OtpRepository {
    pub fn create(
        conn: &mut PgConnection,
        new_otp: NewWithdrawalOtp,
    ) -> Result<WithdrawalOtp, ApiError> {
        diesel::insert_into(withdrawal_otps::table)
            .values(&new_otp)
            .get_result(conn)
            .map_err(ApiError::from)
    }

    /// A user holds at most one live passcode: issuing a new one burns any
    /// prior unused codes.
    pub fn invalidate_open_for_user(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<usize, ApiError> {
        diesel::update(
            withdrawal_otps::table
                .filter(withdrawal_otps::user_id.eq(user_id))
                .filter(withdrawal_otps::used.eq(false)),
        )
        .set(withdrawal_otps::used.eq(true))
        .execute(conn)
        .map_err(ApiError::from)
    }

    /// Newest unused, unexpired passcode matching both the code digest and
    /// the exact (amount, bank_account) binding it was issued for.
    pub fn find_matching_open(
        conn: &mut PgConnection,
        user_id: Uuid,
        code_hash: &str,
        amount: i64,
        bank_account_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Option<WithdrawalOtp>, ApiError> {
        withdrawal_otps::table
            .filter(withdrawal_otps::user_id.eq(user_id))
            .filter(withdrawal_otps::code_hash.eq(code_hash))
            .filter(withdrawal_otps::amount.eq(amount))
            .filter(withdrawal_otps::bank_account_id.eq(bank_account_id))
            .filter(withdrawal_otps::used.eq(false))
            .filter(withdrawal_otps::expires_at.gt(now))
            .order(withdrawal_otps::created_at.desc())
            .first::<WithdrawalOtp>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    /// Single-use consumption. The `used = false` guard makes concurrent
    /// submissions of the same code race to exactly one winner.
    pub fn consume(conn: &mut PgConnection, otp_id: Uuid) -> Result<bool, ApiError> {
        let updated = diesel::update(
            withdrawal_otps::table
                .filter(withdrawal_otps::id.eq(otp_id))
                .filter(withdrawal_otps::used.eq(false)),
        )
        .set(withdrawal_otps::used.eq(true))
        .execute(conn)?;

        Ok(updated == 1)
    }

    pub fn delete_expired_or_used(
        conn: &mut PgConnection,
        now: DateTime<Utc>,
    ) -> Result<usize, ApiError> {
        diesel::delete(
            withdrawal_otps::table.filter(
                withdrawal_otps::used
                    .eq(true)
                    .or(withdrawal_otps::expires_at.lt(now)),
            ),
        )
        .execute(conn)
        .map_err(ApiError::from)
    }
}
