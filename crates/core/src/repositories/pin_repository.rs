use diesel::prelude::*;
use kudipay_primitives::error::ApiError;
use kudipay_primitives::models::entities::withdrawal::{NewWithdrawalPin, WithdrawalPin};
use kudipay_primitives::schema::withdrawal_pins;
use uuid::Uuid;

pub struct PinRepository;

impl PinRepository {
    pub fn find_by_user(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Option<WithdrawalPin>, ApiError> {
        withdrawal_pins::table
            .filter(withdrawal_pins::user_id.eq(user_id))
            .first::<WithdrawalPin>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn upsert(conn: &mut PgConnection, user_id: Uuid, pin_hash: &str) -> Result<(), ApiError> {
        diesel::insert_into(withdrawal_pins::table)
            .values(&NewWithdrawalPin { user_id, pin_hash })
            .on_conflict(withdrawal_pins::user_id)
            .do_update()
            .set((
                withdrawal_pins::pin_hash.eq(pin_hash),
                withdrawal_pins::updated_at.eq(diesel::dsl::now),
            ))
            .execute(conn)?;
        Ok(())
    }
}
