use diesel::prelude::*;
use kudipay_primitives::error::ApiError;
use kudipay_primitives::models::entities::enum_types::WithdrawalState;
use kudipay_primitives::models::entities::withdrawal::{NewWithdrawalRequest, WithdrawalRequest};
use kudipay_primitives::schema::withdrawal_requests;
use uuid::Uuid;

pub struct WithdrawalRequestRepository;

impl WithdrawalRequestRepository {
    pub fn create(
        conn: &mut PgConnection,
        new_request: NewWithdrawalRequest,
    ) -> Result<WithdrawalRequest, ApiError> {
        diesel::insert_into(withdrawal_requests::table)
            .values(&new_request)
            .get_result(conn)
            .map_err(ApiError::from)
    }

    pub fn set_status(
        conn: &mut PgConnection,
        request_id: Uuid,
        status: WithdrawalState,
    ) -> Result<(), ApiError> {
        diesel::update(withdrawal_requests::table.filter(withdrawal_requests::id.eq(request_id)))
            .set((
                withdrawal_requests::status.eq(status),
                withdrawal_requests::updated_at.eq(diesel::dsl::now),
            ))
            .execute(conn)?;
        Ok(())
    }
}
