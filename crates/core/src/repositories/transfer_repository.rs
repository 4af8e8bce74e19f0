use diesel::prelude::*;
use kudipay_primitives::error::ApiError;
use kudipay_primitives::models::entities::transfer::{MoneyTransfer, NewMoneyTransfer};
use kudipay_primitives::schema::transfers;

pub struct TransferRepository;

impl TransferRepository {
    pub fn create(
        conn: &mut PgConnection,
        new_transfer: NewMoneyTransfer<'_>,
    ) -> Result<MoneyTransfer, ApiError> {
        diesel::insert_into(transfers::table)
            .values(&new_transfer)
            .get_result(conn)
            .map_err(ApiError::from)
    }
}
