use diesel::prelude::*;
use kudipay_primitives::error::ApiError;
use kudipay_primitives::models::entities::transaction::{NewTransaction, Transaction};
use kudipay_primitives::schema::transactions;
use uuid::Uuid;

pub struct TransactionRepository;

impl TransactionRepository {
    pub fn create(
        conn: &mut PgConnection,
        new_tx: NewTransaction<'_>,
    ) -> Result<Transaction, ApiError> {
        diesel::insert_into(transactions::table)
            .values(&new_tx)
            .get_result(conn)
            .map_err(ApiError::from)
    }

    pub fn find_all_by_user(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Vec<Transaction>, ApiError> {
        transactions::table
            .filter(transactions::user_id.eq(user_id))
            .order(transactions::created_at.desc())
            .load::<Transaction>(conn)
            .map_err(ApiError::from)
    }
}
