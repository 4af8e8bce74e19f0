use diesel::prelude::*;
use kudipay_primitives::error::ApiError;
use kudipay_primitives::models::entities::currency::{CurrencyRate, NewCurrencyRate};
use kudipay_primitives::models::entities::enum_types::CurrencyCode;
use kudipay_primitives::schema::currencies;

pub struct CurrencyRepository;

impl CurrencyRepository {
    pub fn find(
        conn: &mut PgConnection,
        code: CurrencyCode,
    ) -> Result<Option<CurrencyRate>, ApiError> {
        currencies::table
            .filter(currencies::code.eq(code))
            .first::<CurrencyRate>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn upsert(
        conn: &mut PgConnection,
        code: CurrencyCode,
        rate_to_base_scaled: i64,
    ) -> Result<(), ApiError> {
        diesel::insert_into(currencies::table)
            .values(&NewCurrencyRate {
                code,
                rate_to_base_scaled,
            })
            .on_conflict(currencies::code)
            .do_update()
            .set((
                currencies::rate_to_base_scaled.eq(rate_to_base_scaled),
                currencies::updated_at.eq(diesel::dsl::now),
            ))
            .execute(conn)?;
        Ok(())
    }

    pub fn count(conn: &mut PgConnection) -> Result<i64, ApiError> {
        use diesel::dsl::count_star;

        currencies::table
            .select(count_star())
            .first::<i64>(conn)
            .map_err(ApiError::from)
    }
}
