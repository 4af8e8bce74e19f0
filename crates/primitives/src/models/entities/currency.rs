use crate::models::entities::enum_types::CurrencyCode;
use chrono::{DateTime, Utc};
use diesel::{Insertable, Queryable};
use serde::Serialize;

/// FX reference row. `rate_to_base_scaled` is how many units of this
/// currency one base unit buys, scaled by 1_000_000 (e.g. 1 base = 1500 NGN
/// → 1_500_000_000).
#[derive(Debug, Clone, Queryable, Serialize)]
#[diesel(table_name = crate::schema::currencies)]
pub struct CurrencyRate {
    pub code: CurrencyCode,
    pub rate_to_base_scaled: i64,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::currencies)]
pub struct NewCurrencyRate {
    pub code: CurrencyCode,
    pub rate_to_base_scaled: i64,
}
