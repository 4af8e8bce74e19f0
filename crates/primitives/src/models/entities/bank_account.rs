use crate::models::entities::enum_types::AccountVerificationState;
use chrono::{DateTime, Utc};
use diesel::{Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = crate::schema::bank_accounts)]
pub struct BankAccount {
    pub id: Uuid,
    pub user_id: Uuid,
    pub bank_code: String,
    pub account_number: String,
    pub account_name: Option<String>,
    pub is_default: bool,
    pub is_verified: bool,
    pub verification_status: AccountVerificationState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::bank_accounts)]
pub struct NewBankAccount<'a> {
    pub user_id: Uuid,
    pub bank_code: &'a str,
    pub account_number: &'a str,
    pub account_name: Option<&'a str>,
    pub is_default: bool,
}
