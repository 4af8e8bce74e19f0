use crate::error::ApiError;
use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, DbEnum,
    Display, EnumString, ToSchema,
)]
#[ExistingTypePath = "crate::schema::sql_types::CurrencyCode"]
#[strum(serialize_all = "UPPERCASE")]
pub enum CurrencyCode {
    NGN,
    GHS,
    KES,
    ZAR,
    USD,
    GBP,
    EUR,
    CAD,
}

impl CurrencyCode {
    pub fn parse(input: &str) -> Result<Self, ApiError> {
        let normalized = input.trim().to_uppercase();

        CurrencyCode::from_str(&normalized).map_err(|_| ApiError::InvalidCurrency(input.into()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, DbEnum)]
#[ExistingTypePath = "crate::schema::sql_types::TransactionIntent"]
pub enum TransactionIntent {
    Withdrawal,
    TransferOut,
    TransferIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, DbEnum)]
#[ExistingTypePath = "crate::schema::sql_types::PaymentState"]
pub enum PaymentState {
    Pending,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, DbEnum)]
#[ExistingTypePath = "crate::schema::sql_types::WithdrawalState"]
pub enum WithdrawalState {
    Processing,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, DbEnum)]
#[ExistingTypePath = "crate::schema::sql_types::AccountVerificationState"]
pub enum AccountVerificationState {
    Unverified,
    Pending,
    Verified,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, DbEnum)]
#[ExistingTypePath = "crate::schema::sql_types::MicroDepositState"]
pub enum MicroDepositState {
    Pending,
    Verified,
    Expired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        assert_eq!(CurrencyCode::parse("ngn").unwrap(), CurrencyCode::NGN);
        assert_eq!(CurrencyCode::parse(" usd ").unwrap(), CurrencyCode::USD);
        assert_eq!(CurrencyCode::parse("GHS").unwrap(), CurrencyCode::GHS);
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        assert!(CurrencyCode::parse("XYZ").is_err());
        assert!(CurrencyCode::parse("").is_err());
    }
}
