pub mod bank_account;
pub mod currency;
pub mod enum_types;
pub mod transaction;
pub mod transfer;
pub mod verification_token;
pub mod wallet;
pub mod withdrawal;
