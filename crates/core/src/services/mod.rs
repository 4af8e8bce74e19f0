pub mod bank_account_service;
pub mod bank_verification_service;
pub mod pin_service;
pub mod transaction_service;
pub mod transfer_service;
pub mod wallet_service;
pub mod withdrawal_service;
