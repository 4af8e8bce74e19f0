pub mod add_bank;
pub mod health;
pub mod initiate_verification;
pub mod set_pin;
pub mod transactions;
pub mod transfer;
pub mod user_bank_accounts;
pub mod user_wallets;
pub mod verify_deposits;
pub mod verify_otp;
pub mod verify_pin;
