pub mod bank_account_repository;
pub mod currency_repository;
pub mod otp_repository;
pub mod pin_repository;
pub mod transaction_repository;
pub mod transfer_repository;
pub mod verification_token_repository;
pub mod wallet_repository;
pub mod withdrawal_request_repository;

pub use bank_account_repository::BankAccountRepository;
pub use currency_repository::CurrencyRepository;
pub use otp_repository::OtpRepository;
pub use pin_repository::PinRepository;
pub use transaction_repository::TransactionRepository;
pub use transfer_repository::TransferRepository;
pub use verification_token_repository::VerificationTokenRepository;
pub use wallet_repository::WalletRepository;
pub use withdrawal_request_repository::WithdrawalRequestRepository;
