pub mod bank_dto;
pub mod health_dto;
pub mod pin_dto;
pub mod transaction_dto;
pub mod transfer_dto;
pub mod wallet_dto;
pub mod withdrawal_dto;
