use crate::handlers::{
    add_bank::__path_add_bank, health::__path_health_check,
    initiate_verification::__path_initiate_verification, set_pin::__path_set_pin,
    transactions::__path_transactions, transfer::__path_transfer,
    user_bank_accounts::__path_user_bank_accounts, user_wallets::__path_user_wallets,
    verify_deposits::__path_verify_deposits, verify_otp::__path_verify_otp,
    verify_pin::__path_verify_pin,
};
use kudipay_primitives::models::dtos::withdrawal_dto::VerifyPinRequest;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        verify_pin, verify_otp, set_pin, transfer,
        initiate_verification, verify_deposits,
        add_bank, user_bank_accounts, user_wallets,
        transactions, health_check
    ),
    components(schemas(VerifyPinRequest)),
    tags(
        (name = "Withdrawal", description = "PIN and passcode gated bank withdrawals"),
        (name = "Transfer", description = "Wallet-to-wallet transfers with conversion"),
        (name = "Bank Verification", description = "Micro-deposit account verification"),
        (name = "Bank Accounts", description = "Bank account management"),
        (name = "Wallets", description = "Wallet balances"),
        (name = "Transactions", description = "Transaction history"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;
