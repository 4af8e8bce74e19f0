use crate::app_state::AppState;
use crate::repositories::{
    BankAccountRepository, OtpRepository, TransactionRepository, WalletRepository,
    WithdrawalRequestRepository,
};
use crate::services::pin_service::PinService;
use crate::services::wallet_service::WalletService;
use chrono::{Duration, Utc};
use diesel::prelude::*;
use kudipay_primitives::error::ApiError;
use kudipay_primitives::models::dtos::withdrawal_dto::{
    VerifyOtpRequest, VerifyOtpResponse, VerifyPinRequest, VerifyPinResponse,
};
use kudipay_primitives::models::entities::enum_types::{
    PaymentState, TransactionIntent, WithdrawalState,
};
use kudipay_primitives::models::entities::transaction::NewTransaction;
use kudipay_primitives::models::entities::withdrawal::{NewWithdrawalOtp, NewWithdrawalRequest};
use rand::rngs::OsRng;
use rand::Rng;
use serde_json::json;
use sha2::{Digest, Sha256};
use tracing::{error, info, warn};
use uuid::Uuid;

/// Multi-step withdrawal authorizer.
///
/// The flow is AMOUNT_ENTERED -> PIN_VERIFIED -> OTP_ISSUED -> COMPLETED,
/// with every step a discrete, re-enterable request. All progress lives in
/// persisted rows (passcodes, withdrawal requests), never in server memory,
/// so a refreshed client re-derives exactly the server's view. No balance
/// is touched until the single atomic debit at the end.
pub struct WithdrawalService;

impl WithdrawalService {
    /// Step A: check the PIN and issue a single-use passcode bound to the
    /// submitted (amount, bank_account) pair.
    pub async fn verify_pin(
        state: &AppState,
        req: VerifyPinRequest,
    ) -> Result<VerifyPinResponse, ApiError> {
        if req.amount <= 0 {
            return Err(ApiError::InvalidAmount("amount must be positive".into()));
        }

        let mut conn = state.db.get()?;

        let bank_account =
            BankAccountRepository::find_by_id_and_user(&mut conn, req.bank_account_id, req.user_id)?;

        let wallet =
            WalletRepository::find_by_user_and_currency(&mut conn, req.user_id, req.currency)?
                .ok_or(ApiError::WalletNotFound)?;

        if wallet.balance < req.amount {
            return Err(ApiError::InsufficientFunds);
        }

        PinService::verify_pin(&mut conn, req.user_id, &req.pin)?;

        let code = Self::generate_otp_code();
        let code_hash = Self::hash_otp(&code);
        let expires_at = Utc::now() + Duration::minutes(state.config.otp_ttl_minutes);

        conn.transaction::<_, ApiError, _>(|conn| {
            OtpRepository::invalidate_open_for_user(conn, req.user_id)?;
            OtpRepository::create(
                conn,
                NewWithdrawalOtp {
                    user_id: req.user_id,
                    code_hash: &code_hash,
                    amount: req.amount,
                    bank_account_id: bank_account.id,
                    expires_at,
                },
            )?;
            Ok(())
        })?;

        info!(
            user_id = %req.user_id,
            bank_account_id = %bank_account.id,
            "Withdrawal PIN verified, passcode issued"
        );

        Self::dispatch_notification(
            state,
            req.user_id,
            "Your withdrawal passcode",
            format!(
                "Your one-time withdrawal passcode is {}. It expires in {} minutes. \
                 If you did not request a withdrawal, reset your PIN immediately.",
                code, state.config.otp_ttl_minutes
            ),
        );

        Ok(VerifyPinResponse {
            success: true,
            message: "A one-time passcode has been sent to your email".into(),
        })
    }

    /// Step B: consume the passcode and move the funds.
    pub async fn verify_otp_and_withdraw(
        state: &AppState,
        req: VerifyOtpRequest,
    ) -> Result<VerifyOtpResponse, ApiError> {
        let mut conn = state.db.get()?;

        let bank_account =
            BankAccountRepository::find_by_id_and_user(&mut conn, req.bank_account_id, req.user_id)?;

        // The lookup matches code digest AND the frozen (amount, account)
        // binding: a correct code submitted with a different amount fails.
        let code_hash = Self::hash_otp(&req.otp_code);
        let otp = OtpRepository::find_matching_open(
            &mut conn,
            req.user_id,
            &code_hash,
            req.amount,
            bank_account.id,
            Utc::now(),
        )?
        .ok_or(ApiError::InvalidOrExpiredOtp)?;

        if !OtpRepository::consume(&mut conn, otp.id)? {
            // A concurrent submission won the race; this one replays.
            warn!(user_id = %req.user_id, "Passcode already consumed");
            return Err(ApiError::InvalidOrExpiredOtp);
        }

        // Balance may have moved since step A. The passcode stays consumed
        // either way; a failed flow restarts from the PIN step.
        let wallet =
            WalletRepository::find_by_user_and_currency(&mut conn, req.user_id, req.currency)?
                .ok_or(ApiError::WalletNotFound)?;
        if wallet.balance < req.amount {
            return Err(ApiError::InsufficientFunds);
        }

        let reference = Uuid::new_v4();
        let request = WithdrawalRequestRepository::create(
            &mut conn,
            NewWithdrawalRequest {
                user_id: req.user_id,
                bank_account_id: bank_account.id,
                amount: req.amount,
                currency: req.currency,
                reference,
                status: WithdrawalState::Processing,
                pin_verified: true,
                otp_verified: true,
            },
        )?;

        let debit = conn.transaction::<_, ApiError, _>(|conn| {
            WalletService::adjust_balance_in_tx(
                conn,
                req.user_id,
                req.currency,
                -req.amount,
                reference,
            )?;

            TransactionRepository::create(
                conn,
                NewTransaction {
                    user_id: req.user_id,
                    counterparty_id: None,
                    intent: TransactionIntent::Withdrawal,
                    amount: -req.amount,
                    currency: req.currency,
                    txn_state: PaymentState::Completed,
                    reference,
                    description: Some("Wallet withdrawal"),
                    metadata: json!({
                        "bank_code": bank_account.bank_code.clone(),
                        "account_number": bank_account.account_number.clone(),
                        "withdrawal_request_id": request.id,
                    }),
                },
            )?;

            WithdrawalRequestRepository::set_status(conn, request.id, WithdrawalState::Completed)?;
            Ok(())
        });

        if let Err(e) = debit {
            error!(
                user_id = %req.user_id,
                reference = %reference,
                "Withdrawal debit failed: {}",
                e
            );
            // Last consistent state: request marked failed, no balance
            // movement, passcode consumed.
            WithdrawalRequestRepository::set_status(
                &mut conn,
                request.id,
                WithdrawalState::Failed,
            )?;
            return Err(e);
        }

        info!(
            user_id = %req.user_id,
            reference = %reference,
            amount = req.amount,
            "Withdrawal completed"
        );

        Self::dispatch_notification(
            state,
            req.user_id,
            "Withdrawal completed",
            format!(
                "Your withdrawal of {} {} to account {} has been processed. Reference: {}.",
                req.amount, req.currency, bank_account.account_number, reference
            ),
        );

        Ok(VerifyOtpResponse {
            success: true,
            reference_number: reference,
        })
    }

    /// 6-digit code from the OS CSPRNG, zero-padded.
    fn generate_otp_code() -> String {
        let n: u32 = OsRng.gen_range(0..1_000_000);
        format!("{:06}", n)
    }

    fn hash_otp(code: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(code.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Fire-and-forget delivery; the authorization path never awaits it.
    fn dispatch_notification(state: &AppState, user_id: Uuid, subject: &str, body: String) {
        let notifier = state.notifier.clone();
        let profiles = state.profiles.clone();
        let subject = subject.to_string();

        tokio::spawn(async move {
            match profiles.contact(user_id).await {
                Ok(contact) => {
                    if let Err(e) = notifier.send(&contact.email, &subject, &body).await {
                        warn!(user_id = %user_id, "Notification delivery failed: {}", e);
                    }
                }
                Err(e) => warn!(user_id = %user_id, "Contact lookup failed: {}", e),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn otp_codes_are_six_digits() {
        for _ in 0..64 {
            let code = WithdrawalService::generate_otp_code();
            assert_eq!(code.len(), 6);
            assert!(code.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn otp_hash_is_stable_and_code_free() {
        let code = "042917";
        let a = WithdrawalService::hash_otp(code);
        let b = WithdrawalService::hash_otp(code);
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(!a.contains(code));
    }

    #[test]
    fn different_codes_hash_differently() {
        assert_ne!(
            WithdrawalService::hash_otp("000001"),
            WithdrawalService::hash_otp("000002")
        );
    }
}
