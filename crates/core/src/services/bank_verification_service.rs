use crate::app_state::AppState;
use crate::repositories::{BankAccountRepository, VerificationTokenRepository};
use chrono::{Duration, Utc};
use diesel::prelude::*;
use kudipay_primitives::error::ApiError;
use kudipay_primitives::models::dtos::bank_dto::{
    InitiateVerificationRequest, VerificationMessageResponse, VerifyDepositsRequest,
};
use kudipay_primitives::models::entities::enum_types::AccountVerificationState;
use kudipay_primitives::models::entities::verification_token::NewVerificationToken;
use rand::rngs::OsRng;
use rand::Rng;
use tracing::{info, warn};
use uuid::Uuid;

const MICRO_DEPOSIT_METHOD: &str = "micro_deposit";

/// Bank account ownership proof via two small randomized deposits.
///
/// The service only records the expected amounts; the deposits themselves
/// travel over external rails. No wallet balance is ever touched here.
pub struct BankVerificationService;

impl BankVerificationService {
    pub async fn initiate(
        state: &AppState,
        req: InitiateVerificationRequest,
    ) -> Result<VerificationMessageResponse, ApiError> {
        if req.method != MICRO_DEPOSIT_METHOD {
            return Err(ApiError::UnsupportedMethod(req.method));
        }

        let mut conn = state.db.get()?;

        let account = BankAccountRepository::find_by_id(&mut conn, req.bank_account_id)?;
        if account.is_verified {
            return Err(ApiError::AlreadyVerified);
        }

        let (amount_one, amount_two) = Self::generate_challenge_amounts();
        let expires_at = Utc::now() + Duration::days(state.config.micro_deposit_expiry_days);
        let max_attempts = state.config.micro_deposit_max_attempts;

        conn.transaction::<_, ApiError, _>(|conn| {
            VerificationTokenRepository::expire_pending_for_account(conn, account.id)?;
            VerificationTokenRepository::create(
                conn,
                NewVerificationToken {
                    bank_account_id: account.id,
                    amount_one,
                    amount_two,
                    max_attempts,
                    expires_at,
                },
            )?;
            BankAccountRepository::set_verification_status(
                conn,
                account.id,
                AccountVerificationState::Pending,
            )?;
            Ok(())
        })?;

        info!(
            bank_account_id = %account.id,
            "Micro-deposit verification initiated"
        );

        Ok(VerificationMessageResponse {
            success: true,
            message: format!(
                "Two small deposits are on their way to account {}. \
                 Confirm both amounts within {} days to verify the account.",
                account.account_number, state.config.micro_deposit_expiry_days
            ),
        })
    }

    pub async fn verify(
        state: &AppState,
        req: VerifyDepositsRequest,
    ) -> Result<VerificationMessageResponse, ApiError> {
        let mut conn = state.db.get()?;

        let account = BankAccountRepository::find_by_id(&mut conn, req.bank_account_id)?;
        if account.is_verified {
            return Err(ApiError::AlreadyVerified);
        }

        let token = VerificationTokenRepository::find_newest_pending(&mut conn, account.id)?
            .ok_or(ApiError::NoPendingToken)?;

        if Utc::now() > token.expires_at {
            VerificationTokenRepository::mark_expired(&mut conn, token.id)?;
            return Err(ApiError::VerificationExpired);
        }

        // Exhaustion wins over correctness: once attempts are spent, even
        // the right amounts no longer verify.
        if token.attempts >= token.max_attempts {
            return Err(ApiError::MaxAttemptsExceeded);
        }

        if !Self::amounts_match(
            (token.amount_one, token.amount_two),
            (req.amount1, req.amount2),
        ) {
            // The attempt bump and the terminal status flip commit together;
            // an error between them must not strand the token mid-state.
            let attempts = conn.transaction::<_, ApiError, _>(|conn| {
                let attempts = VerificationTokenRepository::increment_attempts(conn, token.id)?;
                if token.max_attempts - attempts <= 0 {
                    BankAccountRepository::set_verification_status(
                        conn,
                        account.id,
                        AccountVerificationState::Failed,
                    )?;
                }
                Ok(attempts)
            })?;
            let remaining = (token.max_attempts - attempts).max(0);

            warn!(
                bank_account_id = %account.id,
                attempts,
                "Micro-deposit amounts did not match"
            );

            return Err(ApiError::AmountMismatch {
                remaining_attempts: remaining,
            });
        }

        // Token promotion and the account flag flip in one transaction, so
        // a burned token always comes with a verified account.
        let promoted = conn.transaction::<_, ApiError, _>(|conn| {
            if !VerificationTokenRepository::mark_verified_if_pending(conn, token.id)? {
                return Ok(false);
            }
            BankAccountRepository::mark_verified(conn, account.id)?;
            Ok(true)
        })?;
        if !promoted {
            // Lost a race with a concurrent correct submission.
            return Err(ApiError::NoPendingToken);
        }

        info!(bank_account_id = %account.id, "Bank account verified");

        Self::notify_owner(state, account.user_id, account.account_number.clone());

        Ok(VerificationMessageResponse {
            success: true,
            message: "Bank account verified".into(),
        })
    }

    /// Two distinct amounts in minor units, 1..=99, from the OS CSPRNG.
    fn generate_challenge_amounts() -> (i32, i32) {
        let first: i32 = OsRng.gen_range(1..=99);
        loop {
            let second: i32 = OsRng.gen_range(1..=99);
            if second != first {
                return (first, second);
            }
        }
    }

    /// Order-independent set equality, and the submitted pair itself must
    /// be two different values: `(23, 23)` never matches even if 23 is one
    /// of the stored amounts.
    fn amounts_match(stored: (i32, i32), submitted: (i32, i32)) -> bool {
        if submitted.0 == submitted.1 {
            return false;
        }
        (submitted.0 == stored.0 && submitted.1 == stored.1)
            || (submitted.0 == stored.1 && submitted.1 == stored.0)
    }

    fn notify_owner(state: &AppState, user_id: Uuid, account_number: String) {
        let notifier = state.notifier.clone();
        let profiles = state.profiles.clone();

        tokio::spawn(async move {
            if let Ok(contact) = profiles.contact(user_id).await {
                let body = format!(
                    "Your bank account ending {} is now verified for withdrawals.",
                    &account_number[account_number.len().saturating_sub(4)..]
                );
                if let Err(e) = notifier
                    .send(&contact.email, "Bank account verified", &body)
                    .await
                {
                    warn!(user_id = %user_id, "Notification delivery failed: {}", e);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn challenge_amounts_are_distinct_and_in_range() {
        for _ in 0..128 {
            let (a, b) = BankVerificationService::generate_challenge_amounts();
            assert_ne!(a, b);
            assert!((1..=99).contains(&a));
            assert!((1..=99).contains(&b));
        }
    }

    #[test]
    fn match_is_order_independent() {
        assert!(BankVerificationService::amounts_match((23, 47), (23, 47)));
        assert!(BankVerificationService::amounts_match((23, 47), (47, 23)));
    }

    #[test]
    fn equal_submitted_values_never_match() {
        assert!(!BankVerificationService::amounts_match((23, 47), (23, 23)));
        assert!(!BankVerificationService::amounts_match((23, 47), (47, 47)));
    }

    #[test]
    fn wrong_amounts_do_not_match() {
        assert!(!BankVerificationService::amounts_match((23, 47), (23, 46)));
        assert!(!BankVerificationService::amounts_match((23, 47), (1, 2)));
    }
}
