use crate::app_state::AppState;
use crate::repositories::{
    CurrencyRepository, TransactionRepository, TransferRepository, WalletRepository,
};
use crate::services::wallet_service::WalletService;
use diesel::prelude::*;
use kudipay_primitives::error::ApiError;
use kudipay_primitives::models::dtos::transfer_dto::{TransferRequest, TransferResponse};
use kudipay_primitives::models::entities::enum_types::{
    CurrencyCode, PaymentState, TransactionIntent,
};
use kudipay_primitives::models::entities::transaction::NewTransaction;
use kudipay_primitives::models::entities::transfer::NewMoneyTransfer;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

/// Exchange rates carry six decimal places as scaled integers.
pub const RATE_SCALE: i64 = 1_000_000;

/// Wallet-to-wallet transfer with conversion and a flat percentage fee.
///
/// Both ledger legs, the transfer record and both history rows commit in a
/// single database transaction: a failed credit rolls the debit back, so
/// money is never left debited-but-unreceived.
pub struct TransferService;

impl TransferService {
    pub async fn transfer(
        state: &AppState,
        req: TransferRequest,
    ) -> Result<TransferResponse, ApiError> {
        if req.amount <= 0 {
            return Err(ApiError::InvalidAmount("amount must be positive".into()));
        }
        if req.sender_id == req.recipient_id {
            return Err(ApiError::SelfTransfer);
        }

        let mut conn = state.db.get()?;

        let sender_rate = Self::rate_for(&mut conn, req.sender_currency)?;
        let recipient_rate = Self::rate_for(&mut conn, req.recipient_currency)?;

        if !WalletRepository::has_any_wallet(&mut conn, req.recipient_id)? {
            return Err(ApiError::RecipientNotFound);
        }

        let fee = Self::compute_fee(req.amount, state.config.transfer_fee_bps);
        let total_debit = Self::checked_total(req.amount, fee)?;
        let rate_scaled = Self::compute_rate_scaled(sender_rate, recipient_rate);
        let amount_received = Self::convert_amount(req.amount, rate_scaled);

        let reference = Uuid::new_v4();
        let description = req.description.as_deref();

        conn.transaction::<_, ApiError, _>(|conn| {
            // Same reference on both legs; the sender debit is reversed by
            // the enclosing transaction if the credit leg fails. Legs apply
            // in canonical wallet-key order so two opposite-direction
            // transfers acquire their row locks the same way and cannot
            // deadlock against each other.
            if Self::debit_leg_first(
                (req.sender_id, req.sender_currency),
                (req.recipient_id, req.recipient_currency),
            ) {
                WalletService::adjust_balance_in_tx(
                    conn,
                    req.sender_id,
                    req.sender_currency,
                    -total_debit,
                    reference,
                )?;
                WalletService::adjust_balance_in_tx(
                    conn,
                    req.recipient_id,
                    req.recipient_currency,
                    amount_received,
                    reference,
                )?;
            } else {
                WalletService::adjust_balance_in_tx(
                    conn,
                    req.recipient_id,
                    req.recipient_currency,
                    amount_received,
                    reference,
                )?;
                WalletService::adjust_balance_in_tx(
                    conn,
                    req.sender_id,
                    req.sender_currency,
                    -total_debit,
                    reference,
                )?;
            }

            TransferRepository::create(
                conn,
                NewMoneyTransfer {
                    sender_id: req.sender_id,
                    recipient_id: req.recipient_id,
                    sender_currency: req.sender_currency,
                    recipient_currency: req.recipient_currency,
                    amount_sent: req.amount,
                    amount_received,
                    exchange_rate_scaled: rate_scaled,
                    fee,
                    reference,
                    status: PaymentState::Completed,
                    description,
                },
            )?;

            TransactionRepository::create(
                conn,
                NewTransaction {
                    user_id: req.sender_id,
                    counterparty_id: Some(req.recipient_id),
                    intent: TransactionIntent::TransferOut,
                    amount: -total_debit,
                    currency: req.sender_currency,
                    txn_state: PaymentState::Completed,
                    reference,
                    description,
                    metadata: json!({
                        "fee": fee,
                        "exchange_rate_scaled": rate_scaled,
                        "amount_received": amount_received,
                        "recipient_currency": req.recipient_currency,
                    }),
                },
            )?;
            TransactionRepository::create(
                conn,
                NewTransaction {
                    user_id: req.recipient_id,
                    counterparty_id: Some(req.sender_id),
                    intent: TransactionIntent::TransferIn,
                    amount: amount_received,
                    currency: req.recipient_currency,
                    txn_state: PaymentState::Completed,
                    reference,
                    description: Some("Received wallet transfer"),
                    metadata: json!({
                        "sender_currency": req.sender_currency,
                        "exchange_rate_scaled": rate_scaled,
                    }),
                },
            )?;

            Ok(())
        })?;

        info!(
            sender_id = %req.sender_id,
            recipient_id = %req.recipient_id,
            reference = %reference,
            amount_sent = req.amount,
            amount_received,
            "Transfer completed"
        );

        Self::notify_recipient(state, req.recipient_id, amount_received, req.recipient_currency);

        Ok(TransferResponse {
            success: true,
            reference_number: reference,
            amount_sent: req.amount,
            amount_received,
            exchange_rate: rate_scaled as f64 / RATE_SCALE as f64,
            transfer_fee: fee,
        })
    }

    /// Whether the debit leg's wallet key sorts before the credit leg's.
    /// Both legs of every transfer apply in this key order, whichever
    /// direction the money moves.
    fn debit_leg_first(
        debit_key: (Uuid, CurrencyCode),
        credit_key: (Uuid, CurrencyCode),
    ) -> bool {
        debit_key <= credit_key
    }

    fn checked_total(amount: i64, fee: i64) -> Result<i64, ApiError> {
        amount
            .checked_add(fee)
            .ok_or_else(|| ApiError::InvalidAmount("amount too large".into()))
    }

    fn rate_for(conn: &mut PgConnection, code: CurrencyCode) -> Result<i64, ApiError> {
        CurrencyRepository::find(conn, code)?
            .map(|c| c.rate_to_base_scaled)
            .ok_or_else(|| ApiError::InvalidCurrency(code.to_string()))
    }

    /// Flat percentage fee in basis points, truncated to minor units. The
    /// same truncation rule applies to the converted amount so identical
    /// inputs always reconcile to identical totals.
    pub fn compute_fee(amount: i64, fee_bps: i64) -> i64 {
        (amount as i128 * fee_bps as i128 / 10_000) as i64
    }

    /// Sender-to-recipient rate: units of recipient currency per unit of
    /// sender currency, scaled by `RATE_SCALE`. Both inputs are
    /// units-per-base rates.
    pub fn compute_rate_scaled(sender_rate_scaled: i64, recipient_rate_scaled: i64) -> i64 {
        (recipient_rate_scaled as i128 * RATE_SCALE as i128 / sender_rate_scaled as i128) as i64
    }

    pub fn convert_amount(amount: i64, rate_scaled: i64) -> i64 {
        (amount as i128 * rate_scaled as i128 / RATE_SCALE as i128) as i64
    }

    fn notify_recipient(
        state: &AppState,
        recipient_id: Uuid,
        amount_received: i64,
        currency: CurrencyCode,
    ) {
        let notifier = state.notifier.clone();
        let profiles = state.profiles.clone();

        tokio::spawn(async move {
            if let Ok(contact) = profiles.contact(recipient_id).await {
                let body = format!(
                    "You have received {} {} into your wallet.",
                    amount_received, currency
                );
                if let Err(e) = notifier
                    .send(&contact.email, "You received a transfer", &body)
                    .await
                {
                    warn!(recipient_id = %recipient_id, "Notification delivery failed: {}", e);
                }
            }
        });
    }
}
