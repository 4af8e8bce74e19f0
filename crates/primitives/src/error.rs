use axum::response::{IntoResponse, Response};
use axum::Json;
use diesel::r2d2;
use http::StatusCode;
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// Error taxonomy for the funds-movement core.
///
/// Authorization failures (wrong PIN, wrong/expired OTP, wrong micro-deposit
/// amounts) deliberately carry generic messages: the correct secret is never
/// echoed back, only a remaining-attempts count where one applies.
#[derive(Debug)]
pub enum ApiError {
    Validation(validator::ValidationErrors),
    Database(diesel::result::Error),
    DatabaseConnection(String),
    InvalidAmount(String),
    PinPolicy(String),
    PinNotSet,
    InvalidPin,
    InvalidOrExpiredOtp,
    InsufficientFunds,
    DuplicateReference,
    SelfTransfer,
    WalletNotFound,
    BankAccountNotFound,
    RecipientNotFound,
    AlreadyVerified,
    UnsupportedMethod(String),
    NoPendingToken,
    VerificationExpired,
    MaxAttemptsExceeded,
    AmountMismatch { remaining_attempts: i32 },
    InvalidCurrency(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(e) => write!(f, "Validation error: {}", e),
            ApiError::Database(e) => write!(f, "Database error: {}", e),
            ApiError::DatabaseConnection(e) => write!(f, "Database connection error: {}", e),
            ApiError::InvalidAmount(e) => write!(f, "Invalid amount: {}", e),
            ApiError::PinPolicy(e) => write!(f, "Invalid PIN: {}", e),
            ApiError::PinNotSet => write!(f, "No withdrawal PIN has been set"),
            ApiError::InvalidPin => write!(f, "Incorrect PIN"),
            ApiError::InvalidOrExpiredOtp => write!(f, "Invalid or expired passcode"),
            ApiError::InsufficientFunds => write!(f, "Insufficient funds"),
            ApiError::DuplicateReference => {
                write!(f, "Reference number already used with a different amount")
            }
            ApiError::SelfTransfer => {
                write!(f, "Sender and recipient must be different users")
            }
            ApiError::WalletNotFound => write!(f, "Wallet not found"),
            ApiError::BankAccountNotFound => write!(f, "Bank account not found"),
            ApiError::RecipientNotFound => write!(f, "Recipient not found"),
            ApiError::AlreadyVerified => write!(f, "Bank account is already verified"),
            ApiError::UnsupportedMethod(m) => {
                write!(f, "Unsupported verification method: {}", m)
            }
            ApiError::NoPendingToken => write!(f, "No pending verification for this account"),
            ApiError::VerificationExpired => write!(f, "Verification has expired"),
            ApiError::MaxAttemptsExceeded => {
                write!(f, "Maximum verification attempts exceeded")
            }
            ApiError::AmountMismatch { remaining_attempts } => write!(
                f,
                "Amounts do not match. {} attempt(s) remaining",
                remaining_attempts
            ),
            ApiError::InvalidCurrency(c) => write!(f, "Unsupported currency: {}", c),
            ApiError::Internal(e) => write!(f, "Internal error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Validation(e) => Some(e),
            ApiError::Database(e) => Some(e),
            _ => None,
        }
    }
}

impl From<diesel::result::Error> for ApiError {
    fn from(err: diesel::result::Error) -> Self {
        ApiError::Database(err)
    }
}

impl From<r2d2::PoolError> for ApiError {
    fn from(err: r2d2::PoolError) -> Self {
        ApiError::DatabaseConnection(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err)
    }
}

impl From<ApiError> for (StatusCode, String) {
    fn from(err: ApiError) -> Self {
        let status = match &err {
            ApiError::Validation(_)
            | ApiError::InvalidAmount(_)
            | ApiError::UnsupportedMethod(_)
            | ApiError::InvalidCurrency(_)
            | ApiError::PinPolicy(_)
            | ApiError::SelfTransfer
            | ApiError::PinNotSet => StatusCode::BAD_REQUEST,
            ApiError::InvalidPin
            | ApiError::InvalidOrExpiredOtp
            | ApiError::AmountMismatch { .. } => StatusCode::UNAUTHORIZED,
            ApiError::InsufficientFunds => StatusCode::PAYMENT_REQUIRED,
            ApiError::MaxAttemptsExceeded => StatusCode::FORBIDDEN,
            ApiError::WalletNotFound
            | ApiError::BankAccountNotFound
            | ApiError::RecipientNotFound
            | ApiError::NoPendingToken => StatusCode::NOT_FOUND,
            ApiError::AlreadyVerified | ApiError::DuplicateReference => StatusCode::CONFLICT,
            ApiError::VerificationExpired => StatusCode::GONE,
            ApiError::Database(diesel::result::Error::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Database(_) | ApiError::DatabaseConnection(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Internal details stay in the logs, not in the response body.
        let message = match &err {
            ApiError::Database(diesel::result::Error::NotFound) => "Record not found".to_string(),
            ApiError::Database(_) | ApiError::DatabaseConnection(_) => {
                "Service temporarily unavailable".to_string()
            }
            ApiError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        (status, message)
    }
}

/// JSON envelope for every failed request: `{ "success": false, "error": ... }`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error): (StatusCode, String) = self.into();
        (
            status,
            Json(ApiErrorResponse {
                success: false,
                error,
            }),
        )
            .into_response()
    }
}
