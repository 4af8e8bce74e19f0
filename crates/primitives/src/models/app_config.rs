use eyre::Report;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_url: String,

    /// Flat transfer fee in basis points (100 = 1%).
    pub transfer_fee_bps: i64,

    /// Withdrawal passcode lifetime.
    pub otp_ttl_minutes: i64,

    pub micro_deposit_expiry_days: i64,

    pub micro_deposit_max_attempts: i32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            app_url: env::var("APP_URL").unwrap_or_else(|_| "http://localhost:8080".into()),

            transfer_fee_bps: env::var("TRANSFER_FEE_BPS")
                .unwrap_or_else(|_| "100".into())
                .parse()?,

            otp_ttl_minutes: env::var("OTP_TTL_MINUTES")
                .unwrap_or_else(|_| "10".into())
                .parse()?,

            micro_deposit_expiry_days: env::var("MICRO_DEPOSIT_EXPIRY_DAYS")
                .unwrap_or_else(|_| "3".into())
                .parse()?,

            micro_deposit_max_attempts: env::var("MICRO_DEPOSIT_MAX_ATTEMPTS")
                .unwrap_or_else(|_| "3".into())
                .parse()?,
        })
    }
}
