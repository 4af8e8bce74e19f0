use chrono::Utc;
use kudipay_core::repositories::{OtpRepository, VerificationTokenRepository};
use kudipay_core::AppState;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, error, info};

const DAILY_CLEANUP_INTERVAL: Duration = Duration::from_secs(60 * 60 * 24);

pub fn spawn_background_tasks(state: Arc<AppState>) {
    let state_clone = state.clone();

    // Expire overdue micro-deposit challenges (daily)
    tokio::spawn(async move {
        info!("Starting daily verification token sweep");
        expire_verification_tokens(state_clone).await;
    });

    // Purge used or expired withdrawal passcodes (daily)
    let state_clone = state.clone();
    tokio::spawn(async move {
        info!("Starting daily withdrawal passcode sweep");
        purge_withdrawal_otps(state_clone).await;
    });

    info!("Background maintenance tasks spawned");
}

async fn expire_verification_tokens(state: Arc<AppState>) {
    let mut interval = interval(DAILY_CLEANUP_INTERVAL);
    interval.tick().await;

    loop {
        interval.tick().await;

        let Ok(mut conn) = state.db.get() else {
            error!("Verification token sweep: DB connection failed");
            continue;
        };

        match VerificationTokenRepository::expire_all_overdue(&mut conn, Utc::now()) {
            Ok(0) => debug!("No overdue verification tokens"),
            Ok(n) => info!("Expired {} verification tokens", n),
            Err(e) => error!("Verification token sweep failed: {}", e),
        }
    }
}

async fn purge_withdrawal_otps(state: Arc<AppState>) {
    let mut interval = interval(DAILY_CLEANUP_INTERVAL);
    interval.tick().await;

    loop {
        interval.tick().await;

        let Ok(mut conn) = state.db.get() else {
            error!("Withdrawal passcode sweep: DB connection failed");
            continue;
        };

        match OtpRepository::delete_expired_or_used(&mut conn, Utc::now()) {
            Ok(0) => debug!("No stale withdrawal passcodes"),
            Ok(n) => info!("Removed {} stale withdrawal passcodes", n),
            Err(e) => error!("Withdrawal passcode sweep failed: {}", e),
        }
    }
}
