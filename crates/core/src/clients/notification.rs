use kudipay_primitives::error::ApiError;

/// Outbound notification dispatcher. Delivery is best-effort: callers spawn
/// sends off the request path and only log failures, so a slow or broken
/// mail relay can never block or fail an authorization step.
#[derive(Clone)]
pub struct NotificationClient {
    // transport: SmtpTransport,
}

impl Default for NotificationClient {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationClient {
    pub fn new() -> Self {
        Self {}
    }

    pub async fn send(&self, to: &str, subject: &str, _body: &str) -> Result<(), ApiError> {
        // Placeholder for the real delivery transport.
        tracing::info!(recipient = %to, subject = %subject, "Dispatching notification");
        Ok(())
    }
}
