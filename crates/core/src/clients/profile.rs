use kudipay_primitives::error::ApiError;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Contact {
    pub email: String,
    pub display_name: String,
}

/// Lookup into the external profile/KYC directory, used only to address
/// notifications. Profile storage itself lives outside this service.
#[derive(Clone)]
pub struct ProfileClient {
    // http: reqwest::Client + directory base URL in a full deployment
}

impl Default for ProfileClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileClient {
    pub fn new() -> Self {
        Self {}
    }

    pub async fn contact(&self, user_id: Uuid) -> Result<Contact, ApiError> {
        // Placeholder for the directory call.
        tracing::debug!(user_id = %user_id, "Resolving contact from profile directory");
        Ok(Contact {
            email: format!("{}@users.kudipay.local", user_id),
            display_name: format!("user-{}", &user_id.to_string()[..8]),
        })
    }
}
