use crate::app_state::AppState;
use crate::repositories::PinRepository;
use argon2::{password_hash::PasswordHash, Argon2, Params, PasswordVerifier};
use diesel::PgConnection;
use kudipay_primitives::error::ApiError;
use kudipay_primitives::models::dtos::pin_dto::{SetPinRequest, SetPinResponse};
use password_hash::PasswordHasher;
use secrecy::{ExposeSecret, SecretString};
use tracing::{error, info, warn};
use uuid::Uuid;

pub struct PinService;

impl PinService {
    pub async fn set_pin(state: &AppState, req: SetPinRequest) -> Result<SetPinResponse, ApiError> {
        Self::validate_pin_policy(&req.pin)?;

        let pin = SecretString::new(req.pin.into());
        let pin_hash = Self::hash_pin(&pin)?;

        let mut conn = state.db.get()?;
        PinRepository::upsert(&mut conn, req.user_id, &pin_hash)?;

        info!(user_id = %req.user_id, "Withdrawal PIN updated");

        Ok(SetPinResponse {
            success: true,
            message: "Withdrawal PIN set".into(),
        })
    }

    /// Checks the submitted PIN against the stored digest. A dummy hash is
    /// verified when no PIN exists, so response timing does not reveal
    /// whether a user has one.
    pub fn verify_pin(
        conn: &mut PgConnection,
        user_id: Uuid,
        pin: &str,
    ) -> Result<(), ApiError> {
        let stored = PinRepository::find_by_user(conn, user_id)?;

        let hash = stored
            .as_ref()
            .map(|p| p.pin_hash.as_str())
            .unwrap_or(Self::dummy_hash());

        let parsed = PasswordHash::new(hash).map_err(|_| {
            error!(user_id = %user_id, "Stored PIN hash is malformed");
            ApiError::Internal("Credential check failed".into())
        })?;

        let argon2 = Self::create_argon2()?;
        let matched = argon2.verify_password(pin.as_bytes(), &parsed).is_ok();

        if stored.is_none() {
            return Err(ApiError::PinNotSet);
        }

        if !matched {
            warn!(user_id = %user_id, "Withdrawal PIN mismatch");
            return Err(ApiError::InvalidPin);
        }

        Ok(())
    }

    /// Set-time policy: exactly 6 digits, not one repeated digit, not a
    /// straight ascending or descending run. Not re-checked at verify time.
    pub fn validate_pin_policy(pin: &str) -> Result<(), ApiError> {
        let digits: Vec<u8> = pin.bytes().collect();

        if digits.len() != 6 || !digits.iter().all(|b| b.is_ascii_digit()) {
            return Err(ApiError::PinPolicy("PIN must be exactly 6 digits".into()));
        }

        if digits.windows(2).all(|w| w[0] == w[1]) {
            return Err(ApiError::PinPolicy(
                "PIN must not be a single repeated digit".into(),
            ));
        }

        let ascending = digits.windows(2).all(|w| w[1] == w[0].wrapping_add(1));
        let descending = digits.windows(2).all(|w| w[0] == w[1].wrapping_add(1));
        if ascending || descending {
            return Err(ApiError::PinPolicy(
                "PIN must not be a sequential run of digits".into(),
            ));
        }

        Ok(())
    }

    fn hash_pin(pin: &SecretString) -> Result<String, ApiError> {
        let argon2 = Self::create_argon2()?;
        let salt = argon2::password_hash::SaltString::generate(&mut rand_core::OsRng);

        argon2
            .hash_password(pin.expose_secret().as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|_| {
                error!("PIN hashing failed");
                ApiError::Internal("Credential processing failed".into())
            })
    }

    pub fn create_argon2() -> Result<Argon2<'static>, ApiError> {
        let params = Params::new(
            65536, // 64 MiB memory
            3,     // iterations
            1,     // parallelism
            None,
        )
        .map_err(|e| {
            error!("Argon2 params error: {}", e);
            ApiError::Internal("Credential configuration error".into())
        })?;

        Ok(Argon2::new(
            argon2::Algorithm::Argon2id,
            argon2::Version::V0x13,
            params,
        ))
    }

    fn dummy_hash() -> &'static str {
        "$argon2id$v=19$m=65536,t=3,p=1$\
         c29tZXNhbHQ$\
         c29tZWZha2VoYXNo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_pin() {
        assert!(PinService::validate_pin_policy("294817").is_ok());
    }

    #[test]
    fn rejects_wrong_length_and_non_digits() {
        assert!(PinService::validate_pin_policy("1234").is_err());
        assert!(PinService::validate_pin_policy("1234567").is_err());
        assert!(PinService::validate_pin_policy("12a456").is_err());
        assert!(PinService::validate_pin_policy("").is_err());
    }

    #[test]
    fn rejects_repeated_digit() {
        assert!(PinService::validate_pin_policy("777777").is_err());
        assert!(PinService::validate_pin_policy("000000").is_err());
    }

    #[test]
    fn rejects_sequential_runs_both_directions() {
        assert!(PinService::validate_pin_policy("123456").is_err());
        assert!(PinService::validate_pin_policy("456789").is_err());
        assert!(PinService::validate_pin_policy("654321").is_err());
        assert!(PinService::validate_pin_policy("987654").is_err());
    }

    #[test]
    fn near_sequential_is_fine() {
        // One broken step is enough to pass the run check.
        assert!(PinService::validate_pin_policy("123457").is_ok());
        assert!(PinService::validate_pin_policy("135791").is_ok());
    }
}
