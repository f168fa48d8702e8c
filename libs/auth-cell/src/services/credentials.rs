use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use reqwest::Method;
use tracing::debug;

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;
use shared_models::AppError;

use crate::models::{DoctorAccount, DoctorCredential};

const BAD_LOGIN: &str = "Invalid email or password";

/// Verifies a claimed doctor identity against the stored argon2 hash.
/// Unknown email and wrong password produce the same error so the endpoint
/// cannot be used to enumerate accounts.
pub struct CredentialService {
    supabase: SupabaseClient,
}

impl CredentialService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    pub async fn verify_login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<DoctorAccount, AppError> {
        debug!("Verifying doctor login");

        let path = format!("/rest/v1/doctor_credentials?email=eq.{}", email);
        let credentials: Vec<DoctorCredential> = self
            .supabase
            .request(Method::GET, &path, None)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        let credential = credentials
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Auth(BAD_LOGIN.to_string()))?;

        let verified = Self::verify_password(password, &credential.password_hash)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        if !verified {
            return Err(AppError::Auth(BAD_LOGIN.to_string()));
        }

        let doctor_path = format!("/rest/v1/doctors?id=eq.{}", credential.doctor_id);
        let doctors: Vec<DoctorAccount> = self
            .supabase
            .request(Method::GET, &doctor_path, None)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;

        doctors
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound("Doctor profile not found".to_string()))
    }

    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }

    pub fn verify_password(
        password: &str,
        hash: &str,
    ) -> Result<bool, argon2::password_hash::Error> {
        let parsed_hash = PasswordHash::new(hash)?;
        let argon2 = Argon2::default();

        match argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_roundtrip() {
        let hash = CredentialService::hash_password("correct horse battery").unwrap();

        assert!(CredentialService::verify_password("correct horse battery", &hash).unwrap());
        assert!(!CredentialService::verify_password("wrong password", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = CredentialService::hash_password("same secret").unwrap();
        let second = CredentialService::hash_password("same secret").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_is_an_error_not_a_mismatch() {
        assert!(CredentialService::verify_password("anything", "not-a-phc-string").is_err());
    }
}
