// src/auth/password.rs
// DOCUMENTATION: Password hashing
// PURPOSE: Argon2id hashes with a random salt per password

use crate::errors::EventsError;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a password using Argon2id
pub fn hash_password(password: &str) -> Result<String, EventsError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| EventsError::InternalError(format!("Password hashing failed: {}", e)))
}

/// Verify a password against its stored hash
/// An unparseable stored hash counts as a mismatch
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            log::warn!("Stored password hash is malformed: {}", e);
            false
        }
    }
}

/// Run hashing on the blocking pool so request workers stay responsive
pub async fn hash_password_blocking(password: String) -> Result<String, EventsError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| EventsError::InternalError(format!("Hashing task failed: {}", e)))?
}

pub async fn verify_password_blocking(password: String, hash: String) -> Result<bool, EventsError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| EventsError::InternalError(format!("Verification task failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("correct horse").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("correct horse", &hash));
        assert!(!verify_password("wrong horse", &hash));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let a = hash_password("secret").unwrap();
        let b = hash_password("secret").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }

    #[test]
    fn test_blocking_wrappers() {
        let hash = tokio_test::block_on(hash_password_blocking("pw123456".to_string())).unwrap();
        let ok = tokio_test::block_on(verify_password_blocking(
            "pw123456".to_string(),
            hash.clone(),
        ))
        .unwrap();
        assert!(ok);
    }
}
