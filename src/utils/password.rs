use crate::error::{AppError, AppResult};
use bcrypt::{DEFAULT_COST, hash, verify};

/// Hashes a password for storage in `users.password`.
pub fn hash_password(password: &str) -> AppResult<String> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::InternalError(format!("password hashing failed: {e}")))
}

fn is_bcrypt_hash(stored: &str) -> bool {
    stored.len() == 60 && stored.starts_with("$2")
}

/// Checks `password` against the stored value.
///
/// Accounts created before hashing was introduced still hold the clear
/// password; those are compared directly.
pub fn verify_password(password: &str, stored: &str) -> AppResult<bool> {
    if is_bcrypt_hash(stored) {
        verify(password, stored)
            .map_err(|e| AppError::InternalError(format!("password verification failed: {e}")))
    } else {
        Ok(password == stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_password() {
        let hashed = hash_password("Caisse2025").unwrap();

        assert!(is_bcrypt_hash(&hashed));
        assert!(verify_password("Caisse2025", &hashed).unwrap());
        assert!(!verify_password("caisse2025", &hashed).unwrap());
    }

    #[test]
    fn test_verify_legacy_clear_password() {
        assert!(verify_password("admin123", "admin123").unwrap());
        assert!(!verify_password("admin", "admin123").unwrap());
    }
}
