// Password hashing utilities
// Uses bcrypt; plaintext passwords are never stored

use bcrypt::{hash, verify};

/// Shortest password accepted at registration
pub const MIN_PASSWORD_LEN: usize = 4;

/// Checks registration rules for a new password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(())
}

/// Hashes a password using bcrypt
///
/// # Arguments
/// * `password` - The plaintext password to hash
/// * `cost` - bcrypt work factor (4..=31)
///
/// # Returns
/// * `Ok(String)` - The bcrypt hash
/// * `Err(String)` - If hashing fails
///
/// # Example
/// ```
/// use dreamteam_api::auth::password::hash_password;
///
/// let hash = hash_password("my_password", 4).expect("valid hash");
/// assert!(hash.starts_with("$2"));
/// ```
pub fn hash_password(password: &str, cost: u32) -> Result<String, String> {
    hash(password, cost).map_err(|e| e.to_string())
}

/// Verifies a password against a bcrypt hash
///
/// # Arguments
/// * `password` - The plaintext password to verify
/// * `hash` - The bcrypt hash to verify against
///
/// # Returns
/// * `Ok(bool)` - True if password matches, false otherwise
/// * `Err(String)` - If verification fails
///
/// # Example
/// ```
/// use dreamteam_api::auth::password::{hash_password, verify_password};
///
/// let hash = hash_password("my_password", 4).unwrap();
/// let valid = verify_password("my_password", &hash).unwrap();
/// assert!(valid);
/// ```
pub fn verify_password(password: &str, hash: &str) -> Result<bool, String> {
    verify(password, hash).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_COST: u32 = 4;

    #[test]
    fn hash_and_verify_password() {
        let password = "test_password_123";
        let hash = hash_password(password, TEST_COST).expect("valid hash");

        let valid = verify_password(password, &hash).expect("valid verification");
        assert!(valid);
    }

    #[test]
    fn verify_wrong_password() {
        let hash = hash_password("test_password_123", TEST_COST).expect("valid hash");

        let valid = verify_password("wrong_password", &hash).expect("valid verification");
        assert!(!valid);
    }

    #[test]
    fn hash_different_outputs() {
        let password = "test_password_123";
        let hash1 = hash_password(password, TEST_COST).expect("valid hash");
        let hash2 = hash_password(password, TEST_COST).expect("valid hash");

        // Hashes should be different due to salt
        assert_ne!(hash1, hash2);
        assert!(verify_password(password, &hash1).unwrap());
        assert!(verify_password(password, &hash2).unwrap());
    }

    #[test]
    fn invalid_cost_fails() {
        assert!(hash_password("password", 2).is_err());
    }

    #[test]
    fn short_password_is_rejected() {
        assert!(validate_password("abc").is_err());
        assert!(validate_password("abcd").is_ok());
    }
}
