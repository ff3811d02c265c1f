// JWT token creation and verification
// Tokens carry the acting user's id; lifetime comes from configuration

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims structure
///
/// # Fields
/// * `sub` - Subject (user_id)
/// * `exp` - Expiry time (seconds since epoch)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID (subject)
    pub sub: Uuid,
    /// Expiry timestamp (seconds since epoch)
    pub exp: usize,
}

/// Creates a JWT token for a user
///
/// # Arguments
/// * `user_id` - The user's ID to include in the token
/// * `secret` - The secret key for signing
/// * `ttl` - How long the token stays valid
///
/// # Returns
/// * `Ok(String)` - The JWT token
/// * `Err(String)` - If token creation fails
///
/// # Example
/// ```
/// use chrono::Duration;
/// use dreamteam_api::auth::jwt::create_token;
/// use uuid::Uuid;
///
/// let token = create_token(Uuid::new_v4(), "your-secret-key", Duration::hours(8))
///     .expect("valid token");
/// assert!(!token.is_empty());
/// ```
pub fn create_token(user_id: Uuid, secret: &str, ttl: Duration) -> Result<String, String> {
    let expiry = Utc::now() + ttl;
    let claims = Claims {
        sub: user_id,
        exp: expiry.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| e.to_string())
}

/// Verifies and decodes a JWT token
///
/// # Arguments
/// * `token` - The JWT token string to verify
/// * `secret` - The secret key for verification
///
/// # Returns
/// * `Ok(Claims)` - The decoded claims if token is valid
/// * `Err(String)` - If token is invalid or expired
///
/// # Example
/// ```
/// use chrono::Duration;
/// use dreamteam_api::auth::jwt::{create_token, verify_token};
/// use uuid::Uuid;
///
/// let user_id = Uuid::new_v4();
/// let secret = "your-secret-key";
/// let token = create_token(user_id, secret, Duration::hours(1)).unwrap();
///
/// let claims = verify_token(&token, secret).expect("valid token");
/// assert_eq!(claims.sub, user_id);
/// ```
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-secret-key-for-unit-tests";

    #[test]
    fn create_and_verify_token() {
        let user_id = Uuid::new_v4();
        let token = create_token(user_id, TEST_SECRET, Duration::hours(8)).expect("valid token");

        let claims = verify_token(&token, TEST_SECRET).expect("valid verification");
        assert_eq!(claims.sub, user_id);
    }

    #[test]
    fn wrong_secret_fails() {
        let token = create_token(Uuid::new_v4(), TEST_SECRET, Duration::hours(8)).unwrap();

        assert!(verify_token(&token, "wrong-secret").is_err());
    }

    #[test]
    fn invalid_token_fails() {
        assert!(verify_token("invalid.token.string", TEST_SECRET).is_err());
    }

    #[test]
    fn expired_token_fails() {
        // Past the default 60s leeway
        let token = create_token(Uuid::new_v4(), TEST_SECRET, Duration::minutes(-5)).unwrap();

        assert!(verify_token(&token, TEST_SECRET).is_err());
    }

    #[test]
    fn token_expiry_follows_ttl() {
        let token = create_token(Uuid::new_v4(), TEST_SECRET, Duration::hours(2)).unwrap();

        let claims = verify_token(&token, TEST_SECRET).unwrap();
        let expiry_time = claims.exp as i64;
        let now = Utc::now().timestamp();
        let in_2_hours = (Utc::now() + Duration::hours(2)).timestamp();

        assert!(expiry_time > now);
        assert!(expiry_time <= in_2_hours + 10); // 10 second buffer
    }
}
