/**
 * Session Tokens
 *
 * This module handles JWT issuance and verification for user sessions.
 *
 * The signing secret is read from configuration exactly once at startup and
 * baked into a `TokenKeys` value that lives in the application state. Nothing
 * in this module touches the environment.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Token lifetime: one hour
pub const TOKEN_TTL_SECS: u64 = 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

impl Claims {
    /// Parse the subject back into a user ID
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Signing and verification keys derived from the configured secret
///
/// Cheap to clone; shared through `AppState`.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    /// Build keys from the configured signing secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a signed token for a user
    ///
    /// The token carries the user ID as its subject and expires
    /// [`TOKEN_TTL_SECS`] after issuance.
    pub fn issue(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch")
            .as_secs();

        let claims = Claims {
            sub: user_id.to_string(),
            exp: now + TOKEN_TTL_SECS,
            iat: now,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a token and return its claims
    ///
    /// Fails if the signature is invalid, the token is malformed, or it is
    /// expired.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::errors::ErrorKind;

    fn test_keys() -> TokenKeys {
        TokenKeys::new("test-secret")
    }

    #[test]
    fn test_issue_and_verify() {
        let keys = test_keys();
        let user_id = Uuid::new_v4();

        let token = keys.issue(user_id).unwrap();
        assert!(!token.is_empty());

        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.user_id().unwrap(), user_id);
        assert_eq!(claims.exp, claims.iat + TOKEN_TTL_SECS);
    }

    #[test]
    fn test_verify_garbage() {
        let keys = test_keys();
        assert!(keys.verify("not.a.token").is_err());
        assert!(keys.verify("").is_err());
    }

    #[test]
    fn test_verify_wrong_secret() {
        let user_id = Uuid::new_v4();
        let token = TokenKeys::new("secret-a").issue(user_id).unwrap();

        let result = TokenKeys::new("secret-b").verify(&token);
        assert!(matches!(
            result.unwrap_err().kind(),
            ErrorKind::InvalidSignature
        ));
    }

    #[test]
    fn test_verify_expired() {
        let keys = test_keys();
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();

        // Expired well past the default leeway
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            exp: now - 2 * TOKEN_TTL_SECS,
            iat: now - 3 * TOKEN_TTL_SECS,
        };
        let token = encode(&Header::default(), &claims, &keys.encoding).unwrap();

        let result = keys.verify(&token);
        assert!(matches!(
            result.unwrap_err().kind(),
            ErrorKind::ExpiredSignature
        ));
    }
}
