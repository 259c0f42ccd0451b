use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config;
use crate::error::ApiError;

/// Claims embedded in a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

/// Sign a token for an authenticated user. Fails when no signing secret
/// is configured; that is a server misconfiguration, not a client error.
pub fn issue_token(user_id: Uuid, email: &str) -> Result<String, ApiError> {
    let secret = signing_secret()?;
    let now = Utc::now().timestamp();
    let claims = Claims {
        user_id,
        email: email.to_string(),
        iat: now,
        exp: now + config::config().security.jwt_expiry_secs,
    };
    sign_with(&secret, &claims)
}

/// Verify signature and expiry; any failure is reported as an invalid token.
pub fn verify_token(token: &str) -> Result<Claims, ApiError> {
    let secret = signing_secret()?;
    decode_with(&secret, token).map_err(|_| ApiError::unauthorized("Invalid token"))
}

fn signing_secret() -> Result<String, ApiError> {
    config::config()
        .security
        .jwt_secret
        .clone()
        .ok_or_else(|| ApiError::internal("JWT_SECRET is not configured"))
}

fn sign_with(secret: &str, claims: &Claims) -> Result<String, ApiError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::internal(format!("failed to sign token: {}", e)))
}

fn decode_with(secret: &str, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(exp_offset: i64) -> Claims {
        let now = Utc::now().timestamp();
        Claims {
            user_id: Uuid::new_v4(),
            email: "a@b.com".to_string(),
            iat: now,
            exp: now + exp_offset,
        }
    }

    #[test]
    fn sign_and_decode_roundtrip() {
        let claims = claims(3600);
        let token = sign_with("test-secret", &claims).unwrap();
        let decoded = decode_with("test-secret", &token).unwrap();
        assert_eq!(decoded.user_id, claims.user_id);
        assert_eq!(decoded.email, "a@b.com");
        assert_eq!(decoded.exp, claims.exp);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = sign_with("test-secret", &claims(3600)).unwrap();
        assert!(decode_with("other-secret", &token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        // Well past the default validation leeway
        let token = sign_with("test-secret", &claims(-7200)).unwrap();
        assert!(decode_with("test-secret", &token).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(decode_with("test-secret", "not.a.token").is_err());
    }
}
