/**
 * Session Tokens
 *
 * Issues and verifies the signed bearer tokens that prove a caller's
 * identity. The signing secret and lifetime are injected at construction;
 * nothing here reads the environment.
 */

use std::time::Duration;

use jsonwebtoken::{
    decode, encode, get_current_timestamp, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// The only algorithm tokens are signed and accepted with
const TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

/// Identity carried by a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// User ID
    pub user_id: Uuid,
    /// Email at the time the token was issued
    pub email: String,
}

/// JWT payload
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// User ID
    sub: String,
    email: String,
    /// Expiration time (Unix timestamp)
    exp: u64,
    /// Issued at time (Unix timestamp)
    iat: u64,
}

/// Token failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Signing failed
    #[error("token issuance failed: {0}")]
    IssuanceFailed(String),
    /// Bad signature, wrong algorithm, malformed payload or expired
    #[error("invalid token: {0}")]
    InvalidToken(String),
}

/// Signs and verifies HS256 bearer tokens
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Create a token service for a secret and token lifetime
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Lifetime given to newly issued tokens
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for a claim
    pub fn issue(&self, claim: &Claim) -> Result<String, TokenError> {
        let now = get_current_timestamp();
        let claims = Claims {
            sub: claim.user_id.to_string(),
            email: claim.email.clone(),
            exp: now.saturating_add(self.ttl.as_secs()),
            iat: now,
        };

        encode(&Header::new(TOKEN_ALGORITHM), &claims, &self.encoding)
            .map_err(|e| TokenError::IssuanceFailed(e.to_string()))
    }

    /// Verify a token and return the claim it carries
    pub fn verify(&self, token: &str) -> Result<Claim, TokenError> {
        let validation = Validation::new(TOKEN_ALGORITHM);

        let token_data = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|e| TokenError::InvalidToken(e.to_string()))?;

        let user_id = Uuid::parse_str(&token_data.claims.sub)
            .map_err(|e| TokenError::InvalidToken(format!("invalid user ID in token: {e}")))?;

        Ok(Claim {
            user_id,
            email: token_data.claims.email,
        })
    }
}
