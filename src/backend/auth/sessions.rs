/**
 * Session Management and JWT Tokens
 *
 * Bearer tokens are HS256 JWTs. The subject claim carries the user id, so
 * verification needs no server-side session lookup.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Longest accepted token lifetime (ten years)
pub const MAX_TOKEN_TTL_SECONDS: i64 = 10 * 365 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

impl Claims {
    /// Claims for `user_id` issued now and valid for `ttl`
    pub fn new(user_id: i64, ttl: Duration) -> Self {
        let now = Utc::now();
        let expires_at = now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self {
            sub: user_id.to_string(),
            exp: unix_seconds(expires_at),
            iat: unix_seconds(now),
        }
    }

    /// User id carried in the subject claim
    pub fn user_id(&self) -> Result<i64, std::num::ParseIntError> {
        self.sub.parse()
    }
}

fn unix_seconds(at: DateTime<Utc>) -> u64 {
    u64::try_from(at.timestamp()).unwrap_or_default()
}

/// Issues and verifies bearer tokens
///
/// Cheap to clone; lives in `AppState`.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Create a token service
    ///
    /// # Arguments
    /// * `secret` - HMAC signing secret
    /// * `ttl_seconds` - Lifetime of issued tokens, clamped to `0..=MAX_TOKEN_TTL_SECONDS`
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(ttl_seconds.clamp(0, MAX_TOKEN_TTL_SECONDS)),
        }
    }

    /// Create a JWT token for a user
    ///
    /// # Returns
    /// JWT token string
    pub fn issue(&self, user_id: i64) -> Result<String, jsonwebtoken::errors::Error> {
        self.encode_claims(&Claims::new(user_id, self.ttl))
    }

    /// Sign arbitrary claims with this service's key
    pub fn encode_claims(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        encode(&Header::default(), claims, &self.encoding_key)
    }

    /// Verify and decode a JWT token
    ///
    /// Fails on a bad signature, a malformed token or an expired `exp`.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        Ok(token_data.claims)
    }
}
