//! Bearer token issuance and validation.
//!
//! `TokenService` signs and verifies the JWTs handed out at login. It holds the signing
//! keys and token lifetimes and lives in `AppState`, cloned cheaply per request.
//! Revocation is not checked here; see `AuthGuard`.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::server::{
    config::Config,
    error::{auth::AuthError, internal::InternalError},
    model::{
        token::{Claims, TokenType},
        user::User,
    },
};

/// Seconds a token is still accepted after its `exp`.
pub const EXPIRY_LEEWAY_SECS: u64 = 60;

/// Issues and validates signed access and refresh tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    /// Creates a token service signing with a shared secret.
    ///
    /// # Arguments
    /// - `secret` - HMAC secret used for both signing and verification
    /// - `algorithm` - One of the HS* algorithms
    /// - `access_ttl` - Lifetime of access tokens
    /// - `refresh_ttl` - Lifetime of refresh tokens
    ///
    /// # Returns
    /// - `TokenService` - Service ready to issue tokens
    pub fn new(
        secret: &[u8],
        algorithm: Algorithm,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
            access_ttl,
            refresh_ttl,
        }
    }

    /// Creates a token service from the configured secret, algorithm and lifetimes.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.jwt_secret.as_bytes(),
            config.jwt_algorithm,
            Duration::minutes(config.access_token_minutes),
            Duration::days(config.refresh_token_days),
        )
    }

    /// Lifetime of access tokens in seconds, reported to clients as `expires_in`.
    pub fn access_ttl_secs(&self) -> i64 {
        self.access_ttl.num_seconds()
    }

    /// Issues a short-lived access token for the user.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed token
    /// - `Err(InternalError::TokenEncoding)` - Signing failed
    pub fn issue_access_token(&self, user: &User) -> Result<String, InternalError> {
        self.issue(user, TokenType::Access, self.access_ttl)
    }

    /// Issues a long-lived refresh token for the user.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed token
    /// - `Err(InternalError::TokenEncoding)` - Signing failed
    pub fn issue_refresh_token(&self, user: &User) -> Result<String, InternalError> {
        self.issue(user, TokenType::Refresh, self.refresh_ttl)
    }

    /// Verifies a token's signature and expiry and returns its claims.
    ///
    /// # Arguments
    /// - `token` - Raw bearer token
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is authentic and unexpired
    /// - `Err(AuthError::InvalidToken)` - Malformed, forged, or expired token
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = EXPIRY_LEEWAY_SECS;

        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(AuthError::InvalidToken)?;

        Ok(data.claims)
    }

    /// Expiry before which `decode` rejects every token at `now`.
    ///
    /// Revocation rows for tokens expiring earlier than this can be dropped safely.
    /// `exp` has whole-second precision, so one extra second is allowed.
    pub fn rejected_before(now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::seconds(EXPIRY_LEEWAY_SECS as i64 + 1)
    }

    fn issue(
        &self,
        user: &User,
        token_type: TokenType,
        ttl: Duration,
    ) -> Result<String, InternalError> {
        let now = Utc::now();

        let claims = Claims {
            jti: uuid::Uuid::new_v4().to_string(),
            sub: user.email.clone(),
            role: user.role.as_str().to_string(),
            name: user.name.clone(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            token_type,
        };

        jsonwebtoken::encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(InternalError::TokenEncoding)
    }
}
