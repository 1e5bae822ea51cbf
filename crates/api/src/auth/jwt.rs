//! Bearer-token generation and validation.
//!
//! Tokens are HS256-signed JWTs containing a [`Claims`] payload. There is no
//! refresh mechanism and no revocation list: a token stays valid for its full
//! lifetime regardless of later administrator changes.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token lifetime. Fixed; not configurable per call.
pub const TOKEN_EXPIRY_HOURS: i64 = 24;

/// JWT claims embedded in every token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the administrator's login email.
    pub sub: String,
    /// The administrator's role name (`"Adm"` or `"Editor"`).
    pub role: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Configuration for JWT generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
}

impl JwtConfig {
    /// Load JWT configuration from the environment.
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty. There is no fallback
    /// secret; misconfiguration must fail at startup.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        Self { secret }
    }
}

/// Generate an HS256 token for the given administrator.
///
/// The token carries the email as subject, the role, issue time, and an
/// expiration of issue time plus [`TOKEN_EXPIRY_HOURS`].
pub fn generate_token(
    email: &str,
    role: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        sub: email.to_string(),
        role: role.to_string(),
        exp: now + TOKEN_EXPIRY_HOURS * 3600,
        iat: now,
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration automatically.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}
