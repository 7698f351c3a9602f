use crate::auth::jwks::JwksCache;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Supabase JWT claims.
///
/// The `sub` field is the user's UUID in `auth.users`; admin rights are
/// looked up separately in `admin_users`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The Supabase auth user UUID.
    pub sub: String,
    /// Token expiration (Unix timestamp).
    pub exp: usize,
    /// Token issued-at (Unix timestamp).
    pub iat: Option<usize>,
    /// Issuer, the project URL + `/auth/v1`.
    pub iss: Option<String>,
    /// User's email from Supabase auth.
    pub email: Option<String>,
    /// Supabase role (e.g. "authenticated").
    pub role: Option<String>,
    pub user_metadata: Option<UserMetadata>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserMetadata {
    pub email: Option<String>,
    pub email_verified: Option<bool>,
}

impl Claims {
    /// Extract the user UUID from the `sub` claim.
    pub fn user_id(&self) -> Result<Uuid, String> {
        Uuid::parse_str(&self.sub).map_err(|e| format!("Invalid UUID in sub claim: {e}"))
    }

    /// Best-effort email: prefer top-level, fall back to metadata.
    pub fn user_email(&self) -> Option<String> {
        self.email
            .clone()
            .or_else(|| self.user_metadata.as_ref().and_then(|m| m.email.clone()))
    }
}

/// Validate a Supabase JWT and return the decoded claims.
pub async fn validate_token(token: &str, jwks_cache: &JwksCache) -> Result<Claims, String> {
    jwks_cache.validate_token(token).await
}

/// Decode a token signed with the project's legacy HS256 JWT secret.
pub fn decode_hs256(token: &str, secret: &str) -> Result<Claims, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;

    decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map(|td| td.claims)
        .map_err(|e| format!("Token validation failed: {e:?}"))
}
