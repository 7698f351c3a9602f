//! Integration test for JWT auth validation.
//!
//! Mints tokens locally with the legacy HS256 project secret and decodes them
//! through `decode_hs256`. No running server or database is needed.
//!
//! Run with: `cargo test --test auth_test`
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

use jen_site_backend::auth::jwt::{Claims, UserMetadata, decode_hs256};

/// A fake secret for testing — never use the real one in tests committed to git.
const TEST_SECRET: &str = "test-secret-at-least-256-bits-long-for-hs256-xxxxxxx";

fn claims_for(sub: &str, email: Option<&str>, exp: usize) -> Claims {
    Claims {
        sub: sub.to_string(),
        exp,
        iat: Some(Utc::now().timestamp() as usize),
        iss: Some("https://example.supabase.co/auth/v1".to_string()),
        email: email.map(str::to_string),
        role: Some("authenticated".to_string()),
        user_metadata: None,
    }
}

fn sign(claims: &Claims, secret: &str) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to encode test JWT")
}

#[test]
fn test_valid_token_decodes_correctly() {
    let user_id = Uuid::new_v4();
    let now = Utc::now().timestamp() as usize;
    let token = sign(
        &claims_for(&user_id.to_string(), Some("owner@example.com"), now + 3600),
        TEST_SECRET,
    );

    let claims = decode_hs256(&token, TEST_SECRET).expect("Token should be valid");

    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.user_email().unwrap(), "owner@example.com");
}

#[test]
fn test_expired_token_is_rejected() {
    let now = Utc::now().timestamp() as usize;
    // Well past the 60s default leeway.
    let token = sign(
        &claims_for(&Uuid::new_v4().to_string(), None, now - 300),
        TEST_SECRET,
    );

    let result = decode_hs256(&token, TEST_SECRET);
    assert!(result.unwrap_err().contains("ExpiredSignature"));
}

#[test]
fn test_wrong_secret_is_rejected() {
    let now = Utc::now().timestamp() as usize;
    let token = sign(
        &claims_for(&Uuid::new_v4().to_string(), None, now + 3600),
        TEST_SECRET,
    );

    let result = decode_hs256(&token, "completely-wrong-secret-xxxxxxxxxxxxxxxxxxx");
    assert!(result.unwrap_err().contains("InvalidSignature"));
}

#[test]
fn test_garbage_token_is_rejected() {
    assert!(decode_hs256("not.a.valid.jwt", TEST_SECRET).is_err());
}

#[test]
fn test_non_uuid_subject_is_rejected() {
    let claims = claims_for("service-role", None, 0);
    assert!(claims.user_id().is_err());
}

#[test]
fn test_email_falls_back_to_metadata() {
    let mut claims = claims_for(&Uuid::new_v4().to_string(), None, 0);
    assert!(claims.user_email().is_none());

    claims.user_metadata = Some(UserMetadata {
        email: Some("meta@example.com".to_string()),
        email_verified: Some(true),
    });
    assert_eq!(claims.user_email().unwrap(), "meta@example.com");
}
