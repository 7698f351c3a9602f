use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use moka::future::Cache;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

const JWKS_URL_TEMPLATE: &str = "https://{}.supabase.co/auth/v1/.well-known/jwks.json";

#[derive(Clone)]
struct JwksKeyData {
    x: String,
    y: String,
    algorithm: Algorithm,
}

#[derive(Deserialize)]
struct JwkSet {
    keys: Vec<Jwk>,
}

/// The EC fields of a JSON Web Key; other key types are ignored.
#[derive(Deserialize)]
struct Jwk {
    kid: Option<String>,
    alg: Option<String>,
    x: Option<String>,
    y: Option<String>,
}

/// Verifies Supabase access tokens. Signing keys are fetched from the
/// project's JWKS endpoint and cached for an hour.
#[derive(Clone)]
pub struct JwksCache {
    cache: Arc<Cache<String, JwksKeyData>>,
    jwks_url: String,
    client: reqwest::Client,
    anon_key: String,
    legacy_secret: Option<String>,
}

impl JwksCache {
    pub fn new(project_ref: &str, anon_key: &str) -> Self {
        let client = reqwest::Client::new();
        let cache = Arc::new(
            Cache::builder()
                .time_to_live(std::time::Duration::from_secs(3600))
                .max_capacity(10)
                .build(),
        );

        let jwks_url = JWKS_URL_TEMPLATE.replace("{}", project_ref);

        Self {
            cache,
            jwks_url,
            client,
            anon_key: anon_key.to_string(),
            legacy_secret: None,
        }
    }

    /// Also accept HS256 tokens signed with the project's legacy JWT secret.
    pub fn with_legacy_secret(mut self, secret: Option<String>) -> Self {
        self.legacy_secret = secret;
        self
    }

    async fn fetch_jwks(&self) -> Result<JwkSet, String> {
        debug!("Fetching JWKS from {}", self.jwks_url);

        let response = self
            .client
            .get(&self.jwks_url)
            .header("apikey", &self.anon_key)
            .send()
            .await
            .map_err(|e| format!("Failed to fetch JWKS: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("Failed to fetch JWKS: HTTP {status}"));
        }

        response
            .json::<JwkSet>()
            .await
            .map_err(|e| format!("Failed to parse JWKS JSON: {e}"))
    }

    async fn get_key_data(&self, kid: &str) -> Result<JwksKeyData, String> {
        if let Some(cached) = self.cache.get(kid).await {
            return Ok(cached);
        }

        let jwk = self
            .fetch_jwks()
            .await?
            .keys
            .into_iter()
            .find(|k| k.kid.as_deref() == Some(kid))
            .ok_or(format!("Key with kid={kid} not found in JWKS"))?;

        let algorithm = match jwk.alg.as_deref() {
            Some("ES384") => Algorithm::ES384,
            _ => Algorithm::ES256,
        };
        let key_data = JwksKeyData {
            x: jwk.x.ok_or("Missing 'x' in JWK")?,
            y: jwk.y.ok_or("Missing 'y' in JWK")?,
            algorithm,
        };

        self.cache.insert(kid.to_string(), key_data.clone()).await;
        Ok(key_data)
    }

    pub async fn validate_token(&self, token: &str) -> Result<super::jwt::Claims, String> {
        let header = decode_header(token).map_err(|e| format!("Failed to decode header: {e}"))?;

        if header.alg == Algorithm::HS256 {
            let secret = self
                .legacy_secret
                .as_deref()
                .ok_or("HS256 tokens are not accepted")?;
            return super::jwt::decode_hs256(token, secret);
        }

        let kid = header.kid.ok_or("No 'kid' in token header")?;

        let key_data = self.get_key_data(&kid).await?;

        let decoding_key = DecodingKey::from_ec_components(&key_data.x, &key_data.y)
            .map_err(|e| format!("Failed to create decoding key: {e}"))?;

        let mut validation = Validation::new(key_data.algorithm);
        validation.validate_aud = false;

        decode::<super::jwt::Claims>(token, &decoding_key, &validation)
            .map(|td| td.claims)
            .map_err(|e| format!("Token validation failed: {e}"))
    }
}
