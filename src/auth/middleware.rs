use actix_web::FromRequest;
use actix_web::{Error, HttpRequest, dev::Payload, web};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::authorization::verify_admin;
use crate::auth::jwks::JwksCache;
use crate::auth::jwt;

/// Identity taken from a verified Supabase access token.
#[derive(Debug, Clone, Serialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: Option<String>,
}

pub struct AuthenticatedUser(pub AuthUser);

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            // 1. Extract the Bearer token from the Authorization header.
            let auth_header = req
                .headers()
                .get("Authorization")
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| {
                    actix_web::error::ErrorUnauthorized("Missing Authorization header")
                })?;

            let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
                actix_web::error::ErrorUnauthorized("Authorization header must be: Bearer <token>")
            })?;

            // 2. Get JWKS cache from app data
            let jwks_cache = req.app_data::<web::Data<Arc<JwksCache>>>().ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("JWKS cache not configured")
            })?;

            // 3. Validate the JWT
            let claims = jwt::validate_token(token, jwks_cache.get_ref())
                .await
                .map_err(|e| actix_web::error::ErrorUnauthorized(format!("Invalid token: {e}")))?;

            let id = claims
                .user_id()
                .map_err(actix_web::error::ErrorUnauthorized)?;

            Ok(AuthenticatedUser(AuthUser {
                id,
                email: claims.user_email(),
            }))
        })
    }
}

/// An authenticated user that also has a row in `admin_users`.
pub struct AdminUser(pub AuthUser);

impl FromRequest for AdminUser {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let authenticated = AuthenticatedUser::from_request(req, payload);
        let req = req.clone();

        Box::pin(async move {
            let AuthenticatedUser(user) = authenticated.await?;

            let db = req
                .app_data::<web::Data<DatabaseConnection>>()
                .ok_or_else(|| {
                    actix_web::error::ErrorInternalServerError("Database not configured")
                })?;

            verify_admin(db.get_ref(), user.id).await?;

            Ok(AdminUser(user))
        })
    }
}
