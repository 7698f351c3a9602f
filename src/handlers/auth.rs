use actix_web::{HttpResponse, Responder};

use crate::auth::middleware::AdminUser;

/// GET /api/admin/me — return the signed-in administrator.
pub async fn me(admin: AdminUser) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "user": admin.0,
        "is_admin": true,
    }))
}
