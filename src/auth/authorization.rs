use actix_web::Error;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::db::admin_users as admin_db;

/// Reject users without an `admin_users` row.
pub async fn verify_admin(db: &DatabaseConnection, user_id: Uuid) -> Result<(), Error> {
    match admin_db::is_admin(db, user_id).await {
        Ok(true) => Ok(()),
        Ok(false) => {
            tracing::warn!("Admin access denied for user {user_id}");
            Err(actix_web::error::ErrorForbidden(
                "Access denied. You are not an administrator.",
            ))
        }
        Err(e) => Err(actix_web::error::ErrorInternalServerError(format!(
            "Database error: {e}"
        ))),
    }
}
