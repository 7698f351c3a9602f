use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;

use crate::db::error_logs as error_log_db;
use crate::models::error_logs::CreateErrorLog;

/// POST /api/error-logs — record a client-side error report.
pub async fn create_error_log(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateErrorLog>,
) -> impl Responder {
    let input = body.into_inner();
    if input.message.trim().is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "message is required",
        }));
    }

    match error_log_db::insert_error_log(db.get_ref(), input).await {
        Ok(entry) => HttpResponse::Created().json(serde_json::json!({ "id": entry.id })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to store error log: {e}"),
        })),
    }
}
