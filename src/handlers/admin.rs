//! Back-office routes. Every handler takes an [`AdminUser`], so requests
//! without a valid token and an `admin_users` row never reach the database.
//!
//! Unlike the public listings, admin reads report database errors.

use actix_web::{HttpResponse, Responder, web};
use sea_orm::{DatabaseConnection, DbErr, DeleteResult};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::middleware::AdminUser;
use crate::cache::{RedisCache, invalidate, keys};
use crate::db::contacts as contact_db;
use crate::db::projects as project_db;
use crate::db::reviews as review_db;
use crate::handlers::reviews::create_review;
use crate::models::project_images::CreateProjectImage;
use crate::models::projects::{CreateProject, UpdateProject};
use crate::models::reviews::ReviewInput;
use crate::notify::Notifier;

fn deleted_response(what: &str, id: Uuid, result: Result<DeleteResult, DbErr>) -> HttpResponse {
    match result {
        Ok(result) if result.rows_affected > 0 => HttpResponse::Ok().json(serde_json::json!({
            "message": format!("{what} {id} deleted"),
        })),
        Ok(_) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("{what} {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete {}: {e}", what.to_lowercase()),
        })),
    }
}

// ── Contacts ──

/// GET /api/admin/contacts — all contact submissions, newest first.
pub async fn get_contacts(_admin: AdminUser, db: web::Data<DatabaseConnection>) -> impl Responder {
    match contact_db::get_all_contacts(db.get_ref()).await {
        Ok(contacts) => HttpResponse::Ok().json(contacts),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch contacts: {e}"),
        })),
    }
}

/// DELETE /api/admin/contacts/{id}
pub async fn delete_contact(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    deleted_response(
        "Contact",
        id,
        contact_db::delete_contact(db.get_ref(), id).await,
    )
}

// ── Reviews ──

/// GET /api/admin/reviews — all reviews, newest first.
pub async fn get_reviews(_admin: AdminUser, db: web::Data<DatabaseConnection>) -> impl Responder {
    match review_db::get_all_reviews(db.get_ref(), None).await {
        Ok(reviews) => HttpResponse::Ok().json(reviews),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch reviews: {e}"),
        })),
    }
}

/// POST /api/admin/reviews — enter a testimonial on a client's behalf.
pub async fn create_review_as_admin(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<Arc<RedisCache>>,
    notifier: web::Data<Notifier>,
    body: web::Json<ReviewInput>,
) -> impl Responder {
    create_review(db.get_ref(), cache.get_ref(), notifier.get_ref(), body.into_inner()).await
}

/// DELETE /api/admin/reviews/{id}
pub async fn delete_review(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<Arc<RedisCache>>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    let result = review_db::delete_review(db.get_ref(), id).await;
    if result.is_ok() {
        invalidate(cache.get_ref(), keys::REVIEWS_ALL).await;
    }
    deleted_response("Review", id, result)
}

// ── Projects ──

/// GET /api/admin/projects — projects with their image rows.
pub async fn get_projects(_admin: AdminUser, db: web::Data<DatabaseConnection>) -> impl Responder {
    match project_db::get_projects_with_images(db.get_ref()).await {
        Ok(projects) => HttpResponse::Ok().json(projects),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch projects: {e}"),
        })),
    }
}

/// POST /api/admin/projects
pub async fn create_project(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<Arc<RedisCache>>,
    body: web::Json<CreateProject>,
) -> impl Responder {
    let input = body.into_inner();
    if input.title.trim().is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Title is required",
        }));
    }

    match project_db::insert_project(db.get_ref(), input).await {
        Ok(project) => {
            invalidate(cache.get_ref(), keys::PROJECTS_ALL).await;
            HttpResponse::Created().json(project)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create project: {e}"),
        })),
    }
}

/// PATCH /api/admin/projects/{id} — change only the fields sent.
pub async fn update_project(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<Arc<RedisCache>>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateProject>,
) -> impl Responder {
    let id = path.into_inner();
    match project_db::update_project(db.get_ref(), id, body.into_inner()).await {
        Ok(updated) => {
            invalidate(cache.get_ref(), keys::PROJECTS_ALL).await;
            HttpResponse::Ok().json(updated)
        }
        Err(DbErr::RecordNotFound(_)) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Project {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to update project: {e}"),
        })),
    }
}

/// DELETE /api/admin/projects/{id} — remove a project and all its images.
pub async fn delete_project(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<Arc<RedisCache>>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    let result = project_db::delete_project(db.get_ref(), id).await;
    if result.is_ok() {
        invalidate(cache.get_ref(), keys::PROJECTS_ALL).await;
    }
    deleted_response("Project", id, result)
}

/// POST /api/admin/projects/{id}/images — append a before/after photo.
pub async fn add_image(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<Arc<RedisCache>>,
    path: web::Path<Uuid>,
    body: web::Json<CreateProjectImage>,
) -> impl Responder {
    let project_id = path.into_inner();

    match project_db::get_project_by_id(db.get_ref(), project_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Project {project_id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    }

    let input = body.into_inner();
    if input.url.trim().is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Image URL is required",
        }));
    }

    match project_db::insert_image(db.get_ref(), project_id, input).await {
        Ok(image) => {
            invalidate(cache.get_ref(), keys::PROJECTS_ALL).await;
            HttpResponse::Created().json(image)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to add image: {e}"),
        })),
    }
}

/// DELETE /api/admin/images/{id}
pub async fn delete_image(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<Arc<RedisCache>>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    let result = project_db::delete_image(db.get_ref(), id).await;
    if result.is_ok() {
        invalidate(cache.get_ref(), keys::PROJECTS_ALL).await;
    }
    deleted_response("Image", id, result)
}
