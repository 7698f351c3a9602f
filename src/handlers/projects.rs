use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::cache::{CacheConfig, RedisCache, keys};
use crate::db::projects as project_db;
use crate::models::projects::{ProjectListQuery, ProjectView};

/// GET /api/projects — before/after gallery, optionally `?category=`.
///
/// A failed read renders as an empty gallery.
pub async fn get_projects(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<Arc<RedisCache>>,
    cache_config: web::Data<CacheConfig>,
    query: web::Query<ProjectListQuery>,
) -> impl Responder {
    let category = query.category;
    let cache_key = keys::projects(category.map_or("all", |c| c.as_str()));

    match cache.get::<Vec<ProjectView>>(&cache_key).await {
        Ok(Some(cached)) => return HttpResponse::Ok().json(cached),
        Ok(None) => {}
        Err(e) => tracing::warn!("Cache error: {}", e),
    }

    let projects = project_db::fetch_projects(db.get_ref(), category).await;
    if !projects.is_empty() {
        let ttl = cache_config.projects_ttl.as_secs();
        if let Err(e) = cache.set(&cache_key, &projects, Some(ttl)).await {
            tracing::warn!("Cache error: {}", e);
        }
    }
    HttpResponse::Ok().json(projects)
}
