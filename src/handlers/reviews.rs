use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::cache::{CacheConfig, RedisCache, invalidate, keys};
use crate::db::reviews as review_db;
use crate::models::reviews::{Review, ReviewInput, ReviewListQuery, summarize_reviews};
use crate::notify::{Notifier, ReviewRecord, format_review_email};
use crate::validation::validate_review;

/// GET /api/reviews — public review list, newest first, optionally `?service=`.
///
/// A failed read renders as an empty list, same as having no reviews.
pub async fn get_reviews(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<Arc<RedisCache>>,
    cache_config: web::Data<CacheConfig>,
    query: web::Query<ReviewListQuery>,
) -> impl Responder {
    let service = query.service;
    let cache_key = keys::reviews(service.map_or("all", |s| s.as_str()));

    match cache.get::<Vec<Review>>(&cache_key).await {
        Ok(Some(cached)) => return HttpResponse::Ok().json(cached),
        Ok(None) => {}
        Err(e) => tracing::warn!("Cache error: {}", e),
    }

    let reviews = review_db::fetch_reviews(db.get_ref(), service).await;
    // An empty list may be a swallowed read failure; don't pin it in the cache.
    if !reviews.is_empty() {
        let ttl = cache_config.reviews_ttl.as_secs();
        if let Err(e) = cache.set(&cache_key, &reviews, Some(ttl)).await {
            tracing::warn!("Cache error: {}", e);
        }
    }
    HttpResponse::Ok().json(reviews)
}

/// GET /api/reviews/summary — average rating and review count.
pub async fn get_summary(db: web::Data<DatabaseConnection>) -> impl Responder {
    let reviews = review_db::fetch_reviews(db.get_ref(), None).await;
    HttpResponse::Ok().json(summarize_reviews(&reviews))
}

/// Shared by the public and admin create routes.
pub(crate) async fn create_review(
    db: &DatabaseConnection,
    cache: &RedisCache,
    notifier: &Notifier,
    input: ReviewInput,
) -> HttpResponse {
    let validation = validate_review(&input.form_fields());
    if !validation.valid {
        return HttpResponse::BadRequest().json(validation);
    }

    match review_db::submit_review(db, input).await {
        Ok(review) => {
            invalidate(cache, keys::REVIEWS_ALL).await;
            notifier.send_in_background(format_review_email(&ReviewRecord::from(&review)));
            HttpResponse::Created().json(review)
        }
        Err(e) => {
            tracing::error!("Failed to store review: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to submit review. Please try again.",
            }))
        }
    }
}

/// POST /api/reviews — submit a review from the public site.
pub async fn submit_review(
    db: web::Data<DatabaseConnection>,
    cache: web::Data<Arc<RedisCache>>,
    notifier: web::Data<Notifier>,
    body: web::Json<ReviewInput>,
) -> impl Responder {
    create_review(db.get_ref(), cache.get_ref(), notifier.get_ref(), body.into_inner()).await
}
