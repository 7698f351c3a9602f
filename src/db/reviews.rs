use sea_orm::*;
use uuid::Uuid;

use crate::models::reviews::{self, Review, ReviewInput, ReviewService};
use crate::models::trim_to;

const NAME_MAX: usize = 200;
const TEXT_MAX: usize = 5_000;

/// Public review list, newest first.
///
/// Read failures are logged and reported as an empty list so the reviews
/// page still renders.
pub async fn fetch_reviews(db: &DatabaseConnection, service: Option<ReviewService>) -> Vec<Review> {
    match get_all_reviews(db, service).await {
        Ok(rows) => rows.into_iter().map(Review::from).collect(),
        Err(e) => {
            tracing::warn!("Failed to fetch reviews: {e}");
            Vec::new()
        }
    }
}

/// Review rows, newest first. Errors are propagated.
pub async fn get_all_reviews(
    db: &DatabaseConnection,
    service: Option<ReviewService>,
) -> Result<Vec<reviews::Model>, DbErr> {
    let mut query = reviews::Entity::find();
    if let Some(service) = service {
        query = query.filter(reviews::Column::Service.eq(service));
    }
    query
        .order_by_desc(reviews::Column::CreatedAt)
        .all(db)
        .await
}

/// Build the row to insert with `name` and `text` trimmed and cut to size.
pub fn prepare_review(input: ReviewInput) -> reviews::ActiveModel {
    reviews::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(trim_to(&input.name, NAME_MAX)),
        service: Set(input.service),
        rating: Set(input.rating),
        text: Set(trim_to(&input.text, TEXT_MAX)),
        helpful: Set(Some(0)),
        created_at: Set(chrono::Utc::now()),
    }
}

/// Insert a review and return the stored row in its display shape.
///
/// The insert and the read-back share one `INSERT ... RETURNING` round trip.
pub async fn submit_review(db: &DatabaseConnection, input: ReviewInput) -> Result<Review, DbErr> {
    let row = prepare_review(input).insert(db).await?;
    Ok(Review::from(row))
}

/// Delete a review by ID.
pub async fn delete_review(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    reviews::Entity::delete_by_id(id).exec(db).await
}
