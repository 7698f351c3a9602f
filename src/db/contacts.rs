use sea_orm::*;
use uuid::Uuid;

use crate::models::contacts::{self, ContactSubmissionInput};
use crate::models::{non_empty, trim_to};

const NAME_MAX: usize = 200;
const EMAIL_MAX: usize = 255;
const PHONE_MAX: usize = 50;
const MESSAGE_MAX: usize = 10_000;

/// Build the row to insert: text fields trimmed and cut to their column
/// limits, empty optional selects stored as NULL.
pub fn prepare_contact(input: ContactSubmissionInput) -> contacts::ActiveModel {
    contacts::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(trim_to(&input.name, NAME_MAX)),
        email: Set(trim_to(&input.email, EMAIL_MAX)),
        phone: Set(trim_to(&input.phone, PHONE_MAX)),
        preferred_contact: Set(input.preferred_contact),
        service: Set(input.service),
        project_type: Set(non_empty(input.project_type)),
        budget: Set(non_empty(input.budget)),
        timeline: Set(non_empty(input.timeline)),
        message: Set(trim_to(&input.message, MESSAGE_MAX)),
        created_at: Set(chrono::Utc::now()),
    }
}

/// Store a contact submission. The backend error is returned as-is.
pub async fn submit_contact(
    db: &DatabaseConnection,
    input: ContactSubmissionInput,
) -> Result<contacts::Model, DbErr> {
    prepare_contact(input).insert(db).await
}

/// Fetch all submissions, newest first.
pub async fn get_all_contacts(db: &DatabaseConnection) -> Result<Vec<contacts::Model>, DbErr> {
    contacts::Entity::find()
        .order_by_desc(contacts::Column::CreatedAt)
        .all(db)
        .await
}

/// Delete a submission by ID.
pub async fn delete_contact(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    contacts::Entity::delete_by_id(id).exec(db).await
}
