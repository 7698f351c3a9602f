use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;

use crate::db::contacts as contact_db;
use crate::models::contacts::ContactSubmissionInput;
use crate::notify::{ContactRecord, Notifier, format_contact_email};
use crate::validation::validate_contact_form;

pub const SERVICES: [&str; 6] = [
    "Basement Remodeling",
    "Bathroom Remodeling",
    "Kitchen Remodeling",
    "Living Room Remodeling",
    "Indoor Remodeling",
    "Other",
];

pub const BUDGET_RANGES: [&str; 5] = [
    "Under $10,000",
    "$10,000 - $25,000",
    "$25,000 - $50,000",
    "$50,000 - $100,000",
    "Over $100,000",
];

pub const TIMELINES: [&str; 5] = [
    "As soon as possible",
    "Within 1-3 months",
    "Within 3-6 months",
    "6+ months",
    "Just exploring options",
];

pub const PROJECT_TYPES: [&str; 4] = ["single-family", "condo", "townhouse", "commercial"];

/// GET /api/contact/options — choices offered by the contact form selects.
pub async fn get_options() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "services": SERVICES,
        "budget_ranges": BUDGET_RANGES,
        "timelines": TIMELINES,
        "project_types": PROJECT_TYPES,
        "preferred_contact": ["email", "phone", "either"],
    }))
}

/// POST /api/contact — validate and store a contact form submission.
///
/// Validation problems come back as a field-keyed `errors` map. Storage
/// failures get a generic message; the details only go to the log.
pub async fn submit_contact(
    db: web::Data<DatabaseConnection>,
    notifier: web::Data<Notifier>,
    body: web::Json<ContactSubmissionInput>,
) -> impl Responder {
    let input = body.into_inner();

    let validation = validate_contact_form(&input.form_fields());
    if !validation.valid {
        return HttpResponse::BadRequest().json(validation);
    }

    match contact_db::submit_contact(db.get_ref(), input).await {
        Ok(stored) => {
            tracing::info!("Stored contact submission {}", stored.id);
            notifier.send_in_background(format_contact_email(&ContactRecord::from(&stored)));
            HttpResponse::Created().json(serde_json::json!({
                "message": "Thank you! We will get back to you soon.",
            }))
        }
        Err(e) => {
            tracing::error!("Failed to store contact submission: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to send message. Please try again.",
            }))
        }
    }
}
