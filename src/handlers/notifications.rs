use actix_web::{HttpRequest, HttpResponse, Responder, web};
use serde::Deserialize;
use subtle::ConstantTimeEq;

use crate::notify::Notifier;
use crate::notify::format::{TableEvent, format_table_event};

/// Shared secret database webhooks must present, if configured.
#[derive(Clone, Default)]
pub struct WebhookSecret(pub Option<String>);

/// Row-change event as sent by a database webhook.
#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    #[serde(rename = "type")]
    pub event: Option<String>,
    pub table: Option<String>,
    pub record: Option<serde_json::Value>,
    pub old_record: Option<serde_json::Value>,
}

fn parse_event(raw: Option<&str>) -> Option<TableEvent> {
    match raw? {
        "INSERT" => Some(TableEvent::Insert),
        "UPDATE" => Some(TableEvent::Update),
        "DELETE" => Some(TableEvent::Delete),
        _ => None,
    }
}

/// Constant-time comparison of a presented secret with the configured one.
pub fn secret_matches(provided: Option<&str>, expected: &str) -> bool {
    provided.is_some_and(|p| bool::from(p.as_bytes().ct_eq(expected.as_bytes())))
}

fn authorized(req: &HttpRequest, secret: &WebhookSecret) -> bool {
    let Some(expected) = secret.0.as_deref() else {
        return true;
    };
    let provided = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));
    secret_matches(provided, expected)
}

/// POST /api/notifications/webhook — email the site owner about a row change.
pub async fn handle_webhook(
    req: HttpRequest,
    notifier: web::Data<Notifier>,
    secret: web::Data<WebhookSecret>,
    body: web::Json<WebhookPayload>,
) -> impl Responder {
    if !authorized(&req, secret.get_ref()) {
        return HttpResponse::Unauthorized().json(serde_json::json!({
            "error": "Invalid webhook secret",
        }));
    }

    if !notifier.is_enabled() {
        tracing::error!("Missing RESEND_API_KEY or NOTIFICATION_EMAIL");
        return HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Server configuration missing",
        }));
    }

    let payload = body.into_inner();
    let Some(event) = parse_event(payload.event.as_deref()) else {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Unsupported event type",
        }));
    };

    let data = match event {
        TableEvent::Delete => payload.old_record.as_ref(),
        _ => payload.record.as_ref(),
    };
    if data.is_none() && event != TableEvent::Delete {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "No record in payload",
        }));
    }

    let message = format_table_event(payload.table.as_deref(), event, data);
    match notifier.send(&message).await {
        Ok(id) => HttpResponse::Ok().json(serde_json::json!({ "ok": true, "id": id })),
        Err(e) => {
            tracing::error!("Notification send failed: {e}");
            HttpResponse::BadGateway().json(serde_json::json!({
                "error": "Failed to send email",
                "details": e.to_string(),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_must_match_exactly() {
        assert!(secret_matches(Some("s3cret"), "s3cret"));
        assert!(!secret_matches(Some("s3cre"), "s3cret"));
        assert!(!secret_matches(Some("s3cretx"), "s3cret"));
        assert!(!secret_matches(None, "s3cret"));
    }

    #[test]
    fn unknown_event_names_are_rejected() {
        assert_eq!(parse_event(Some("UPDATE")), Some(TableEvent::Update));
        assert_eq!(parse_event(Some("TRUNCATE")), None);
        assert_eq!(parse_event(None), None);
    }
}
