//! `POST /api/notifications/webhook` authorization and payload checks.
//! The notifier is disabled, so no request ever reaches the email API.
use actix_web::{App, http::StatusCode, test, web};

use jen_site_backend::handlers;
use jen_site_backend::handlers::notifications::WebhookSecret;
use jen_site_backend::notify::Notifier;

macro_rules! app_with_secret {
    ($secret:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(Notifier::disabled()))
                .app_data(web::Data::new(WebhookSecret($secret)))
                .service(web::scope("/api").configure(handlers::init_routes)),
        )
        .await
    };
}

fn payload() -> serde_json::Value {
    serde_json::json!({
        "type": "INSERT",
        "table": "reviews",
        "record": { "name": "Gail", "rating": 5, "text": "Great" },
    })
}

#[actix_web::test]
async fn wrong_secret_is_unauthorized() {
    let app = app_with_secret!(Some("hook-secret".to_string()));

    let req = test::TestRequest::post()
        .uri("/api/notifications/webhook")
        .insert_header(("Authorization", "Bearer hook-secreT"))
        .set_json(payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn missing_header_is_unauthorized() {
    let app = app_with_secret!(Some("hook-secret".to_string()));

    let req = test::TestRequest::post()
        .uri("/api/notifications/webhook")
        .set_json(payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn correct_secret_passes_to_configuration_check() {
    let app = app_with_secret!(Some("hook-secret".to_string()));

    let req = test::TestRequest::post()
        .uri("/api/notifications/webhook")
        .insert_header(("Authorization", "Bearer hook-secret"))
        .set_json(payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(json["error"], "Server configuration missing");
}

#[actix_web::test]
async fn no_configured_secret_accepts_any_caller() {
    let app = app_with_secret!(None);

    let req = test::TestRequest::post()
        .uri("/api/notifications/webhook")
        .set_json(payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
