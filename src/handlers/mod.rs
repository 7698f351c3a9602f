pub mod admin;
pub mod auth;
pub mod contact;
pub mod error_logs;
pub mod notifications;
pub mod projects;
pub mod reviews;

use actix_web::web;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Public site routes (no authentication) ──
    cfg.service(
        web::scope("/contact")
            .route("", web::post().to(contact::submit_contact))
            .route("/options", web::get().to(contact::get_options)),
    );
    cfg.service(
        web::scope("/reviews")
            .route("", web::get().to(reviews::get_reviews))
            .route("", web::post().to(reviews::submit_review))
            .route("/summary", web::get().to(reviews::get_summary)),
    );
    cfg.service(web::resource("/projects").route(web::get().to(projects::get_projects)));
    cfg.service(web::resource("/error-logs").route(web::post().to(error_logs::create_error_log)));
    cfg.service(
        web::resource("/notifications/webhook")
            .route(web::post().to(notifications::handle_webhook)),
    );

    // ── Admin routes (require a JWT whose user is in admin_users) ──
    cfg.service(
        web::scope("/admin")
            .route("/me", web::get().to(auth::me))
            .route("/contacts", web::get().to(admin::get_contacts))
            .route("/contacts/{id}", web::delete().to(admin::delete_contact))
            .route("/reviews", web::get().to(admin::get_reviews))
            .route("/reviews", web::post().to(admin::create_review_as_admin))
            .route("/reviews/{id}", web::delete().to(admin::delete_review))
            .route("/projects", web::get().to(admin::get_projects))
            .route("/projects", web::post().to(admin::create_project))
            .route("/projects/{id}", web::patch().to(admin::update_project))
            .route("/projects/{id}", web::delete().to(admin::delete_project))
            .route("/projects/{id}/images", web::post().to(admin::add_image))
            .route("/images/{id}", web::delete().to(admin::delete_image)),
    );
}
