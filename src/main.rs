use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use jen_site_backend::auth::jwks::JwksCache;
use jen_site_backend::cache::{CacheConfig, RedisCache};
use jen_site_backend::create_pool;
use jen_site_backend::handlers;
use jen_site_backend::handlers::notifications::WebhookSecret;
use jen_site_backend::notify::{NotifyConfig, Notifier};
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let db = create_pool().await;
    if std::env::var("RUN_MIGRATIONS").is_ok_and(|v| v == "true") {
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");
        tracing::info!("Migrations applied");
    }
    let db_data = web::Data::new(db);

    // Listing cache for the public reviews and gallery pages
    let redis_url = std::env::var("REDIS_URL").expect("REDIS_URL must be set");
    let redis_cache = RedisCache::new(&redis_url)
        .await
        .expect("Failed to connect to Redis");
    let redis_data = web::Data::new(Arc::new(redis_cache));
    let cache_config = web::Data::new(CacheConfig::from_env());
    tracing::info!("Connected to Redis");

    let supabase_url = std::env::var("SUPABASE_URL").expect("SUPABASE_URL must be set");
    let project_ref = supabase_url
        .strip_prefix("https://")
        .and_then(|s| s.strip_suffix(".supabase.co"))
        .expect("Invalid SUPABASE_URL format. Expected: https://PROJECT.supabase.co");

    let supabase_anon_key =
        std::env::var("SUPABASE_ANON_KEY").expect("SUPABASE_ANON_KEY must be set");
    let legacy_secret = std::env::var("SUPABASE_JWT_SECRET").ok();
    let jwks_cache = web::Data::new(Arc::new(
        JwksCache::new(project_ref, &supabase_anon_key).with_legacy_secret(legacy_secret),
    ));

    let notifier = Notifier::new(NotifyConfig::from_env());
    if !notifier.is_enabled() {
        tracing::warn!("RESEND_API_KEY or NOTIFICATION_EMAIL not set; notifications disabled");
    }
    let notifier = web::Data::new(notifier);
    let webhook_secret = web::Data::new(WebhookSecret(std::env::var("WEBHOOK_SECRET").ok()));

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_addr = format!("0.0.0.0:{port}");
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(db_data.clone())
            .app_data(redis_data.clone())
            .app_data(cache_config.clone())
            .app_data(jwks_cache.clone())
            .app_data(notifier.clone())
            .app_data(webhook_secret.clone())
            .service(web::scope("/api").configure(handlers::init_routes))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
