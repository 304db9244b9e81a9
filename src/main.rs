use actix_web::{web, App, HttpServer};
use mailgreet::config::{EnvConfig, CONFIG};
use mailgreet::db::postgres_service::PostgresService;
use mailgreet::routes::configure_routes;
use mailgreet::utils::jwt::TokenIssuer;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );

    let issuer = web::Data::new(TokenIssuer::new(&config.jwt.secret, config.jwt.ttl_secs));

    CONFIG.set(config).expect("Config already initialized");

    println!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .app_data(issuer.clone())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
