use sea_orm::Database;
use tracing::info;

use vendo_api::config::ApiConfig;
use vendo_api::infra::stripe::StripeClient;
use vendo_api::router::build_router;
use vendo_api::state::AppState;
use vendo_auth_types::token::JwtSecret;

#[tokio::main]
async fn main() {
    vendo_core::tracing::init_tracing();

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let stripe = StripeClient::new(&config);

    let state = AppState {
        db,
        jwt_secret: JwtSecret(config.jwt_secret.clone()),
        stripe,
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("api service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
