//! Server binary: config from env, schema setup, then serve the routers.

use axum::Router;
use qna_api::{
    api_routes, apply_migrations, common_routes, connect_pool, ensure_database_exists, AppConfig,
    AppState,
};
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("qna_api=info".parse()?))
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(database_url = %config.redacted_database_url(), "starting");

    ensure_database_exists(&config.database_url).await?;
    let pool = connect_pool(&config).await?;
    apply_migrations(&pool).await?;

    let state = AppState { pool };
    let app = Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .layer(RequestBodyLimitLayer::new(1024 * 1024));

    let listener = TcpListener::bind(config.bind_addr.as_str()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
