mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    config::Config, error::AppError, router, service::token::TokenService, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    if config.uses_default_jwt_secret() {
        tracing::warn!("JWT_SECRET_KEY is not set; tokens are signed with the built-in development secret");
    }

    let db = startup::connect_to_database(&config).await?;

    // Create the default accounts on a fresh database
    startup::check_for_admin(&db, &config).await?;
    startup::seed_sample_creatures(&db, &config).await?;

    let tokens = TokenService::from_config(&config);
    let app = router::app(AppState::new(db, tokens));

    let listener = TcpListener::bind(&config.server_addr).await?;
    tracing::info!("Starting server on {}", config.server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");
}
