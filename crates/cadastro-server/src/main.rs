mod routes;
mod views;

use anyhow::{Context, Result};
use cadastro_form::{Config, FormController};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::var("CADASTRO_CONFIG") {
        Ok(path) => Config::load(path),
        Err(_) => Config::load_default(),
    }
    .unwrap_or_else(|e| {
        warn!("Failed to load config: {:#}, using defaults", e);
        Config::default()
    });

    let port = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(config.server.port);

    info!(
        success_display_secs = config.form.success_display_secs,
        overrides = config.messages.len(),
        "cadastro starting"
    );

    let controller = FormController::from_config(&config)?;
    let app = routes::router(controller).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
