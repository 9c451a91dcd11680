use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use zonebook::config::{AppConfig, ServiceArea};
use zonebook::handlers;
use zonebook::services::calendar::composio::ComposioCalendar;
use zonebook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    let area = ServiceArea::malones()?;

    if config.composio_api_key.is_empty() {
        tracing::warn!("COMPOSIO_API_KEY not set, calendar calls will be rejected upstream");
    }
    tracing::info!(
        base_url = %config.composio_base_url,
        calendar_id = %config.calendar_id,
        timeout_secs = config.calendar_timeout_secs,
        "using Composio calendar"
    );
    let calendar = ComposioCalendar::new(
        config.composio_api_key.clone(),
        config.composio_base_url.clone(),
        config.calendar_id.clone(),
        config.calendar_timeout(),
    )?;

    let state = Arc::new(AppState {
        config: config.clone(),
        area,
        calendar: Box::new(calendar),
    });

    let app = handlers::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
