// Main entry point - Dependency injection and server setup
use std::sync::Arc;
use axum::{routing::{get, post}, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use dashboard_normalizer::application::dashboard_service::DashboardService;
use dashboard_normalizer::infrastructure::config::{load_service_config, LoggingSettings};
use dashboard_normalizer::presentation::app_state::AppState;
use dashboard_normalizer::presentation::handlers::{
    health_check, normalize_component, normalize_dashboard, project_rows,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let service_config = load_service_config()?;

    // Initialize tracing
    init_tracing(&service_config.logging);

    let addr = service_config.server.socket_addr()?;

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service: DashboardService::new(),
        compress_responses: service_config.http.compress_responses,
    });

    // Build router (presentation layer)
    // Compression is applied per response in json_response, not as a layer
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboards/normalize", post(normalize_dashboard))
        .route("/components/normalize", post(normalize_component))
        .route("/charts/project", post(project_rows))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    tracing::info!("Starting dashboard-normalizer service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}

fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
