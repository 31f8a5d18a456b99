use service_core::observability::init_tracing;
use teratherm_api::config::TerathermConfig;
use teratherm_api::services::init_metrics;
use teratherm_api::startup::Application;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let otlp_endpoint = std::env::var("OTLP_ENDPOINT").ok();
    init_tracing("teratherm-api", "info", otlp_endpoint.as_deref());

    // Must run before any metrics are recorded.
    if let Err(e) = init_metrics() {
        tracing::warn!("Failed to install Prometheus recorder: {}", e);
    }

    let config = TerathermConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
