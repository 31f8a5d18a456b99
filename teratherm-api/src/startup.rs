//! Application wiring: state, router and server lifecycle.

use crate::config::{DatabaseConfig, TerathermConfig};
use crate::handlers;
use crate::services::{DocumentStore, MongoStore, UnavailableStore};
use axum::{
    extract::Request,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics_middleware, request_id_middleware, REQUEST_ID_HEADER};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/test", get(handlers::test_database))
        .route("/api/contact", post(handlers::submit_contact))
        .route("/api/case-studies", get(handlers::list_case_studies))
        .route("/metrics", get(handlers::metrics_endpoint))
        .with_state(state)
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            let request_id = request
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("-");

            tracing::info_span!(
                "http_request",
                request_id = %request_id,
                method = %request.method(),
                uri = %request.uri(),
            )
        }))
        .layer(from_fn(request_id_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Pick the storage adapter for this process.
///
/// No URL, or one the driver rejects, leaves the service running on
/// `UnavailableStore` so the read endpoints can degrade.
pub async fn connect_store(config: &DatabaseConfig) -> Arc<dyn DocumentStore> {
    let Some(url) = config.url.as_deref() else {
        tracing::warn!("DATABASE_URL not set, running without a database");
        return Arc::new(UnavailableStore);
    };

    match MongoStore::connect(url, &config.name).await {
        Ok(store) => {
            if let Err(e) = store.health_check().await {
                tracing::warn!(error = %e, "MongoDB not reachable yet, continuing");
            }
            Arc::new(store)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Invalid MongoDB configuration, running without a database");
            Arc::new(UnavailableStore)
        }
    }
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    pub async fn build(config: TerathermConfig) -> Result<Self, AppError> {
        let store = connect_store(&config.database).await;
        Self::build_with_store(config, store).await
    }

    /// Build around an already constructed adapter.
    pub async fn build_with_store(
        config: TerathermConfig,
        store: Arc<dyn DocumentStore>,
    ) -> Result<Self, AppError> {
        // Port 0 binds a random port for testing.
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        Ok(Self {
            port,
            listener,
            state: AppState::new(store),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let app = build_router(self.state);
        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
