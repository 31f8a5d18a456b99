use axum::{extract::State, Json};
use serde::Serialize;

use crate::services::StorageError;
use crate::startup::AppState;

const BACKEND_RUNNING: &str = "✅ Running";
const ERROR_DETAIL_MAX_CHARS: usize = 80;

/// Outcome of probing the storage adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseStatus {
    Connected,
    NotInitialized,
    Error(String),
}

impl DatabaseStatus {
    pub fn label(&self) -> String {
        match self {
            Self::Connected => "✅ Connected".to_string(),
            Self::NotInitialized => "⚠️ Available but not initialized".to_string(),
            Self::Error(detail) => format!("❌ Error: {}", detail),
        }
    }

    fn from_error(err: &StorageError) -> Self {
        match err {
            StorageError::Unavailable => Self::NotInitialized,
            other => Self::Error(truncate_chars(&other.to_string(), ERROR_DETAIL_MAX_CHARS)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: &'static str,
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections: Option<Vec<String>>,
}

/// `GET /test`. Always 200; storage failures are reported in the body.
#[tracing::instrument(skip(state))]
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let (status, collections) = match state.store.collection_names().await {
        Ok(names) => (DatabaseStatus::Connected, Some(names)),
        Err(e) => {
            tracing::warn!(error = %e, "Database diagnostics failed");
            (DatabaseStatus::from_error(&e), None)
        }
    };

    Json(DiagnosticsResponse {
        backend: BACKEND_RUNNING,
        database: status.label(),
        collections,
    })
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
