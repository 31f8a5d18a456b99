//! Storage adapter contract.
//!
//! Handlers only see `DocumentStore`; the concrete backend is chosen once at
//! startup and injected through `AppState`.

use async_trait::async_trait;
use futures::stream::BoxStream;
use mongodb::bson::Document;
use service_core::error::AppError;
use thiserror::Error;

/// Lazy, finite, single-pass sequence of records.
pub type RecordStream = BoxStream<'static, Result<Document, StorageError>>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database not configured")]
    Unavailable,

    #[error("{0}")]
    Backend(String),

    #[error("Malformed record: {0}")]
    Decode(#[from] mongodb::bson::de::Error),
}

impl From<mongodb::error::Error> for StorageError {
    fn from(err: mongodb::error::Error) -> Self {
        StorageError::Backend(err.to_string())
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::DatabaseError(anyhow::Error::new(err))
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Append `record` to `collection` and return its identifier.
    async fn insert(&self, collection: &str, record: Document) -> Result<String, StorageError>;

    /// Records in `collection` whose fields equal every entry of `filter`.
    async fn query(&self, collection: &str, filter: Document)
    -> Result<RecordStream, StorageError>;

    async fn collection_names(&self) -> Result<Vec<String>, StorageError>;
}

/// Stand-in used when no database is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

#[async_trait]
impl DocumentStore for UnavailableStore {
    async fn insert(&self, _collection: &str, _record: Document) -> Result<String, StorageError> {
        Err(StorageError::Unavailable)
    }

    async fn query(
        &self,
        _collection: &str,
        _filter: Document,
    ) -> Result<RecordStream, StorageError> {
        Err(StorageError::Unavailable)
    }

    async fn collection_names(&self) -> Result<Vec<String>, StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn unavailable_store_fails_every_operation() {
        let store = UnavailableStore;

        assert!(matches!(
            store.insert("contactmessage", doc! { "a": 1 }).await,
            Err(StorageError::Unavailable)
        ));
        assert!(matches!(
            store.query("casestudy", doc! {}).await,
            Err(StorageError::Unavailable)
        ));
        assert!(matches!(
            store.collection_names().await,
            Err(StorageError::Unavailable)
        ));
    }

    #[test]
    fn storage_error_maps_to_database_error() {
        let err: AppError = StorageError::Backend("socket closed".to_string()).into();
        match err {
            AppError::DatabaseError(inner) => assert_eq!(inner.to_string(), "socket closed"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
