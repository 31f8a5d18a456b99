#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use futures::StreamExt;
use mongodb::bson::{oid::ObjectId, Document};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use teratherm_api::services::{DocumentStore, RecordStream, StorageError, UnavailableStore};
use teratherm_api::{build_router, AppState};
use tower::util::ServiceExt;

/// In-process document store with exact-match filtering.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn seeded(collection: &str, records: Vec<Document>) -> Self {
        let store = Self::default();
        {
            let mut collections = store.collections.lock().unwrap();
            let entries = collections.entry(collection.to_string()).or_default();
            for mut record in records {
                if !record.contains_key("_id") {
                    record.insert("_id", ObjectId::new());
                }
                entries.push(record);
            }
        }
        store
    }

    pub fn records(&self, collection: &str) -> Vec<Document> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: &str, mut record: Document) -> Result<String, StorageError> {
        let id = ObjectId::new();
        record.insert("_id", id);
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(record);
        Ok(id.to_hex())
    }

    async fn query(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<RecordStream, StorageError> {
        let matching: Vec<Result<Document, StorageError>> = self
            .records(collection)
            .into_iter()
            .filter(|record| filter.iter().all(|(k, v)| record.get(k) == Some(v)))
            .map(Ok)
            .collect();
        Ok(futures::stream::iter(matching).boxed())
    }

    async fn collection_names(&self) -> Result<Vec<String>, StorageError> {
        let mut names: Vec<String> = self.collections.lock().unwrap().keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

/// Store whose backend rejects every call.
pub struct FailingStore {
    pub message: String,
}

impl FailingStore {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn insert(&self, _collection: &str, _record: Document) -> Result<String, StorageError> {
        Err(StorageError::Backend(self.message.clone()))
    }

    async fn query(
        &self,
        _collection: &str,
        _filter: Document,
    ) -> Result<RecordStream, StorageError> {
        Err(StorageError::Backend(self.message.clone()))
    }

    async fn collection_names(&self) -> Result<Vec<String>, StorageError> {
        Err(StorageError::Backend(self.message.clone()))
    }
}

pub fn router_with(store: Arc<dyn DocumentStore>) -> Router {
    build_router(AppState::new(store))
}

pub fn unavailable_router() -> Router {
    router_with(Arc::new(UnavailableStore))
}

pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.expect("request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    send(router, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}
