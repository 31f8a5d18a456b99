use crate::services::store::{DocumentStore, RecordStream, StorageError};
use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use mongodb::{
    bson::{doc, Bson, Document},
    Client as MongoClient, Database,
};

#[derive(Clone)]
pub struct MongoStore {
    client: MongoClient,
    db: Database,
}

impl MongoStore {
    /// Parse `uri` and build a client. The driver connects lazily, so an
    /// unreachable server surfaces on the first operation, not here.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StorageError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            StorageError::from(e)
        })?;
        let db = client.database(database);
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), StorageError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                StorageError::from(e)
            })?;
        Ok(())
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert(&self, collection: &str, record: Document) -> Result<String, StorageError> {
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(record, None)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to insert document: {}", e);
                StorageError::from(e)
            })?;

        Ok(match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => other.to_string(),
        })
    }

    async fn query(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<RecordStream, StorageError> {
        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(filter, None)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to query documents: {}", e);
                StorageError::from(e)
            })?;

        Ok(cursor.map_err(StorageError::from).boxed())
    }

    async fn collection_names(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.db.list_collection_names(None).await?)
    }
}
