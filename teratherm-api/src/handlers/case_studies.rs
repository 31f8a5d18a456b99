use axum::{
    extract::{Query, State},
    Json,
};
use futures::{StreamExt, TryStreamExt};
use mongodb::bson::{doc, Document};

use crate::models::{CaseStudy, CASE_STUDY_COLLECTION};
use crate::services::{case_studies_or_demo, DocumentStore, StorageError};
use crate::startup::AppState;

#[derive(Debug, Default)]
pub struct CaseStudyQuery {
    pub category: Option<String>,
}

impl CaseStudyQuery {
    /// Build from raw query pairs. A repeated `category` keeps the last value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let category = pairs
            .into_iter()
            .filter(|(key, _)| key == "category")
            .map(|(_, value)| value)
            .last();
        Self { category }
    }

    /// Exact-match filter; an empty category means no filter.
    pub fn filter(&self) -> Document {
        match self.category.as_deref() {
            Some(category) if !category.is_empty() => doc! { "category": category },
            _ => doc! {},
        }
    }
}

/// `GET /api/case-studies`. Never fails; see `case_studies_or_demo`.
#[tracing::instrument(skip(state, params))]
pub async fn list_case_studies(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<Vec<CaseStudy>> {
    let query = CaseStudyQuery::from_pairs(params);
    tracing::debug!(category = ?query.category, "Listing case studies");

    let live = fetch_case_studies(state.store.as_ref(), query.filter()).await;
    Json(case_studies_or_demo(live))
}

pub async fn fetch_case_studies(
    store: &dyn DocumentStore,
    filter: Document,
) -> Result<Vec<CaseStudy>, StorageError> {
    store
        .query(CASE_STUDY_COLLECTION, filter)
        .await?
        .map(|doc| doc.and_then(|d| CaseStudy::from_document(d).map_err(StorageError::from)))
        .try_collect()
        .await
}
