use axum::{extract::State, Json};
use serde::Serialize;
use service_core::error::AppError;

use crate::extractors::ValidatedJson;
use crate::models::{ContactMessage, ContactRequest, CONTACT_COLLECTION};
use crate::startup::AppState;

#[derive(Debug, Serialize)]
pub struct SubmitContactResponse {
    pub status: &'static str,
    pub id: String,
}

/// `POST /api/contact`. Invalid input never reaches storage.
#[tracing::instrument(skip(state, request))]
pub async fn submit_contact(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ContactRequest>,
) -> Result<Json<SubmitContactResponse>, AppError> {
    let record = ContactMessage::from_request(request);
    let document = mongodb::bson::to_document(&record).map_err(anyhow::Error::new)?;

    let id = state.store.insert(CONTACT_COLLECTION, document).await?;
    tracing::info!(id = %id, "Contact message stored");

    Ok(Json(SubmitContactResponse { status: "ok", id }))
}
