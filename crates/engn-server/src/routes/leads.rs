//! Demo-request routes: `/api/leads`
//!
//! `POST` validates a submission and stores it; `GET` lists every stored
//! lead, newest first. The listing has no authentication and is meant for
//! informal inspection only.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;

use engn_core::model::Lead;

use crate::error::AppError;
use crate::state::AppState;

/// Build the `/api/leads` router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", post(create_lead).get(list_leads))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadResponse {
    pub success: bool,
    pub lead_id: u64,
}

/// Validate and store a demo request.
async fn create_lead(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CreateLeadResponse>, AppError> {
    let Json(body) = body?;
    let new_lead = state.schema.parse(&body)?;
    let lead = state.lead_store.create(new_lead).await?;

    Ok(Json(CreateLeadResponse {
        success: true,
        lead_id: lead.id,
    }))
}

/// List stored leads, most recent first.
async fn list_leads(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Lead>>, AppError> {
    let leads = state
        .lead_store
        .list()
        .await
        .map_err(|e| AppError::internal("Failed to fetch leads", &e))?;
    Ok(Json(leads))
}
