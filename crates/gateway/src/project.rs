//! Project lookup and creation handlers.

use axum::extract::State;
use provgate_types::{
    RelayError,
    ops::{CreateProject, GetProject},
};
use serde_json::Value;
use std::sync::Arc;

use crate::{
    AppState,
    envelope::{ApiError, Relayed},
    parse_body,
};

/// Handles `POST /project/get`.
pub async fn get(State(state): State<Arc<AppState>>, body: String) -> Result<Relayed, ApiError> {
    let req: GetProject = parse_body(&body)?;
    let tokens = req.tokens.ok_or(RelayError::MissingTokens)?;
    let project_id = req.project_id.ok_or(RelayError::MissingParam("projectId"))?;

    tracing::info!(project = %project_id, "get project request");

    let client = state.apis.authenticated(tokens);
    let data = client.get_project(&project_id).await?;
    Ok(Relayed(data))
}

/// Handles `POST /project/create`.
///
/// The project id must be globally unique; uniqueness violations come back
/// from the provider and are relayed as-is.
pub async fn create(State(state): State<Arc<AppState>>, body: String) -> Result<Relayed, ApiError> {
    let req: CreateProject = parse_body(&body)?;
    let tokens = req.tokens.ok_or(RelayError::MissingTokens)?;
    let project_id = req.project_id.ok_or(RelayError::MissingParam("projectId"))?;

    tracing::info!(project = %project_id, "create project request");

    // Reassemble the creation payload: everything the caller sent except
    // `tokens`, with the project id restored under its wire name.
    let mut payload = req.extra;
    payload.insert("projectId".to_string(), Value::String(project_id));

    let client = state.apis.authenticated(tokens);
    let data = client.create_project(payload).await?;
    Ok(Relayed(data))
}
