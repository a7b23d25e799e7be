//! Service-enablement handler.

use axum::extract::State;
use provgate_types::{RelayError, ops::EnableService};
use std::sync::Arc;

use crate::{
    AppState,
    envelope::{ApiError, Relayed},
    parse_body,
};

/// Handles `POST /service/enable`.
///
/// Billing must already be linked on the target project before most
/// service APIs enable successfully; that failure comes back from the
/// provider and is relayed as-is.
pub async fn enable(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Relayed, ApiError> {
    let req: EnableService = parse_body(&body)?;
    let tokens = req.tokens.ok_or(RelayError::MissingTokens)?;
    let service_name = req
        .service_name
        .ok_or(RelayError::MissingParam("serviceName"))?;

    tracing::info!(service = %service_name, project = ?req.project_id, "enable service request");

    let client = state.apis.authenticated(tokens);
    let data = client
        .enable_service(&service_name, req.project_id.as_deref())
        .await?;
    Ok(Relayed(data))
}
