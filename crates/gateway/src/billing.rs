//! Billing-account handlers: listing, and per-project billing info.

use axum::extract::State;
use provgate_types::{
    RelayError,
    ops::{GetBillingInfo, ListBillingAccounts, UpdateBillingInfo},
};
use std::sync::Arc;

use crate::{
    AppState,
    envelope::{ApiError, Relayed},
    parse_body,
};

/// Handles `POST /billingAccount/list`.
pub async fn list_accounts(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Relayed, ApiError> {
    let req: ListBillingAccounts = parse_body(&body)?;
    let tokens = req.tokens.ok_or(RelayError::MissingTokens)?;

    tracing::info!("list billing accounts request");

    let client = state.apis.authenticated(tokens);
    let data = client.list_billing_accounts(req.params).await?;
    Ok(Relayed(data))
}

/// Handles `POST /billingAccount/getProjectBillingInfo`.
pub async fn get_project_billing_info(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Relayed, ApiError> {
    let req: GetBillingInfo = parse_body(&body)?;
    let tokens = req.tokens.ok_or(RelayError::MissingTokens)?;
    let project_id = req.project_id.ok_or(RelayError::MissingParam("projectId"))?;

    tracing::info!(project = %project_id, "get billing info request");

    let client = state.apis.authenticated(tokens);
    let data = client
        .get_project_billing_info(&project_id, req.fields.as_deref())
        .await?;
    Ok(Relayed(data))
}

/// Handles `POST /billingAccount/updateProjectBillingInfo`.
pub async fn update_project_billing_info(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Relayed, ApiError> {
    let req: UpdateBillingInfo = parse_body(&body)?;
    let tokens = req.tokens.ok_or(RelayError::MissingTokens)?;
    let project_id = req.project_id.ok_or(RelayError::MissingParam("projectId"))?;
    let billing_account_name = req
        .billing_account_name
        .ok_or(RelayError::MissingParam("billingAccountName"))?;
    // Presence check, not truthiness: `false` detaches billing and is valid.
    let billing_enabled = req
        .billing_enabled
        .ok_or(RelayError::MissingParam("billingEnabled"))?;

    tracing::info!(
        project = %project_id,
        account = %billing_account_name,
        enabled = billing_enabled,
        "update billing info request"
    );

    let client = state.apis.authenticated(tokens);
    let data = client
        .update_project_billing_info(&project_id, &billing_account_name, billing_enabled)
        .await?;
    Ok(Relayed(data))
}
