//! OAuth consent handlers — the two operations that precede token
//! issuance, so neither takes a credential bundle.

use axum::extract::{Path, State};
use provgate_types::RelayError;
use serde_json::json;
use std::sync::Arc;

use crate::{
    AppState,
    envelope::{ApiError, Relayed},
};

/// Handles `GET /auth/authUrl` — the consent-screen URL the browser should
/// navigate to.
pub async fn auth_url(State(state): State<Arc<AppState>>) -> Result<Relayed, ApiError> {
    let url = state.broker.auth_url();
    Ok(Relayed(json!({ "url": url })))
}

/// Handles `GET /auth/tokens/{code}` — exchanges an authorization code for
/// a token bundle. The bundle goes straight back to the caller; nothing is
/// stored server-side.
pub async fn exchange_tokens(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Relayed, ApiError> {
    if code.trim().is_empty() {
        return Err(
            RelayError::Auth("authorization code is required to access this API".into()).into(),
        );
    }

    tracing::info!("exchanging authorization code for tokens");

    let tokens = state.broker.exchange_code(&code).await?;
    Ok(Relayed(json!({ "tokens": tokens })))
}

#[cfg(test)]
mod tests {
    use crate::make_router;
    use crate::testing::{MockBroker, MockCloud, get_json, make_state};
    use axum::http::StatusCode;
    use serde_json::json;

    fn app() -> axum::Router {
        make_router(make_state(MockCloud::returning(json!({}))))
    }

    #[tokio::test]
    async fn test_auth_url() {
        let (status, body) = get_json(app(), "/auth/authUrl").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["url"], MockBroker::AUTH_URL);
        assert_eq!(body["isError"], false);
    }

    #[tokio::test]
    async fn test_exchange_returns_full_bundle() {
        let (status, body) = get_json(app(), "/auth/tokens/code123").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isError"], false);
        assert_eq!(body["tokens"]["access_token"], "access-code123");
        assert_eq!(body["tokens"]["refresh_token"], "refresh-code123");
        assert_eq!(body["tokens"]["token_type"], "Bearer");
    }

    #[tokio::test]
    async fn test_exchange_idempotent_for_same_code() {
        let (_, first) = get_json(app(), "/auth/tokens/fixed").await;
        let (_, second) = get_json(app(), "/auth/tokens/fixed").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_exchange_broker_failure_becomes_envelope() {
        let (status, body) = get_json(app(), "/auth/tokens/bad-code").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["isError"], true);
        assert!(
            body["errorMessage"]
                .as_str()
                .unwrap()
                .contains("invalid_grant")
        );
    }
}
