//! HTTP relay layer — axum router, route handlers, and the response
//! envelope.
//!
//! Every operation is one synchronous request/response cycle: validate the
//! body, build an authenticated provider client from the caller-supplied
//! token bundle, make the provider call, and relay the raw result under
//! the uniform envelope. Nothing is stored between requests, so concurrent
//! callers with different credentials need no coordination.

mod auth;
mod billing;
pub mod envelope;
mod project;
mod service;
#[cfg(test)]
mod testing;

pub use envelope::{ApiError, Relayed};

use axum::{
    Router,
    routing::{get, post},
};
use provgate_config::Config;
use provgate_google::{GoogleApisFactory, GoogleOAuthBroker};
use provgate_types::{
    RelayError,
    traits::{CloudApisFactory, IdentityBroker},
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state passed to all route handlers.
///
/// Fixed at startup: the OAuth broker and the API factory are
/// configuration, not session state. No field mutates between requests.
pub struct AppState {
    /// Identity-provider adapter for consent URL and code exchange.
    pub broker: Arc<dyn IdentityBroker>,
    /// Per-request builder of authenticated provider clients.
    pub apis: Arc<dyn CloudApisFactory>,
}

impl AppState {
    /// Creates the production state: a Google OAuth broker and API factory
    /// sharing one connection pool with the configured upstream timeout.
    #[must_use]
    pub fn new(config: &Config) -> Arc<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout())
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        let broker = GoogleOAuthBroker::new(
            http.clone(),
            &config.client_id,
            &config.client_secret,
            config.redirect_url(),
        );
        Arc::new(Self::with_parts(
            Arc::new(broker),
            Arc::new(GoogleApisFactory::new(http)),
        ))
    }

    /// Assembles state from explicit seam implementations.
    #[must_use]
    pub fn with_parts(broker: Arc<dyn IdentityBroker>, apis: Arc<dyn CloudApisFactory>) -> Self {
        Self { broker, apis }
    }
}

/// Build the relay router.
///
/// Routes:
/// - GET  /auth/authUrl
/// - GET  /auth/tokens/{code}
/// - POST /service/enable
/// - POST /project/get
/// - POST /project/create
/// - POST /billingAccount/list
/// - POST /billingAccount/getProjectBillingInfo
/// - POST /billingAccount/updateProjectBillingInfo
pub fn make_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/auth/authUrl", get(auth::auth_url))
        .route("/auth/tokens/{code}", get(auth::exchange_tokens))
        .route("/service/enable", post(service::enable))
        .route("/project/get", post(project::get))
        .route("/project/create", post(project::create))
        .route("/billingAccount/list", post(billing::list_accounts))
        .route(
            "/billingAccount/getProjectBillingInfo",
            post(billing::get_project_billing_info),
        )
        .route(
            "/billingAccount/updateProjectBillingInfo",
            post(billing::update_project_billing_info),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Build the full application router with the relay nested under the
/// configured base path.
pub fn make_app(config: &Config, state: Arc<AppState>) -> Router {
    let api = make_router(state);
    if config.base_path.is_empty() || config.base_path == "/" {
        api
    } else {
        Router::new().nest(&config.base_path, api)
    }
}

/// Parse a JSON body into an operation's typed request.
///
/// Handlers take the raw body so that malformed input surfaces as the
/// envelope's validation error instead of a framework rejection — callers
/// of these endpoints always receive the JSON envelope.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, RelayError> {
    serde_json::from_str(body).map_err(|e| RelayError::InvalidBody(e.to_string()))
}
