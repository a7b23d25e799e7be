//! Google OAuth 2.0 broker — consent URL generation and code exchange.
//!
//! Plain server-side authorization-code flow with a client secret. Offline
//! access is requested so the returned bundle carries a refresh token the
//! browser client can hold onto for the rest of the provisioning workflow.

use async_trait::async_trait;
use provgate_types::{
    RelayError, TokenBundle,
    traits::{IdentityBroker, Result},
};
use serde_json::Value;

/// Google OAuth 2.0 authorization endpoint.
pub const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// Google OAuth 2.0 token endpoint.
pub const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Scopes required for the whole provisioning workflow: project and billing
/// management, identity groups, and service enablement.
pub const SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/cloud-platform",
    "https://www.googleapis.com/auth/cloud-identity.groups",
    "https://www.googleapis.com/auth/service.management",
];

/// Build the consent-screen URL.
#[must_use]
pub fn build_auth_url(client_id: &str, redirect_url: &str) -> String {
    let scope = SCOPES.join(" ");
    let query = serde_urlencoded::to_string([
        ("response_type", "code"),
        ("client_id", client_id),
        ("redirect_uri", redirect_url),
        ("scope", scope.as_str()),
        ("access_type", "offline"),
    ])
    .unwrap_or_default();
    format!("{AUTH_URL}?{query}")
}

/// Build the form parameters for the token exchange request.
#[must_use]
pub fn token_form_params<'a>(
    client_id: &'a str,
    client_secret: &'a str,
    code: &'a str,
    redirect_url: &'a str,
) -> Vec<(&'static str, &'a str)> {
    vec![
        ("grant_type", "authorization_code"),
        ("client_id", client_id),
        ("client_secret", client_secret),
        ("code", code),
        ("redirect_uri", redirect_url),
    ]
}

/// Parse the token endpoint JSON response into a [`TokenBundle`].
///
/// The bundle is deserialized wholesale so provider-added fields survive
/// the trip back to the caller.
///
/// # Errors
///
/// Returns [`RelayError::Auth`] if the response carries no `access_token`
/// (surfacing Google's `error_description` when present).
pub fn parse_token_response(json: Value) -> Result<TokenBundle> {
    if json.get("access_token").and_then(Value::as_str).is_none() {
        let detail = json
            .get("error_description")
            .or_else(|| json.get("error"))
            .and_then(Value::as_str)
            .unwrap_or("missing access_token");
        return Err(RelayError::Auth(format!("token exchange failed: {detail}")));
    }
    serde_json::from_value(json)
        .map_err(|e| RelayError::Auth(format!("failed to parse token response: {e}")))
}

/// [`IdentityBroker`] implementation against Google's OAuth endpoints.
pub struct GoogleOAuthBroker {
    http: reqwest::Client,
    client_id: String,
    client_secret: String,
    redirect_url: String,
}

impl GoogleOAuthBroker {
    /// Creates a broker for the given OAuth application.
    pub fn new(
        http: reqwest::Client,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_url: redirect_url.into(),
        }
    }
}

#[async_trait]
impl IdentityBroker for GoogleOAuthBroker {
    fn auth_url(&self) -> String {
        build_auth_url(&self.client_id, &self.redirect_url)
    }

    async fn exchange_code(&self, code: &str) -> Result<TokenBundle> {
        let params = token_form_params(
            &self.client_id,
            &self.client_secret,
            code,
            &self.redirect_url,
        );
        let resp = self
            .http
            .post(TOKEN_URL)
            .header("Accept", "application/json")
            .form(&params)
            .send()
            .await
            .map_err(|e| RelayError::Http(e.to_string()))?;

        let json: Value = resp
            .json()
            .await
            .map_err(|e| RelayError::Auth(format!("failed to parse token response: {e}")))?;

        parse_token_response(json)
    }
}
