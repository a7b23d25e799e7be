//! Caller-supplied OAuth credential bundle, relayed verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The credential set issued by the identity provider after OAuth consent.
///
/// The gateway treats a bundle as opaque cargo: it rides in on each request
/// body, drives exactly one outbound `Authorization` header, and is dropped
/// when the request completes. Nothing is ever stored server-side. Fields
/// the provider adds beyond the typed ones are captured in `extra` so the
/// bundle round-trips without loss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenBundle {
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenBundle {
    /// Create a bundle holding just an access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
            scope: None,
            token_type: None,
            expires_in: None,
            extra: Map::new(),
        }
    }

    /// Value for the outbound `Authorization` header.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}
