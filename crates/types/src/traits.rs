//! Async trait seams between the gateway and the cloud provider.
//!
//! The gateway depends only on these traits; `provgate-google` supplies the
//! concrete adapters. One narrow trait per provider resource family keeps
//! each surface to exactly the operations the relay uses.

use crate::{RelayError, TokenBundle};
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, RelayError>;

/// Service-management family: enabling named service APIs.
#[async_trait]
pub trait ServiceManagement: Send + Sync {
    /// Enable a service API, optionally against a specific project's
    /// consumer identity.
    async fn enable_service(
        &self,
        service_name: &str,
        project_id: Option<&str>,
    ) -> Result<Value>;
}

/// Resource-manager family: project lookup and creation.
#[async_trait]
pub trait ResourceManager: Send + Sync {
    /// Fetch a project by id.
    async fn get_project(&self, project_id: &str) -> Result<Value>;
    /// Create a project from a caller-supplied payload, forwarded verbatim.
    async fn create_project(&self, payload: Map<String, Value>) -> Result<Value>;
}

/// Billing family: account listing and per-project billing info.
#[async_trait]
pub trait CloudBilling: Send + Sync {
    /// List billing accounts visible to the caller.
    async fn list_billing_accounts(&self, params: Map<String, Value>) -> Result<Value>;
    /// Fetch a project's billing info, optionally restricted by field mask.
    async fn get_project_billing_info(
        &self,
        project_id: &str,
        fields: Option<&str>,
    ) -> Result<Value>;
    /// Point a project at a billing account (or detach it with
    /// `billing_enabled = false`).
    async fn update_project_billing_info(
        &self,
        project_id: &str,
        billing_account_name: &str,
        billing_enabled: bool,
    ) -> Result<Value>;
}

/// The full authenticated handle handed to a handler for one logical
/// operation.
pub trait CloudApis: ServiceManagement + ResourceManager + CloudBilling {}

impl<T: ServiceManagement + ResourceManager + CloudBilling> CloudApis for T {}

/// Builds a fresh authenticated handle from a caller-supplied bundle.
///
/// Contract: stateless. No handle outlives the HTTP request that created it
/// and no bundle is cached across requests — the gateway must never become
/// a custodial token store.
pub trait CloudApisFactory: Send + Sync {
    fn authenticated(&self, tokens: TokenBundle) -> Box<dyn CloudApis>;
}

/// The identity provider's OAuth surface, as far as the relay needs it.
#[async_trait]
pub trait IdentityBroker: Send + Sync {
    /// The consent-screen URL the browser should be sent to.
    fn auth_url(&self) -> String;
    /// Exchange an authorization code for a token bundle.
    async fn exchange_code(&self, code: &str) -> Result<TokenBundle>;
}
