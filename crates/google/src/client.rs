//! Per-request authenticated client for the Google REST APIs.
//!
//! One [`GoogleApis`] is built per inbound request from the caller-supplied
//! bundle and dropped when the request completes. The shared `reqwest`
//! client underneath is a connection pool only — it carries no credential
//! state.

use async_trait::async_trait;
use provgate_types::{
    RelayError, TokenBundle,
    traits::{CloudApis, CloudApisFactory, CloudBilling, ResourceManager, Result, ServiceManagement},
};
use serde_json::{Map, Value, json};

/// Service Management API base.
pub const SERVICE_MANAGEMENT_URL: &str = "https://servicemanagement.googleapis.com/v1";

/// Cloud Resource Manager API base.
pub const RESOURCE_MANAGER_URL: &str = "https://cloudresourcemanager.googleapis.com/v1";

/// Cloud Billing API base.
pub const CLOUD_BILLING_URL: &str = "https://cloudbilling.googleapis.com/v1";

/// Builds [`GoogleApis`] handles around a shared connection pool.
#[derive(Clone)]
pub struct GoogleApisFactory {
    http: reqwest::Client,
}

impl GoogleApisFactory {
    /// Creates a factory wrapping the given HTTP client.
    #[must_use]
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl CloudApisFactory for GoogleApisFactory {
    fn authenticated(&self, tokens: TokenBundle) -> Box<dyn CloudApis> {
        Box::new(GoogleApis {
            http: self.http.clone(),
            tokens,
        })
    }
}

/// An authenticated handle for one logical operation.
pub struct GoogleApis {
    http: reqwest::Client,
    tokens: TokenBundle,
}

impl GoogleApis {
    /// Sends a request with the caller's bearer token and maps the response.
    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<Value> {
        let resp = builder
            .header("Authorization", self.tokens.authorization_header())
            .send()
            .await?;
        let status = resp.status();
        if status.is_success() {
            Ok(resp.json().await?)
        } else {
            let text = resp.text().await.unwrap_or_default();
            Err(parse_upstream_error(status.as_u16(), &text))
        }
    }
}

/// Consumer identity for a project-targeted service enablement.
fn consumer_id(project_id: &str) -> String {
    format!("project:{project_id}")
}

/// Recover Google's structured error (`{"error": {code, message, status}}`)
/// from a non-2xx body, falling back to the raw text.
fn parse_upstream_error(status: u16, body: &str) -> RelayError {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let error = parsed.as_ref().and_then(|v| v.get("error"));
    let code = error
        .and_then(|e| e.get("status"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .or_else(|| {
            error
                .and_then(|e| e.get("code"))
                .and_then(Value::as_u64)
                .map(|c| c.to_string())
        });
    let message = error
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .map_or_else(|| body.to_string(), str::to_owned);
    RelayError::Upstream {
        status,
        code,
        message,
    }
}

/// Map caller-supplied list parameters onto URL query pairs.
///
/// Google's list endpoints take scalar parameters only; nested values are
/// dropped.
fn query_pairs(params: &Map<String, Value>) -> Vec<(String, String)> {
    params
        .iter()
        .filter_map(|(k, v)| {
            let v = match v {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some((k.clone(), v))
        })
        .collect()
}

#[async_trait]
impl ServiceManagement for GoogleApis {
    async fn enable_service(
        &self,
        service_name: &str,
        project_id: Option<&str>,
    ) -> Result<Value> {
        let url = format!("{SERVICE_MANAGEMENT_URL}/services/{service_name}:enable");
        let body = project_id.map_or_else(
            || json!({}),
            |id| json!({ "consumerId": consumer_id(id) }),
        );
        self.send(self.http.post(&url).json(&body)).await
    }
}

#[async_trait]
impl ResourceManager for GoogleApis {
    async fn get_project(&self, project_id: &str) -> Result<Value> {
        let url = format!("{RESOURCE_MANAGER_URL}/projects/{project_id}");
        self.send(self.http.get(&url)).await
    }

    async fn create_project(&self, payload: Map<String, Value>) -> Result<Value> {
        let url = format!("{RESOURCE_MANAGER_URL}/projects");
        self.send(self.http.post(&url).json(&payload)).await
    }
}

#[async_trait]
impl CloudBilling for GoogleApis {
    async fn list_billing_accounts(&self, params: Map<String, Value>) -> Result<Value> {
        let url = format!("{CLOUD_BILLING_URL}/billingAccounts");
        self.send(self.http.get(&url).query(&query_pairs(&params)))
            .await
    }

    async fn get_project_billing_info(
        &self,
        project_id: &str,
        fields: Option<&str>,
    ) -> Result<Value> {
        let url = format!("{CLOUD_BILLING_URL}/projects/{project_id}/billingInfo");
        let mut req = self.http.get(&url);
        if let Some(fields) = fields {
            req = req.query(&[("fields", fields)]);
        }
        self.send(req).await
    }

    async fn update_project_billing_info(
        &self,
        project_id: &str,
        billing_account_name: &str,
        billing_enabled: bool,
    ) -> Result<Value> {
        let url = format!("{CLOUD_BILLING_URL}/projects/{project_id}/billingInfo");
        let body = json!({
            "billingAccountName": billing_account_name,
            "billingEnabled": billing_enabled,
        });
        self.send(self.http.put(&url).json(&body)).await
    }
}
