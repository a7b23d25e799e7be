//! Wire types for the relay's POST operations.
//!
//! Every field is optional at the serde layer; handlers check presence
//! explicitly so a missing field surfaces as the envelope's validation
//! error (naming the field) rather than a framework rejection. `tokens` is
//! a dedicated struct field on every operation: lifting it out of the body
//! here is what guarantees it never reaches an outbound provider payload.

use crate::TokenBundle;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Body of `POST /service/enable`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnableService {
    pub tokens: Option<TokenBundle>,
    pub service_name: Option<String>,
    pub project_id: Option<String>,
}

/// Body of `POST /project/get`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetProject {
    pub tokens: Option<TokenBundle>,
    pub project_id: Option<String>,
}

/// Body of `POST /project/create`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub tokens: Option<TokenBundle>,
    pub project_id: Option<String>,
    /// Remaining creation fields (`name`, `labels`, …) forwarded verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `POST /billingAccount/list`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBillingAccounts {
    pub tokens: Option<TokenBundle>,
    /// List parameters (`pageSize`, `pageToken`, …) forwarded verbatim.
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

/// Body of `POST /billingAccount/getProjectBillingInfo`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBillingInfo {
    pub tokens: Option<TokenBundle>,
    pub project_id: Option<String>,
    pub fields: Option<String>,
}

/// Body of `POST /billingAccount/updateProjectBillingInfo`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBillingInfo {
    pub tokens: Option<TokenBundle>,
    pub project_id: Option<String>,
    pub billing_account_name: Option<String>,
    pub billing_enabled: Option<bool>,
}
