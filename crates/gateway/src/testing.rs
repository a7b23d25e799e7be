//! Mock seam implementations and request helpers shared by the handler
//! tests.

use crate::AppState;
use async_trait::async_trait;
use axum::{Router, body::Body, http::Request, http::StatusCode, response::Response};
use http_body_util::BodyExt as _;
use provgate_types::{
    RelayError, TokenBundle,
    traits::{
        CloudApis, CloudApisFactory, CloudBilling, IdentityBroker, ResourceManager, Result,
        ServiceManagement,
    },
};
use serde_json::{Map, Value, json};
use std::sync::{Arc, Mutex};
use tower::ServiceExt as _;

/// A recorded provider invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    EnableService {
        service_name: String,
        project_id: Option<String>,
    },
    GetProject {
        project_id: String,
    },
    CreateProject {
        payload: Map<String, Value>,
    },
    ListBillingAccounts {
        params: Map<String, Value>,
    },
    GetBillingInfo {
        project_id: String,
        fields: Option<String>,
    },
    UpdateBillingInfo {
        project_id: String,
        billing_account_name: String,
        billing_enabled: bool,
    },
}

enum Behavior {
    Return(Value),
    Echo,
    Fail {
        status: u16,
        code: Option<String>,
        message: String,
    },
}

struct MockState {
    behavior: Behavior,
    calls: Mutex<Vec<Call>>,
}

/// Recording mock of the provider seams; doubles as its own factory.
#[derive(Clone)]
pub struct MockCloud {
    state: Arc<MockState>,
}

impl MockCloud {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            state: Arc::new(MockState {
                behavior,
                calls: Mutex::new(Vec::new()),
            }),
        }
    }

    /// A mock that answers every call with `response`.
    pub fn returning(response: Value) -> Self {
        Self::with_behavior(Behavior::Return(response))
    }

    /// A mock that answers with `{"bearer": <access token>, ...}` so tests
    /// can observe which credentials served which call.
    pub fn echoing() -> Self {
        Self::with_behavior(Behavior::Echo)
    }

    /// A mock that fails every call with an upstream error.
    pub fn failing(status: u16, code: Option<&str>, message: &str) -> Self {
        Self::with_behavior(Behavior::Fail {
            status,
            code: code.map(str::to_owned),
            message: message.to_owned(),
        })
    }

    pub fn call_count(&self) -> usize {
        self.state.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.calls.lock().unwrap().clone()
    }
}

impl CloudApisFactory for MockCloud {
    fn authenticated(&self, tokens: TokenBundle) -> Box<dyn CloudApis> {
        Box::new(MockHandle {
            state: Arc::clone(&self.state),
            tokens,
        })
    }
}

struct MockHandle {
    state: Arc<MockState>,
    tokens: TokenBundle,
}

impl MockHandle {
    fn respond(&self, call: Call) -> Result<Value> {
        let outcome = match &self.state.behavior {
            Behavior::Return(v) => Ok(v.clone()),
            Behavior::Echo => {
                let mut v = json!({ "bearer": self.tokens.access_token });
                if let Call::GetProject { project_id } = &call {
                    v["projectId"] = Value::String(project_id.clone());
                }
                Ok(v)
            }
            Behavior::Fail {
                status,
                code,
                message,
            } => Err(RelayError::Upstream {
                status: *status,
                code: code.clone(),
                message: message.clone(),
            }),
        };
        self.state.calls.lock().unwrap().push(call);
        outcome
    }
}

#[async_trait]
impl ServiceManagement for MockHandle {
    async fn enable_service(
        &self,
        service_name: &str,
        project_id: Option<&str>,
    ) -> Result<Value> {
        self.respond(Call::EnableService {
            service_name: service_name.to_owned(),
            project_id: project_id.map(str::to_owned),
        })
    }
}

#[async_trait]
impl ResourceManager for MockHandle {
    async fn get_project(&self, project_id: &str) -> Result<Value> {
        self.respond(Call::GetProject {
            project_id: project_id.to_owned(),
        })
    }

    async fn create_project(&self, payload: Map<String, Value>) -> Result<Value> {
        self.respond(Call::CreateProject { payload })
    }
}

#[async_trait]
impl CloudBilling for MockHandle {
    async fn list_billing_accounts(&self, params: Map<String, Value>) -> Result<Value> {
        self.respond(Call::ListBillingAccounts { params })
    }

    async fn get_project_billing_info(
        &self,
        project_id: &str,
        fields: Option<&str>,
    ) -> Result<Value> {
        self.respond(Call::GetBillingInfo {
            project_id: project_id.to_owned(),
            fields: fields.map(str::to_owned),
        })
    }

    async fn update_project_billing_info(
        &self,
        project_id: &str,
        billing_account_name: &str,
        billing_enabled: bool,
    ) -> Result<Value> {
        self.respond(Call::UpdateBillingInfo {
            project_id: project_id.to_owned(),
            billing_account_name: billing_account_name.to_owned(),
            billing_enabled,
        })
    }
}

/// Stub identity provider: deterministic bundles derived from the code.
pub struct MockBroker;

impl MockBroker {
    pub const AUTH_URL: &'static str = "https://accounts.example.com/consent?client_id=test";
}

#[async_trait]
impl IdentityBroker for MockBroker {
    fn auth_url(&self) -> String {
        Self::AUTH_URL.to_string()
    }

    async fn exchange_code(&self, code: &str) -> Result<TokenBundle> {
        if code == "bad-code" {
            return Err(RelayError::Auth("token exchange failed: invalid_grant".into()));
        }
        let mut bundle = TokenBundle::new(format!("access-{code}"));
        bundle.refresh_token = Some(format!("refresh-{code}"));
        bundle.token_type = Some("Bearer".into());
        bundle.expires_in = Some(3599);
        Ok(bundle)
    }
}

/// State backed by the stub broker and the given mock provider.
pub fn make_state(apis: MockCloud) -> Arc<AppState> {
    Arc::new(AppState::with_parts(Arc::new(MockBroker), Arc::new(apis)))
}

/// JSON value for a `tokens` field holding the given access token.
pub fn bundle(access_token: &str) -> Value {
    json!({ "access_token": access_token })
}

pub async fn body_json(resp: Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// One-shot POST of a JSON body; returns status and parsed response body.
pub async fn post_json(app: Router, path: &str, body: Value) -> (StatusCode, Value) {
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    body_json(resp).await
}

/// One-shot GET; returns status and parsed response body.
pub async fn get_json(app: Router, path: &str) -> (StatusCode, Value) {
    let resp = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    body_json(resp).await
}
