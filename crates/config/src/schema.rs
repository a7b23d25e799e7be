use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_port() -> u16 {
    6107
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_base_path() -> String {
    "/api/google".to_string()
}
fn default_base_external_url() -> String {
    "http://localhost:6100".to_string()
}
fn default_upstream_timeout_secs() -> u64 {
    30
}

/// Top-level gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Listen port (defaults to 6107).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Listen address (defaults to `127.0.0.1`).
    #[serde(default = "default_host")]
    pub host: String,
    /// URL prefix the relay routes are nested under.
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Externally visible base URL of the web application. The OAuth
    /// consent flow redirects the browser to `{base_external_url}redirect`.
    #[serde(default = "default_base_external_url")]
    pub base_external_url: String,
    /// Google OAuth client id.
    #[serde(default)]
    pub client_id: String,
    /// Google OAuth client secret.
    #[serde(default)]
    pub client_secret: String,
    /// Outbound request timeout towards the provider, in seconds.
    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            base_path: default_base_path(),
            base_external_url: default_base_external_url(),
            client_id: String::new(),
            client_secret: String::new(),
            upstream_timeout_secs: default_upstream_timeout_secs(),
        }
    }
}

impl Config {
    /// Parses configuration from a YAML string, merged with defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`figment::Error`] if the YAML is invalid or extraction fails.
    #[allow(clippy::result_large_err)]
    pub fn from_yaml(yaml: &str) -> Result<Self, figment::Error> {
        use figment::{
            Figment,
            providers::{Format as _, Serialized, Yaml},
        };
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Yaml::string(yaml))
            .extract()
    }

    /// Loads configuration: serde defaults, then the optional YAML file,
    /// then `PROVGATE_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`figment::Error`] if the file cannot be read or parsed,
    /// or if an environment override has the wrong shape.
    #[allow(clippy::result_large_err)]
    pub fn load(path: Option<&std::path::Path>) -> Result<Self, figment::Error> {
        use figment::{
            Figment,
            providers::{Env, Format as _, Serialized, Yaml},
        };
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed("PROVGATE_")).extract()
    }

    /// The OAuth redirect URL: the externally visible base URL, normalized
    /// to a trailing slash, plus `redirect`.
    #[must_use]
    pub fn redirect_url(&self) -> String {
        let base = &self.base_external_url;
        if base.is_empty() || base.ends_with('/') {
            format!("{base}redirect")
        } else {
            format!("{base}/redirect")
        }
    }

    /// The outbound timeout as a [`Duration`].
    #[must_use]
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}
