//! Concrete Google adapters for the relay gateway.
//!
//! `oauth` implements the identity-broker seam against Google's OAuth 2.0
//! endpoints; `client` implements the per-request authenticated client
//! against the service-management, resource-manager, and billing REST
//! surfaces.

pub mod client;
pub mod oauth;

pub use client::GoogleApisFactory;
pub use oauth::GoogleOAuthBroker;
