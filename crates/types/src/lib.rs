//! Core types and traits for the provgate workspace.
//!
//! This crate defines the shared abstractions used across all layers of the
//! provgate relay gateway: the error type, the caller-supplied token bundle,
//! the wire types of the relay's operations, and the async traits the
//! gateway dispatches through.

pub mod error;
pub mod ops;
pub mod token;
pub mod traits;

pub use error::RelayError;
pub use token::TokenBundle;
pub use traits::{
    CloudApis, CloudApisFactory, CloudBilling, IdentityBroker, ResourceManager, ServiceManagement,
};
