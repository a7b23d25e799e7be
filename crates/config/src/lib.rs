//! Configuration loading for the provgate gateway.
//!
//! Uses figment: serde defaults, merged with an optional YAML file, merged
//! with `PROVGATE_*` environment variables (highest precedence).

pub mod schema;

pub use schema::Config;
