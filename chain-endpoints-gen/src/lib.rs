//! Generator for healthy EVM JSON-RPC endpoint mappings.
//!
//! Collects candidate endpoints for every chain of a deployment domain from
//! the public chain registry and a static supplement, health-checks them
//! concurrently, and writes the survivors as `<domain>.json`.

pub mod collect;
pub mod config;
pub mod error;
pub mod health;
pub mod registry;
pub mod store;

pub use collect::Collector;
pub use config::{Config, OnConfigMismatch};
pub use error::{CollectError, Result};
