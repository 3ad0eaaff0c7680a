//! Static tables and pure logic for EVM JSON-RPC endpoint mappings.
//!
//! Each deployment [`Domain`] serves a fixed set of [`Network`]s. For every
//! network, candidate endpoints come from a public registry plus the
//! [`supplement`] table; candidates are cleaned with [`filter_endpoints`],
//! health-checked elsewhere, and the survivors are persisted as an
//! [`EndpointMapping`] in its canonical JSON form.

pub mod domains;
pub mod error;
pub mod filter;
pub mod mapping;
pub mod networks;
pub mod supplement;

pub use domains::Domain;
pub use error::{EndpointsError, Result};
pub use filter::{filter_endpoints, is_usable_endpoint};
pub use mapping::EndpointMapping;
pub use networks::Network;
