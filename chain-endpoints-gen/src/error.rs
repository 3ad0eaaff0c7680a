//! Error type of the collection pipeline.
//!
//! Transient endpoint failures never surface here: the health checker
//! absorbs them into an unhealthy verdict. Everything in [`CollectError`]
//! aborts the run for the affected domain.

use alloy::primitives::ChainId;

/// Errors that abort collection for a domain.
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    /// The chain registry could not be fetched or decoded.
    #[error("fetching chain registry {url}: {source}")]
    Registry {
        /// Registry URL.
        url: String,
        /// Underlying HTTP or decoding error.
        #[source]
        source: reqwest::Error,
    },

    /// Neither the registry nor the supplement lists an endpoint for a chain.
    #[error("no endpoints configured for chain {chain_id}")]
    NoCandidates {
        /// The chain without candidates.
        chain_id: ChainId,
    },

    /// Every candidate endpoint for a chain failed its health check.
    #[error("no healthy endpoints for chain {chain_id}")]
    NoHealthyEndpoints {
        /// The chain left without endpoints.
        chain_id: ChainId,
    },

    /// An endpoint serves a different chain than the one it is listed under.
    #[error(
        "configuration error: endpoint {endpoint} is listed for chain {chain_id} ({chain_id:#x}) but reports chain id {actual}"
    )]
    ChainIdMismatch {
        /// The chain the endpoint is listed under.
        chain_id: ChainId,
        /// The misconfigured endpoint.
        endpoint: String,
        /// The `eth_chainId` result it returned.
        actual: String,
    },

    /// Invalid runtime configuration.
    #[error("config: {0}")]
    Config(String),

    /// Encoding or decoding a mapping file failed.
    #[error(transparent)]
    Mapping(#[from] chain_endpoints::EndpointsError),

    /// Filesystem error.
    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results in this crate.
pub type Result<T, E = CollectError> = std::result::Result<T, E>;
