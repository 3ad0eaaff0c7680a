//! Error types for the static tables and the mapping format.

/// Errors produced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum EndpointsError {
    /// A domain name that is not one of [`crate::Domain::ALL`].
    #[error("unknown domain `{0}` (expected one of: lynx, tapir, mainnet)")]
    UnknownDomain(String),

    /// An endpoint mapping could not be encoded or decoded.
    #[error("endpoint mapping JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results in this crate.
pub type Result<T, E = EndpointsError> = std::result::Result<T, E>;
