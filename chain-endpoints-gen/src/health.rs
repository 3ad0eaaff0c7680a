//! Endpoint health checks.
//!
//! An endpoint is healthy when it
//! 1. answers `eth_chainId` with exactly the expected chain ID
//!    (lowercase `0x` hex), and
//! 2. reports a latest block whose timestamp is within the allowed drift
//!    of the local clock.
//!
//! The second request is only sent if the first one passes. Neither is
//! retried.

use std::future::Future;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use alloy::primitives::ChainId;
use alloy::rpc::types::BlockNumberOrTag;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Why an endpoint was judged unhealthy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The endpoint serves another chain: a configuration error, not flakiness.
    ChainIdMismatch {
        /// Raw `eth_chainId` result.
        actual: String,
    },
    /// The latest block is too far from the local clock.
    Stale {
        /// Absolute difference in seconds.
        drift_secs: u64,
    },
    /// Timeout, connection error, malformed response or missing field.
    Transient(String),
}

/// Outcome of checking one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Both checks passed.
    Healthy,
    /// At least one check failed.
    Unhealthy(Failure),
}

/// A verdict together with the endpoint it was produced for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthVerdict {
    /// The checked endpoint URL.
    pub endpoint: String,
    /// Result of the check.
    pub verdict: Verdict,
}

impl HealthVerdict {
    /// Whether the endpoint passed.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.verdict == Verdict::Healthy
    }
}

/// Something that can judge an endpoint for a given chain.
///
/// Implementations absorb every failure into the returned verdict.
pub trait HealthCheck {
    /// Check `endpoint` against `chain_id`.
    fn check(&self, endpoint: &str, chain_id: ChainId)
    -> impl Future<Output = HealthVerdict> + Send;
}

/// Hex encoding `eth_chainId` must return for `chain_id`.
#[must_use]
pub fn expected_chain_id_hex(chain_id: ChainId) -> String {
    format!("{chain_id:#x}")
}

/// Absolute drift between `now` and `block_timestamp`, if it exceeds
/// `max_drift_secs`.
#[must_use]
pub const fn excess_drift(now: u64, block_timestamp: u64, max_drift_secs: u64) -> Option<u64> {
    let drift = now.abs_diff(block_timestamp);
    if drift > max_drift_secs {
        Some(drift)
    } else {
        None
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'a str,
    params: Value,
    id: u64,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct LatestBlock {
    timestamp: String,
}

/// Parse a JSON-RPC quantity: `0x`-prefixed hex, nothing else.
fn parse_quantity(raw: &str) -> Result<u64, CallError> {
    raw.strip_prefix("0x")
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()))
        .and_then(|digits| u64::from_str_radix(digits, 16).ok())
        .ok_or_else(|| CallError::BadQuantity(raw.to_owned()))
}

#[derive(Debug, thiserror::Error)]
enum CallError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON-RPC error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("{0} returned no result")]
    MissingResult(String),
    #[error("malformed hex quantity `{0}`")]
    BadQuantity(String),
}

/// Health checker speaking JSON-RPC 2.0 over a shared HTTP client.
#[derive(Debug, Clone)]
pub struct RpcHealthChecker {
    client: reqwest::Client,
    timeout: Duration,
    max_drift_secs: u64,
}

impl RpcHealthChecker {
    /// Build a checker reusing `client`'s connection pool.
    #[must_use]
    pub const fn new(client: reqwest::Client, timeout: Duration, max_drift_secs: u64) -> Self {
        Self {
            client,
            timeout,
            max_drift_secs,
        }
    }

    async fn call<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        method: &str,
        params: Value,
    ) -> Result<R, CallError> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id: 1,
        };
        let response: RpcResponse<R> = self
            .client
            .post(endpoint)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(RpcErrorObject { code, message }) = response.error {
            return Err(CallError::Rpc { code, message });
        }
        response
            .result
            .ok_or_else(|| CallError::MissingResult(method.to_owned()))
    }

    async fn verdict(&self, endpoint: &str, chain_id: ChainId) -> Result<Verdict, CallError> {
        let actual: String = self.call(endpoint, "eth_chainId", json!([])).await?;
        if actual != expected_chain_id_hex(chain_id) {
            return Ok(Verdict::Unhealthy(Failure::ChainIdMismatch { actual }));
        }

        let block: LatestBlock = self
            .call(
                endpoint,
                "eth_getBlockByNumber",
                json!([BlockNumberOrTag::Latest, false]),
            )
            .await?;
        let timestamp = parse_quantity(&block.timestamp)?;

        Ok(
            match excess_drift(unix_now(), timestamp, self.max_drift_secs) {
                Some(drift_secs) => Verdict::Unhealthy(Failure::Stale { drift_secs }),
                None => Verdict::Healthy,
            },
        )
    }
}

impl HealthCheck for RpcHealthChecker {
    async fn check(&self, endpoint: &str, chain_id: ChainId) -> HealthVerdict {
        let verdict = self
            .verdict(endpoint, chain_id)
            .await
            .unwrap_or_else(|e| Verdict::Unhealthy(Failure::Transient(e.to_string())));

        match &verdict {
            Verdict::Healthy => tracing::debug!(chain_id, endpoint, "healthy"),
            Verdict::Unhealthy(Failure::ChainIdMismatch { actual }) => tracing::error!(
                chain_id,
                endpoint,
                expected = %expected_chain_id_hex(chain_id),
                actual = %actual,
                "configuration error: endpoint serves a different chain"
            ),
            Verdict::Unhealthy(Failure::Stale { drift_secs }) => tracing::warn!(
                chain_id,
                endpoint,
                drift_secs,
                max_drift_secs = self.max_drift_secs,
                "health check failed: drift too large"
            ),
            Verdict::Unhealthy(Failure::Transient(error)) => {
                tracing::warn!(chain_id, endpoint, error = %error, "health check failed");
            }
        }

        HealthVerdict {
            endpoint: endpoint.to_owned(),
            verdict,
        }
    }
}
