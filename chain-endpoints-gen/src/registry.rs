//! Candidate endpoints from the public chain registry.
//!
//! The registry is a single JSON array describing every known EVM chain.
//! It is fetched once per domain run and only the `chainId` and `rpc`
//! fields are read.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use alloy::primitives::ChainId;
use chain_endpoints::filter_endpoints;
use serde::Deserialize;

use crate::error::{CollectError, Result};

/// One chain entry of the registry.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryEntry {
    /// EIP-155 chain ID.
    #[serde(rename = "chainId")]
    pub chain_id: ChainId,
    /// Advertised RPC URLs, possibly including templated or non-HTTPS ones.
    #[serde(default)]
    pub rpc: Vec<String>,
}

/// Filtered registry endpoints for the chains in `targets`.
///
/// Chains missing from `entries` are missing from the result. A chain listed
/// more than once has its endpoint lists merged.
#[must_use]
pub fn extract_endpoints(
    entries: Vec<RegistryEntry>,
    targets: &BTreeSet<ChainId>,
) -> BTreeMap<ChainId, BTreeSet<String>> {
    let mut out: BTreeMap<ChainId, BTreeSet<String>> = BTreeMap::new();
    for entry in entries {
        if targets.contains(&entry.chain_id) {
            out.entry(entry.chain_id)
                .or_default()
                .extend(filter_endpoints(entry.rpc));
        }
    }
    out
}

/// Download the registry at `url` and extract endpoints for `targets`.
///
/// # Errors
///
/// Returns [`CollectError::Registry`] on any transport error, non-success
/// status or malformed body. An unreachable registry aborts the run.
pub async fn fetch(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
    targets: &BTreeSet<ChainId>,
) -> Result<BTreeMap<ChainId, BTreeSet<String>>> {
    let registry_err = |source| CollectError::Registry {
        url: url.to_owned(),
        source,
    };

    let entries = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(registry_err)?
        .json::<Vec<RegistryEntry>>()
        .await
        .map_err(registry_err)?;

    tracing::debug!(url, chains = entries.len(), "registry fetched");
    Ok(extract_endpoints(entries, targets))
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn targets(ids: &[ChainId]) -> BTreeSet<ChainId> {
        ids.iter().copied().collect()
    }

    #[test]
    fn extracts_only_targets_and_filters_urls() {
        let entries: Vec<RegistryEntry> = serde_json::from_value(json!([
            {
                "name": "Polygon Amoy",
                "chainId": 80002,
                "rpc": [
                    "https://rpc-amoy.polygon.technology",
                    "wss://polygon-amoy-bor-rpc.publicnode.com",
                    "https://polygon-amoy.infura.io/v3/${INFURA_API_KEY}"
                ]
            },
            { "chainId": 1, "rpc": ["https://cloudflare-eth.com"] }
        ]))
        .unwrap();

        let out = extract_endpoints(entries, &targets(&[80002, 11_155_111]));
        assert_eq!(out.len(), 1, "only amoy is both targeted and listed");
        assert_eq!(
            out.get(&80002).map(|s| s.iter().map(String::as_str).collect::<Vec<_>>()),
            Some(vec!["https://rpc-amoy.polygon.technology"]),
            "filtered endpoints"
        );
    }

    #[test]
    fn missing_rpc_defaults_to_empty() {
        let entries: Vec<RegistryEntry> =
            serde_json::from_value(json!([{ "chainId": 398 }])).unwrap();
        let out = extract_endpoints(entries, &targets(&[398]));
        assert_eq!(out.get(&398).map(BTreeSet::len), Some(0), "present but empty");
    }

    #[test]
    fn repeated_chain_entries_are_merged() {
        let entries: Vec<RegistryEntry> = serde_json::from_value(json!([
            { "chainId": 10, "rpc": ["https://mainnet.optimism.io"] },
            { "chainId": 10, "rpc": ["https://optimism.drpc.org", "https://mainnet.optimism.io"] }
        ]))
        .unwrap();
        let out = extract_endpoints(entries, &targets(&[10]));
        assert_eq!(out.get(&10).map(BTreeSet::len), Some(2), "union of both lists");
    }

    #[tokio::test]
    async fn fetch_reads_registry_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/chains.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "chainId": 137, "rpc": ["https://polygon-rpc.com", "http://insecure.example"] }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let out = fetch(
            &reqwest::Client::new(),
            &format!("{}/chains.json", server.uri()),
            Duration::from_secs(5),
            &targets(&[137]),
        )
        .await
        .unwrap();
        assert_eq!(out.get(&137).map(BTreeSet::len), Some(1), "http entry dropped");
    }

    #[tokio::test]
    async fn fetch_fails_hard_on_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = fetch(
            &reqwest::Client::new(),
            &server.uri(),
            Duration::from_secs(5),
            &targets(&[137]),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, CollectError::Registry { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn fetch_fails_hard_on_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = fetch(
            &reqwest::Client::new(),
            &server.uri(),
            Duration::from_secs(5),
            &targets(&[137]),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, CollectError::Registry { .. }), "got {err:?}");
    }
}
