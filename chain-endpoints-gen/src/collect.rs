//! Collection of healthy endpoints for a whole domain.
//!
//! For each domain the collector:
//! 1. Fetches the chain registry once for all of the domain's chains.
//! 2. Per chain, merges registry and supplementary candidates.
//! 3. Health-checks all candidates of the chain concurrently and waits for
//!    every verdict.
//! 4. Derives the surviving endpoints from the verdict list.
//!
//! Chains are processed one after another. Any chain without candidates or
//! without survivors fails the domain, so a mapping is either complete or
//! not produced at all.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::time::Duration;

use alloy::primitives::ChainId;
use chain_endpoints::{Domain, EndpointMapping, Network, supplement};
use futures::future::join_all;

use crate::config::{Config, OnConfigMismatch};
use crate::error::{CollectError, Result};
use crate::health::{Failure, HealthCheck, HealthVerdict, RpcHealthChecker, Verdict};
use crate::{registry, store};

/// Union of registry and supplementary candidates for `chain_id`.
#[must_use]
pub fn candidates(
    chain_id: ChainId,
    from_registry: Option<&BTreeSet<String>>,
) -> BTreeSet<String> {
    from_registry
        .into_iter()
        .flatten()
        .cloned()
        .chain(
            supplement::extra_endpoints(chain_id)
                .iter()
                .map(|e| (*e).to_owned()),
        )
        .collect()
}

/// Endpoints of `verdicts` that passed, subject to `policy`.
///
/// # Errors
///
/// - [`CollectError::ChainIdMismatch`] for the first mismatching endpoint
///   when `policy` is [`OnConfigMismatch::Abort`].
/// - [`CollectError::NoHealthyEndpoints`] if nothing passed.
pub fn survivors(
    chain_id: ChainId,
    verdicts: &[HealthVerdict],
    policy: OnConfigMismatch,
) -> Result<BTreeSet<String>> {
    if policy == OnConfigMismatch::Abort {
        let mismatch = verdicts.iter().find_map(|v| match &v.verdict {
            Verdict::Unhealthy(Failure::ChainIdMismatch { actual }) => Some((v, actual)),
            _ => None,
        });
        if let Some((v, actual)) = mismatch {
            return Err(CollectError::ChainIdMismatch {
                chain_id,
                endpoint: v.endpoint.clone(),
                actual: actual.clone(),
            });
        }
    }

    let healthy: BTreeSet<String> = verdicts
        .iter()
        .filter(|v| v.is_healthy())
        .map(|v| v.endpoint.clone())
        .collect();

    if healthy.is_empty() {
        return Err(CollectError::NoHealthyEndpoints { chain_id });
    }
    Ok(healthy)
}

/// Drives registry fetching and health checks for one domain at a time.
#[derive(Debug)]
pub struct Collector<H> {
    client: reqwest::Client,
    registry_url: String,
    registry_timeout: Duration,
    checker: H,
    policy: OnConfigMismatch,
}

impl Collector<RpcHealthChecker> {
    /// Build a collector whose registry fetch and health checks share one
    /// HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CollectError::Config(format!("building HTTP client: {e}")))?;
        let checker = RpcHealthChecker::new(
            client.clone(),
            config.request_timeout(),
            config.max_drift_secs,
        );
        Ok(Self::new(client, config, checker))
    }
}

impl<H: HealthCheck + Sync> Collector<H> {
    /// Build a collector around an arbitrary health checker.
    #[must_use]
    pub fn new(client: reqwest::Client, config: &Config, checker: H) -> Self {
        Self {
            client,
            registry_url: config.registry_url.clone(),
            registry_timeout: config.registry_timeout(),
            checker,
            policy: config.on_config_mismatch,
        }
    }

    /// Collect healthy endpoints for every chain of `domain`.
    ///
    /// # Errors
    ///
    /// Fails if the registry is unreachable, a chain has no candidates or no
    /// healthy endpoint, or (under [`OnConfigMismatch::Abort`]) an endpoint
    /// serves the wrong chain.
    pub async fn collect(&self, domain: Domain) -> Result<EndpointMapping> {
        let targets: BTreeSet<ChainId> = domain.chain_ids().collect();
        tracing::info!(
            %domain,
            chains = targets.len(),
            registry = %self.registry_url,
            "fetching registry"
        );

        let from_registry = registry::fetch(
            &self.client,
            &self.registry_url,
            self.registry_timeout,
            &targets,
        )
        .await?;

        let mut mapping = EndpointMapping::new();
        for &network in domain.networks() {
            let healthy = self.collect_chain(network, &from_registry).await?;
            mapping.insert(network.chain_id(), healthy);
        }
        Ok(mapping)
    }

    /// Collect `domain` and write its mapping file into `dir`.
    ///
    /// Nothing is written if collection fails, so a previous file survives
    /// a failed run untouched.
    ///
    /// # Errors
    ///
    /// Any collection error, or an I/O error while writing.
    pub async fn collect_to_file(&self, domain: Domain, dir: &Path) -> Result<PathBuf> {
        let mapping = self.collect(domain).await?;
        let path = store::domain_file(dir, domain);
        store::write(&path, &mapping)?;
        tracing::info!(
            %domain,
            chains = mapping.len(),
            path = %path.display(),
            "mapping written"
        );
        Ok(path)
    }

    async fn collect_chain(
        &self,
        network: Network,
        from_registry: &BTreeMap<ChainId, BTreeSet<String>>,
    ) -> Result<BTreeSet<String>> {
        let chain_id = network.chain_id();
        let candidates = candidates(chain_id, from_registry.get(&chain_id));
        if candidates.is_empty() {
            return Err(CollectError::NoCandidates { chain_id });
        }

        tracing::info!(
            chain_id,
            network = network.name(),
            candidates = candidates.len(),
            "checking endpoints"
        );

        let verdicts: Vec<HealthVerdict> = join_all(
            candidates
                .iter()
                .map(|endpoint| self.checker.check(endpoint, chain_id)),
        )
        .await;

        let healthy = survivors(chain_id, &verdicts, self.policy)?;
        tracing::info!(
            chain_id,
            healthy = healthy.len(),
            unhealthy = verdicts.len() - healthy.len(),
            "chain checked"
        );
        Ok(healthy)
    }
}
