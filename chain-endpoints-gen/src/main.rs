//! Endpoint mapping generator CLI.
//!
//! Builds `<domain>.json` files mapping chain IDs to healthy public RPC
//! endpoints, and keeps existing files in canonical order.
//!
//! # Usage
//!
//! ```bash
//! # Regenerate every domain's mapping in the current directory
//! chain-endpoints-gen generate
//!
//! # Regenerate one domain, tolerating mis-mapped endpoints
//! chain-endpoints-gen generate --domain tapir --on-config-mismatch skip
//!
//! # Re-sort existing mapping files
//! chain-endpoints-gen sort --output-dir ./mappings
//!
//! # Show the chains each domain serves
//! chain-endpoints-gen list
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chain_endpoints::{Domain, supplement};
use chain_endpoints_gen::{Collector, Config, OnConfigMismatch, store};
use clap::{Parser, Subcommand};

/// Healthy RPC endpoint mapping generator.
#[derive(Debug, Parser)]
#[command(name = "chain-endpoints-gen", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Collect and health-check endpoints, then write `<domain>.json`.
    Generate {
        /// Domain to generate (lynx, tapir or mainnet). All domains if omitted.
        #[arg(long)]
        domain: Option<Domain>,

        /// Directory holding the mapping files.
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,

        /// Optional TOML configuration file.
        #[arg(long, default_value = "config.toml")]
        config: PathBuf,

        /// Override the maximum allowed latest-block drift, in seconds.
        #[arg(long)]
        max_drift_secs: Option<u64>,

        /// Override the handling of chain ID mismatches (`abort` or `skip`).
        #[arg(long)]
        on_config_mismatch: Option<OnConfigMismatch>,
    },

    /// Rewrite existing mapping files in canonical order.
    Sort {
        /// Domain file to sort. All domain files if omitted.
        #[arg(long)]
        domain: Option<Domain>,

        /// Directory holding the mapping files.
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// List the chains served by each domain.
    List {
        /// Only list this domain.
        #[arg(long)]
        domain: Option<Domain>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            domain,
            output_dir,
            config,
            max_drift_secs,
            on_config_mismatch,
        } => {
            let mut config = Config::load(&config)
                .with_context(|| format!("loading config {}", config.display()))?;
            if let Some(secs) = max_drift_secs {
                config.max_drift_secs = secs;
            }
            if let Some(policy) = on_config_mismatch {
                config.on_config_mismatch = policy;
            }
            cmd_generate(&config, &domains(domain), &output_dir).await
        }
        Command::Sort { domain, output_dir } => cmd_sort(&domains(domain), &output_dir),
        Command::List { domain } => {
            cmd_list(&domains(domain));
            Ok(())
        }
    }
}

/// The selected domain, or all of them.
fn domains(selected: Option<Domain>) -> Vec<Domain> {
    selected.map_or_else(|| Domain::ALL.to_vec(), |d| vec![d])
}

/// Execute the `generate` subcommand.
async fn cmd_generate(config: &Config, domains: &[Domain], output_dir: &Path) -> Result<()> {
    let collector = Collector::from_config(config)?;

    tracing::info!(
        domains = domains.len(),
        output_dir = %output_dir.display(),
        max_drift_secs = config.max_drift_secs,
        on_config_mismatch = ?config.on_config_mismatch,
        "starting generation"
    );

    let mut failed = 0u32;
    for &domain in domains {
        match collector.collect_to_file(domain, output_dir).await {
            Ok(path) => tracing::info!(%domain, path = %path.display(), "domain complete"),
            Err(e) => {
                failed += 1;
                tracing::error!(%domain, error = %e, "domain failed, mapping not written");
            }
        }
    }

    if failed > 0 {
        bail!("{failed} domain(s) failed");
    }

    tracing::info!("endpoint mappings generated");
    Ok(())
}

/// Execute the `sort` subcommand.
fn cmd_sort(domains: &[Domain], output_dir: &Path) -> Result<()> {
    for &domain in domains {
        let path = store::domain_file(output_dir, domain);
        if !path.exists() {
            tracing::warn!(%domain, path = %path.display(), "no mapping file, skipping");
            continue;
        }
        let mapping =
            store::sort_file(&path).with_context(|| format!("sorting {}", path.display()))?;
        if mapping.is_empty() {
            tracing::warn!(%domain, path = %path.display(), "mapping file has no chains");
        }
        tracing::info!(%domain, chains = mapping.len(), path = %path.display(), "sorted");
    }
    Ok(())
}

/// Execute the `list` subcommand.
#[allow(clippy::print_stdout, reason = "listing is the command's output")]
fn cmd_list(domains: &[Domain]) {
    println!(
        "{:<10} {:<12} {:<30} {:<8} Extra RPCs",
        "Domain", "Chain ID", "Name", "Type"
    );
    println!("{}", "-".repeat(75));

    for &domain in domains {
        for network in domain.networks() {
            let net_type = if network.is_testnet() { "test" } else { "main" };
            println!(
                "{:<10} {:<12} {:<30} {:<8} {}",
                domain,
                network.chain_id(),
                network.name(),
                net_type,
                supplement::extra_endpoints(network.chain_id()).len(),
            );
        }
    }
}
