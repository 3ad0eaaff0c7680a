//! Hand-maintained endpoints that augment the public chain registry.
//!
//! Entries cover chains with few registry endpoints, providers the registry
//! does not list for some chains (dRPC), and nodies.app public endpoints.
//! They go through the same health checks as registry endpoints.

use alloy::primitives::ChainId;

use crate::networks::Network;

/// Extra candidate endpoints for a single network.
#[derive(Debug, Clone, Copy)]
pub struct ExtraEndpoints {
    /// The network the endpoints serve.
    pub network: Network,
    /// Candidate HTTPS JSON-RPC URLs.
    pub endpoints: &'static [&'static str],
}

/// All supplementary endpoints, keyed by network.
pub const EXTRA_RPC_ENDPOINTS: &[ExtraEndpoints] = &[
    ExtraEndpoints {
        network: Network::EthereumMainnet,
        endpoints: &["https://ethereum-public.nodies.app"],
    },
    ExtraEndpoints {
        network: Network::OptimismMainnet,
        endpoints: &["https://optimism-public.nodies.app"],
    },
    ExtraEndpoints {
        network: Network::BscMainnet,
        endpoints: &[
            "https://bsc.drpc.org",
            "https://binance-smart-chain-public.nodies.app",
        ],
    },
    ExtraEndpoints {
        network: Network::BscTestnet,
        endpoints: &["https://bsc-testnet.drpc.org"],
    },
    ExtraEndpoints {
        network: Network::GnosisMainnet,
        endpoints: &["https://gnosis.drpc.org", "https://gnosis-public.nodies.app"],
    },
    ExtraEndpoints {
        network: Network::PolygonMainnet,
        endpoints: &["https://polygon-public.nodies.app"],
    },
    ExtraEndpoints {
        network: Network::ZkSyncSepolia,
        endpoints: &[
            "https://zksync-era-sepolia.blockpi.network/v1/rpc/public",
            "https://sepolia.era.zksync.dev",
            "https://zksync-sepolia.drpc.org",
        ],
    },
    ExtraEndpoints {
        network: Network::BaseMainnet,
        endpoints: &["https://base.drpc.org", "https://base-public.nodies.app"],
    },
    ExtraEndpoints {
        network: Network::ArbitrumMainnet,
        endpoints: &[
            "https://arbitrum.drpc.org",
            "https://arbitrum-one-public.nodies.app",
        ],
    },
    ExtraEndpoints {
        network: Network::CeloMainnet,
        endpoints: &["https://celo.drpc.org"],
    },
    ExtraEndpoints {
        network: Network::AvalancheMainnet,
        endpoints: &["https://avalanche.drpc.org"],
    },
    ExtraEndpoints {
        network: Network::PolygonAmoy,
        endpoints: &[
            "https://polygon-amoy.drpc.org",
            "https://polygon-amoy-public.nodies.app",
        ],
    },
    ExtraEndpoints {
        network: Network::BaseSepolia,
        endpoints: &[
            "https://base-sepolia.gateway.tenderly.co",
            "https://base-sepolia.drpc.org",
            "https://base-sepolia-public.nodies.app",
        ],
    },
    ExtraEndpoints {
        network: Network::ArbitrumSepolia,
        endpoints: &[
            "https://api.zan.top/arb-sepolia",
            "https://arbitrum-sepolia.gateway.tenderly.co",
            "https://arbitrum-sepolia.drpc.org",
        ],
    },
    ExtraEndpoints {
        network: Network::ScrollSepolia,
        endpoints: &[
            "https://scroll-sepolia.drpc.org",
            "https://scroll-sepolia-public.nodies.app",
        ],
    },
    ExtraEndpoints {
        network: Network::ScrollMainnet,
        endpoints: &["https://scroll.drpc.org", "https://scroll-public.nodies.app"],
    },
    ExtraEndpoints {
        network: Network::EthereumSepolia,
        endpoints: &["https://sepolia.drpc.org"],
    },
    ExtraEndpoints {
        network: Network::OptimismSepolia,
        endpoints: &[
            "https://api.zan.top/opt-sepolia",
            "https://endpoints.omniatech.io/v1/op/sepolia/public",
            "https://optimism-sepolia.blockpi.network/v1/rpc/public",
            "https://optimism-sepolia.gateway.tenderly.co",
            "https://optimism-sepolia-public.nodies.app",
        ],
    },
];

/// Supplementary endpoints for `chain_id`, or an empty slice.
#[must_use]
pub fn extra_endpoints(chain_id: ChainId) -> &'static [&'static str] {
    EXTRA_RPC_ENDPOINTS
        .iter()
        .find(|e| e.network.chain_id() == chain_id)
        .map_or(&[][..], |e| e.endpoints)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::filter::filter_endpoints;

    #[test]
    fn entries_are_unique_per_network() {
        let networks: BTreeSet<_> = EXTRA_RPC_ENDPOINTS.iter().map(|e| e.network).collect();
        assert_eq!(networks.len(), EXTRA_RPC_ENDPOINTS.len(), "duplicate network entry");
    }

    #[test]
    fn entries_survive_the_filter() {
        for entry in EXTRA_RPC_ENDPOINTS {
            let kept = filter_endpoints(entry.endpoints.iter().copied());
            assert_eq!(
                kept.len(),
                entry.endpoints.len(),
                "{} has an endpoint the filter drops",
                entry.network
            );
        }
    }

    #[test]
    fn lookup_by_chain_id() {
        assert_eq!(
            extra_endpoints(11_155_111),
            &["https://sepolia.drpc.org"],
            "sepolia"
        );
        assert!(extra_endpoints(397).is_empty(), "near has no extras");
    }
}
