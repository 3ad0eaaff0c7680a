//! Deployment domains and the chains each one serves.
//!
//! The chain sets are compiled in. Sets are independent per domain: the
//! `lynx` development tier also covers chains used by `tapir` and `mainnet`.

use std::fmt;
use std::str::FromStr;

use alloy::primitives::ChainId;

use crate::EndpointsError;
use crate::networks::Network;

/// A named deployment tier with a fixed set of chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Domain {
    /// Development network.
    Lynx,
    /// Public testnet.
    Tapir,
    /// Production.
    Mainnet,
}

const LYNX_NETWORKS: &[Network] = &[
    Network::EthereumMainnet,
    Network::OptimismMainnet,
    Network::BscMainnet,
    Network::BscTestnet,
    Network::GnosisMainnet,
    Network::PolygonMainnet,
    Network::ZkSyncSepolia,
    Network::FilecoinMainnet,
    Network::NearMainnet,
    Network::NearTestnet,
    Network::CantoMainnet,
    Network::CantoTestnet,
    Network::BaseMainnet,
    Network::GnosisChiado,
    Network::ArbitrumMainnet,
    Network::CeloMainnet,
    Network::AvalancheMainnet,
    Network::PolygonAmoy,
    Network::BaseSepolia,
    Network::ArbitrumSepolia,
    Network::ScrollSepolia,
    Network::ScrollMainnet,
    Network::FilecoinButterfly,
    Network::EthereumSepolia,
    Network::OptimismSepolia,
];

const TAPIR_NETWORKS: &[Network] = &[Network::PolygonAmoy, Network::EthereumSepolia];

const MAINNET_NETWORKS: &[Network] = &[Network::EthereumMainnet, Network::PolygonMainnet];

impl Domain {
    /// All domains, in the order a full run processes them.
    pub const ALL: &[Self] = &[Self::Lynx, Self::Tapir, Self::Mainnet];

    /// The domain's name as used on the command line and in file names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lynx => "lynx",
            Self::Tapir => "tapir",
            Self::Mainnet => "mainnet",
        }
    }

    /// Networks served by this domain, in ascending chain ID order.
    #[must_use]
    pub const fn networks(self) -> &'static [Network] {
        match self {
            Self::Lynx => LYNX_NETWORKS,
            Self::Tapir => TAPIR_NETWORKS,
            Self::Mainnet => MAINNET_NETWORKS,
        }
    }

    /// Chain IDs served by this domain, in ascending order.
    pub fn chain_ids(self) -> impl Iterator<Item = ChainId> {
        self.networks().iter().map(|n| n.chain_id())
    }

    /// File name of the domain's endpoint mapping, e.g. `tapir.json`.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = EndpointsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| EndpointsError::UnknownDomain(s.to_owned()))
    }
}
