//! EVM networks that at least one deployment domain serves.
//!
//! Every chain that can appear in a domain's endpoint mapping has a variant
//! here, so chain IDs in the static tables are checked at compile time
//! instead of being bare integers.

use alloy::primitives::ChainId;

/// A known EVM-compatible network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum Network {
    /// Ethereum Mainnet (chain ID 1).
    EthereumMainnet,
    /// OP Mainnet (chain ID 10).
    OptimismMainnet,
    /// BNB Smart Chain Mainnet (chain ID 56).
    BscMainnet,
    /// BNB Smart Chain Testnet (chain ID 97).
    BscTestnet,
    /// Gnosis (chain ID 100).
    GnosisMainnet,
    /// Polygon Mainnet (chain ID 137).
    PolygonMainnet,
    /// zkSync Sepolia testnet (chain ID 300).
    ZkSyncSepolia,
    /// Filecoin Mainnet (chain ID 314).
    FilecoinMainnet,
    /// NEAR Protocol EVM (chain ID 397).
    NearMainnet,
    /// NEAR Protocol EVM testnet (chain ID 398).
    NearTestnet,
    /// Canto (chain ID 7700).
    CantoMainnet,
    /// Canto testnet (chain ID 7701).
    CantoTestnet,
    /// Base Mainnet (chain ID 8453).
    BaseMainnet,
    /// Gnosis Chiado testnet (chain ID 10200).
    GnosisChiado,
    /// Arbitrum One (chain ID 42161).
    ArbitrumMainnet,
    /// Celo Mainnet (chain ID 42220).
    CeloMainnet,
    /// Avalanche C-Chain (chain ID 43114).
    AvalancheMainnet,
    /// Polygon Amoy testnet (chain ID 80002).
    PolygonAmoy,
    /// Base Sepolia testnet (chain ID 84532).
    BaseSepolia,
    /// Arbitrum Sepolia testnet (chain ID 421614).
    ArbitrumSepolia,
    /// Scroll Sepolia testnet (chain ID 534351).
    ScrollSepolia,
    /// Scroll Mainnet (chain ID 534352).
    ScrollMainnet,
    /// Filecoin Butterfly testnet (chain ID 3141592).
    FilecoinButterfly,
    /// Ethereum Sepolia testnet (chain ID 11155111).
    EthereumSepolia,
    /// OP Sepolia testnet (chain ID 11155420).
    OptimismSepolia,
}

impl Network {
    /// Returns the EIP-155 chain ID for this network.
    #[must_use]
    pub const fn chain_id(self) -> ChainId {
        match self {
            Self::EthereumMainnet => 1,
            Self::OptimismMainnet => 10,
            Self::BscMainnet => 56,
            Self::BscTestnet => 97,
            Self::GnosisMainnet => 100,
            Self::PolygonMainnet => 137,
            Self::ZkSyncSepolia => 300,
            Self::FilecoinMainnet => 314,
            Self::NearMainnet => 397,
            Self::NearTestnet => 398,
            Self::CantoMainnet => 7700,
            Self::CantoTestnet => 7701,
            Self::BaseMainnet => 8453,
            Self::GnosisChiado => 10200,
            Self::ArbitrumMainnet => 42161,
            Self::CeloMainnet => 42220,
            Self::AvalancheMainnet => 43114,
            Self::PolygonAmoy => 80002,
            Self::BaseSepolia => 84532,
            Self::ArbitrumSepolia => 421_614,
            Self::ScrollSepolia => 534_351,
            Self::ScrollMainnet => 534_352,
            Self::FilecoinButterfly => 3_141_592,
            Self::EthereumSepolia => 11_155_111,
            Self::OptimismSepolia => 11_155_420,
        }
    }

    /// Human-readable network name, as listed by the chain registry.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::EthereumMainnet => "Ethereum Mainnet",
            Self::OptimismMainnet => "OP Mainnet",
            Self::BscMainnet => "BNB Smart Chain Mainnet",
            Self::BscTestnet => "BNB Smart Chain Testnet",
            Self::GnosisMainnet => "Gnosis",
            Self::PolygonMainnet => "Polygon Mainnet",
            Self::ZkSyncSepolia => "zkSync Sepolia Testnet",
            Self::FilecoinMainnet => "Filecoin - Mainnet",
            Self::NearMainnet => "NEAR Protocol",
            Self::NearTestnet => "NEAR Protocol Testnet",
            Self::CantoMainnet => "Canto",
            Self::CantoTestnet => "Canto Testnet",
            Self::BaseMainnet => "Base",
            Self::GnosisChiado => "Gnosis Chiado Testnet",
            Self::ArbitrumMainnet => "Arbitrum One",
            Self::CeloMainnet => "Celo Mainnet",
            Self::AvalancheMainnet => "Avalanche C-Chain",
            Self::PolygonAmoy => "Amoy",
            Self::BaseSepolia => "Base Sepolia Testnet",
            Self::ArbitrumSepolia => "Arbitrum Sepolia",
            Self::ScrollSepolia => "Scroll Sepolia Testnet",
            Self::ScrollMainnet => "Scroll",
            Self::FilecoinButterfly => "Filecoin - Butterfly testnet",
            Self::EthereumSepolia => "Sepolia",
            Self::OptimismSepolia => "OP Sepolia Testnet",
        }
    }

    /// Whether this network is a testnet.
    #[must_use]
    pub const fn is_testnet(self) -> bool {
        matches!(
            self,
            Self::BscTestnet
                | Self::ZkSyncSepolia
                | Self::NearTestnet
                | Self::CantoTestnet
                | Self::GnosisChiado
                | Self::PolygonAmoy
                | Self::BaseSepolia
                | Self::ArbitrumSepolia
                | Self::ScrollSepolia
                | Self::FilecoinButterfly
                | Self::EthereumSepolia
                | Self::OptimismSepolia
        )
    }

    /// All known network variants, in ascending chain ID order.
    pub const ALL: &[Self] = &[
        Self::EthereumMainnet,
        Self::OptimismMainnet,
        Self::BscMainnet,
        Self::BscTestnet,
        Self::GnosisMainnet,
        Self::PolygonMainnet,
        Self::ZkSyncSepolia,
        Self::FilecoinMainnet,
        Self::NearMainnet,
        Self::NearTestnet,
        Self::CantoMainnet,
        Self::CantoTestnet,
        Self::BaseMainnet,
        Self::GnosisChiado,
        Self::ArbitrumMainnet,
        Self::CeloMainnet,
        Self::AvalancheMainnet,
        Self::PolygonAmoy,
        Self::BaseSepolia,
        Self::ArbitrumSepolia,
        Self::ScrollSepolia,
        Self::ScrollMainnet,
        Self::FilecoinButterfly,
        Self::EthereumSepolia,
        Self::OptimismSepolia,
    ];
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.chain_id())
    }
}
