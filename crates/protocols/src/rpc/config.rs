use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// NEAR network hosting the exchange contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// NEAR mainnet.
    #[default]
    Mainnet,
    /// NEAR testnet.
    Testnet,
}

impl Network {
    /// Public RPC endpoint of the network.
    #[must_use]
    pub fn rpc_url(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://rpc.mainnet.near.org",
            Network::Testnet => "https://rpc.testnet.near.org",
        }
    }

    /// Account id of the Ref Finance exchange contract.
    #[must_use]
    pub fn ref_contract_id(&self) -> &'static str {
        match self {
            Network::Mainnet => "v2.ref-finance.near",
            Network::Testnet => "ref-finance-101.testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => f.write_str("mainnet"),
            Network::Testnet => f.write_str("testnet"),
        }
    }
}

/// Error returned when parsing an unsupported network name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown network: {0} (expected mainnet or testnet)")]
pub struct UnknownNetwork(pub String);

impl FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            _ => Err(UnknownNetwork(s.to_string())),
        }
    }
}

/// Block finality used for view calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Finality {
    /// Latest final block.
    #[default]
    Final,
    /// Latest block, possibly not yet final.
    Optimistic,
}

/// Configuration for the NEAR JSON-RPC client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,
    /// Exchange contract account id.
    pub contract_id: String,
    /// Finality of the queried state.
    pub finality: Finality,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl RpcConfig {
    /// Creates the default configuration for a network.
    #[must_use]
    pub fn for_network(network: Network) -> Self {
        Self {
            rpc_url: network.rpc_url().to_string(),
            contract_id: network.ref_contract_id().to_string(),
            finality: Finality::default(),
            timeout_secs: 30,
        }
    }
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self::for_network(Network::default())
    }
}
