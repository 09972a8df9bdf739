use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    Devnet,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
        }
    }

    /// Default explorer backend serving blocks and address histories.
    pub fn backend_url(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://backend.mainnet.alephium.org",
            Network::Testnet => "https://backend.testnet.alephium.org",
            Network::Devnet => "http://127.0.0.1:9090",
        }
    }
}

impl std::str::FromStr for Network {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" | "main" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "devnet" => Ok(Network::Devnet),
            _ => Err("invalid network"),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_roundtrip() {
        for network in [Network::Mainnet, Network::Testnet, Network::Devnet] {
            assert_eq!(network.to_string().parse::<Network>(), Ok(network));
        }
        assert_eq!("main".parse::<Network>(), Ok(Network::Mainnet));
        assert!("regtest".parse::<Network>().is_err());
    }
}
