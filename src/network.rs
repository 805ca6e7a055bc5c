//! Network URL constants and NEM network identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default storage gateway base URL (public test network).
pub const DEFAULT_GATEWAY_URL: &str = "https://testnet.gateway.proximax.io";

/// Default NIS node used to announce transactions (public test network).
pub const DEFAULT_NIS_URL: &str = "http://bigalice2.nem.ninja:7890";

/// NEM network the transactions are built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    Mainnet,
    #[default]
    Testnet,
    Mijin,
}

impl NetworkType {
    /// Network byte used in addresses and the transaction version field.
    pub fn id(&self) -> u8 {
        match self {
            NetworkType::Mainnet => 0x68,
            NetworkType::Testnet => 0x98,
            NetworkType::Mijin => 0x60,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkType::Mainnet => "mainnet",
            NetworkType::Testnet => "testnet",
            NetworkType::Mijin => "mijin",
        }
    }

    /// First character of every address on this network.
    pub fn address_prefix(&self) -> char {
        match self {
            NetworkType::Mainnet => 'N',
            NetworkType::Testnet => 'T',
            NetworkType::Mijin => 'M',
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NetworkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(NetworkType::Mainnet),
            "testnet" => Ok(NetworkType::Testnet),
            "mijin" => Ok(NetworkType::Mijin),
            other => Err(format!("unknown network: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_network_is_testnet() {
        assert_eq!(NetworkType::default(), NetworkType::Testnet);
    }

    #[test]
    fn test_network_ids() {
        assert_eq!(NetworkType::Mainnet.id(), 0x68);
        assert_eq!(NetworkType::Testnet.id(), 0x98);
        assert_eq!(NetworkType::Mijin.id(), 0x60);
    }

    #[test]
    fn test_parse_network() {
        assert_eq!("MAINNET".parse::<NetworkType>(), Ok(NetworkType::Mainnet));
        assert_eq!("testnet".parse::<NetworkType>(), Ok(NetworkType::Testnet));
        assert!("privatenet".parse::<NetworkType>().is_err());
    }
}
