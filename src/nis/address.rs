//! NIS1 address derivation.
//!
//! `address = base32(network || ripemd160(keccak256(pk)) || checksum)`,
//! where `checksum` is the first 4 bytes of `keccak256` over the first 21 bytes.

use data_encoding::BASE32_NOPAD;
use ripemd::Ripemd160;
use sha3::{Digest, Keccak256};
use std::fmt;

use crate::error::SignError;
use crate::network::NetworkType;
use crate::nis::constants::{ADDRESS_LEN, PUBLIC_KEY_LEN};

/// Decoded address length: network byte, RIPEMD-160 hash, checksum.
const DECODED_LEN: usize = 25;
const CHECKSUM_LEN: usize = 4;

/// A NIS1 address in its plain (unhyphenated) form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub fn from_public_key(public_key: &[u8; PUBLIC_KEY_LEN], network: NetworkType) -> Self {
        let sha = Keccak256::digest(public_key);
        let ripe = Ripemd160::digest(sha);

        let mut decoded = Vec::with_capacity(DECODED_LEN);
        decoded.push(network.id());
        decoded.extend_from_slice(&ripe);
        let checksum = Keccak256::digest(&decoded);
        decoded.extend_from_slice(&checksum[..CHECKSUM_LEN]);

        Address(BASE32_NOPAD.encode(&decoded))
    }

    pub fn from_public_key_hex(public_key: &str, network: NetworkType) -> Result<Self, SignError> {
        let bytes = hex::decode(public_key)
            .map_err(|e| SignError::InvalidPublicKey(e.to_string()))?;
        let key: [u8; PUBLIC_KEY_LEN] = bytes.try_into().map_err(|b: Vec<u8>| {
            SignError::InvalidPublicKey(format!("expected {} bytes, got {}", PUBLIC_KEY_LEN, b.len()))
        })?;
        Ok(Self::from_public_key(&key, network))
    }

    /// Accepts the plain or the dash-separated form. The network byte must
    /// be known and the checksum must match.
    pub fn parse(value: &str) -> Result<Self, SignError> {
        let plain: String = value
            .chars()
            .filter(|c| *c != '-')
            .map(|c| c.to_ascii_uppercase())
            .collect();
        if plain.len() != ADDRESS_LEN {
            return Err(SignError::InvalidAddress(format!(
                "expected {} characters, got {}",
                ADDRESS_LEN,
                plain.len()
            )));
        }

        let decoded = BASE32_NOPAD
            .decode(plain.as_bytes())
            .map_err(|e| SignError::InvalidAddress(e.to_string()))?;
        if decoded.len() != DECODED_LEN {
            return Err(SignError::InvalidAddress(format!(
                "expected {} bytes, got {}",
                DECODED_LEN,
                decoded.len()
            )));
        }
        if network_from_id(decoded[0]).is_none() {
            return Err(SignError::InvalidAddress(format!(
                "unknown network byte 0x{:02x}",
                decoded[0]
            )));
        }

        let (body, checksum) = decoded.split_at(DECODED_LEN - CHECKSUM_LEN);
        if Keccak256::digest(body)[..CHECKSUM_LEN] != *checksum {
            return Err(SignError::InvalidAddress(format!("checksum mismatch: {}", value)));
        }
        Ok(Address(plain))
    }

    /// Network encoded in the first byte.
    pub fn network(&self) -> Option<NetworkType> {
        let decoded = BASE32_NOPAD.decode(self.0.as_bytes()).ok()?;
        decoded.first().copied().and_then(network_from_id)
    }

    pub fn plain(&self) -> &str {
        &self.0
    }

    /// Dash-separated form: groups of six characters.
    pub fn pretty(&self) -> String {
        self.0
            .as_bytes()
            .chunks(6)
            .map(|c| String::from_utf8_lossy(c).into_owned())
            .collect::<Vec<_>>()
            .join("-")
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn network_from_id(id: u8) -> Option<NetworkType> {
    [NetworkType::Mainnet, NetworkType::Testnet, NetworkType::Mijin]
        .into_iter()
        .find(|n| n.id() == id)
}
