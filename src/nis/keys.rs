//! NIS1 key pairs.
//!
//! NIS1 uses Ed25519 with Keccak-512 in place of SHA-512, and stores private
//! keys as big-endian hex (the seed is the reversed byte string).

use curve25519_dalek::edwards::CompressedEdwardsY;
use ed25519_dalek::hazmat::{raw_sign, ExpandedSecretKey};
use ed25519_dalek::VerifyingKey;
use sha3::{Digest, Keccak256, Keccak512};

use crate::error::SignError;
use crate::nis::constants::{PUBLIC_KEY_LEN, SIGNATURE_LEN};

/// Signing key pair.
pub struct KeyPair {
    secret: ExpandedSecretKey,
    /// Unclamped scalar half of `keccak512(seed)`, for key agreement.
    scalar_bytes: [u8; 32],
    public: VerifyingKey,
}

impl KeyPair {
    /// Parse a NIS1 private key (64 hex chars, optionally `00`-prefixed).
    pub fn from_private_key_hex(private_key: &str) -> Result<Self, SignError> {
        let mut seed = parse_hex_32(strip_sign_prefix(private_key))
            .map_err(SignError::InvalidPrivateKey)?;
        seed.reverse();
        Ok(Self::from_seed(&seed))
    }

    /// Build from the raw 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let digest = Keccak512::digest(seed);
        let mut expanded = [0u8; 64];
        expanded.copy_from_slice(&digest);
        let mut scalar_bytes = [0u8; 32];
        scalar_bytes.copy_from_slice(&expanded[..32]);
        let secret = ExpandedSecretKey::from_bytes(&expanded);
        let public = VerifyingKey::from(&secret);
        Self {
            secret,
            scalar_bytes,
            public,
        }
    }

    /// Fresh random key pair.
    pub fn generate() -> Self {
        let seed: [u8; 32] = rand::random();
        Self::from_seed(&seed)
    }

    pub fn public_key(&self) -> [u8; PUBLIC_KEY_LEN] {
        self.public.to_bytes()
    }

    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key())
    }

    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LEN] {
        raw_sign::<Keccak512>(&self.secret, message, &self.public).to_bytes()
    }

    /// AES key shared with the holder of `other_public_key`:
    /// `keccak256((-P * a) XOR salt)`. Both sides derive the same key.
    pub fn shared_key(
        &self,
        other_public_key: &[u8; PUBLIC_KEY_LEN],
        salt: &[u8; 32],
    ) -> Result<[u8; 32], SignError> {
        let point = CompressedEdwardsY(*other_public_key)
            .decompress()
            .ok_or_else(|| SignError::InvalidPublicKey("not a curve point".to_string()))?;
        let mut shared = (-point).mul_clamped(self.scalar_bytes).compress().to_bytes();
        for (byte, salt_byte) in shared.iter_mut().zip(salt) {
            *byte ^= salt_byte;
        }

        let mut key = [0u8; 32];
        key.copy_from_slice(&Keccak256::digest(shared));
        Ok(key)
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public_key_hex())
            .finish_non_exhaustive()
    }
}

/// Parse a 32-byte public key from hex.
pub fn parse_public_key_hex(public_key: &str) -> Result<[u8; PUBLIC_KEY_LEN], SignError> {
    parse_hex_32(public_key).map_err(SignError::InvalidPublicKey)
}

fn strip_sign_prefix(key: &str) -> &str {
    if key.len() == 66 && key.starts_with("00") {
        &key[2..]
    } else {
        key
    }
}

fn parse_hex_32(value: &str) -> Result<[u8; 32], String> {
    let bytes = hex::decode(value).map_err(|e| e.to_string())?;
    bytes
        .try_into()
        .map_err(|b: Vec<u8>| format!("expected 32 bytes, got {}", b.len()))
}
