//! Binary schema codec for [`ResourceHashMessage`].

use super::ResourceHashMessage;
use crate::error::DecodeError;

/// Encodes/decodes the binary record carried in gateway responses.
pub trait ResourceHashCodec: Send + Sync {
    fn encode(&self, message: &ResourceHashMessage) -> Result<Vec<u8>, DecodeError>;

    fn decode(&self, bytes: &[u8]) -> Result<ResourceHashMessage, DecodeError>;
}

/// `bincode` (v1, fixed-int little-endian) layout of [`ResourceHashMessage`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BincodeCodec;

impl ResourceHashCodec for BincodeCodec {
    fn encode(&self, message: &ResourceHashMessage) -> Result<Vec<u8>, DecodeError> {
        bincode::serialize(message).map_err(|e| DecodeError::Codec(e.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<ResourceHashMessage, DecodeError> {
        bincode::deserialize(bytes).map_err(|e| DecodeError::Codec(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_record_is_rejected() {
        let message = ResourceHashMessage {
            hash: "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG".to_string(),
            ..Default::default()
        };
        let bytes = BincodeCodec.encode(&message).unwrap();
        let err = BincodeCodec.decode(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, DecodeError::Codec(_)));
    }
}
