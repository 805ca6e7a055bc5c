//! Resource hash domain — the record the gateway returns for stored content.

mod codec;

pub use codec::{BincodeCodec, ResourceHashCodec};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// Content-addressed description of an uploaded payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResourceHashMessage {
    /// Hex digest of the stored content.
    pub digest: String,
    /// Multihash (base58) under which the storage network serves the content.
    pub hash: String,
    pub keywords: Option<String>,
    pub name: Option<String>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    /// JSON text supplied at upload time.
    pub metadata: Option<String>,
}

impl ResourceHashMessage {
    /// JSON bytes used as the transfer message.
    pub fn to_message_payload(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// Decode a gateway response body: base64 text wrapping a codec-encoded record.
pub fn decode_response_body(
    body: &[u8],
    codec: &dyn ResourceHashCodec,
) -> Result<ResourceHashMessage, DecodeError> {
    let text = std::str::from_utf8(body).map_err(|_| DecodeError::NotUtf8)?;
    // Some gateways return the base64 string as a JSON string literal.
    let text = text.trim().trim_matches('"');
    if text.is_empty() {
        return Err(DecodeError::EmptyBody);
    }
    let bytes = BASE64.decode(text)?;
    codec.decode(&bytes)
}

/// Inverse of [`decode_response_body`].
pub fn encode_response_body(
    message: &ResourceHashMessage,
    codec: &dyn ResourceHashCodec,
) -> Result<String, DecodeError> {
    Ok(BASE64.encode(codec.encode(message)?))
}
