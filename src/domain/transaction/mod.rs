//! Transaction domain — signed payloads and the signer/announcer seams.
//!
//! Signing and announcing are pluggable: the client holds an
//! `Arc<dyn TransactionSigner>` and an `Arc<dyn TransactionAnnouncer>`.
//! The built-in NIS1 implementations live in [`crate::nis`].

pub mod client;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::announce::NemAnnounceResult;
use crate::error::{SdkError, SignError};

// ─── MessageType ─────────────────────────────────────────────────────────────

/// Transfer message type (serializes as the NIS integer: 1=Plain, 2=Secure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u32", into = "u32")]
#[repr(u32)]
pub enum MessageType {
    #[default]
    Plain = 1,
    /// Encrypted for the recipient.
    Secure = 2,
}

/// Error returned when trying to convert an invalid value to [`MessageType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidMessageTypeError(pub u32);

impl fmt::Display for InvalidMessageTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid message type value: {} (expected 1 for Plain or 2 for Secure)",
            self.0
        )
    }
}

impl std::error::Error for InvalidMessageTypeError {}

impl TryFrom<u32> for MessageType {
    type Error = InvalidMessageTypeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Plain),
            2 => Ok(Self::Secure),
            _ => Err(InvalidMessageTypeError(value)),
        }
    }
}

impl From<MessageType> for u32 {
    fn from(message_type: MessageType) -> Self {
        message_type as u32
    }
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Plain => "plain",
            MessageType::Secure => "secure",
        }
    }
}

// ─── SignRequest / SignedTransaction ─────────────────────────────────────────

/// Everything a signer needs to produce a transfer carrying `payload`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignRequest {
    /// Sender private key (hex, NIS1 format).
    pub sender_private_key: String,
    /// Receiver public key (hex).
    pub receiver_public_key: String,
    pub message_type: MessageType,
    /// Transaction message content.
    pub payload: Vec<u8>,
}

/// A signed transaction ready for network submission.
///
/// Serializes as the NIS `RequestAnnounce` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction {
    /// Hex-encoded serialized transaction bytes.
    pub data: String,
    /// Hex-encoded 64-byte signature over `data`.
    pub signature: String,
}

impl SignedTransaction {
    pub fn new(data: &[u8], signature: &[u8]) -> Self {
        Self {
            data: hex::encode(data),
            signature: hex::encode(signature),
        }
    }
}

// ─── Collaborator traits ─────────────────────────────────────────────────────

/// Turns key material and a payload into a signed transaction.
pub trait TransactionSigner: Send + Sync {
    fn sign(&self, request: &SignRequest) -> Result<SignedTransaction, SignError>;

    /// Checked before an upload that will be signed, so an unsupported
    /// message type fails without storing anything.
    fn supports_message_type(&self, _message_type: MessageType) -> bool {
        true
    }
}

/// Submits a signed transaction to the network.
#[async_trait]
pub trait TransactionAnnouncer: Send + Sync {
    async fn announce(&self, signed: &SignedTransaction) -> Result<NemAnnounceResult, SdkError>;
}
