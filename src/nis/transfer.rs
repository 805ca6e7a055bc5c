//! NIS1 transfer transaction serialization and fees.

use chrono::{DateTime, Utc};

use crate::domain::transaction::MessageType;
use crate::error::SignError;
use crate::network::NetworkType;
use crate::nis::address::Address;
use crate::nis::constants::*;

/// Message attached to a transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferMessage {
    pub message_type: MessageType,
    pub payload: Vec<u8>,
}

/// Unsigned XEM transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferTransaction {
    pub network: NetworkType,
    /// Seconds since the NEM epoch.
    pub timestamp: u32,
    pub deadline: u32,
    pub signer: [u8; PUBLIC_KEY_LEN],
    pub recipient: Address,
    /// Micro-XEM.
    pub amount: u64,
    /// Micro-XEM.
    pub fee: u64,
    pub message: Option<TransferMessage>,
}

impl TransferTransaction {
    /// `(network id << 24) | version`.
    pub fn version(&self) -> u32 {
        (u32::from(self.network.id()) << 24) | u32::from(TRANSFER_VERSION)
    }

    /// Little-endian NIS1 binary form; this is what gets signed.
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(128);
        buf.extend_from_slice(&TRANSFER_TYPE.to_le_bytes());
        buf.extend_from_slice(&self.version().to_le_bytes());
        buf.extend_from_slice(&self.timestamp.to_le_bytes());
        put_bytes(&mut buf, &self.signer);
        buf.extend_from_slice(&self.fee.to_le_bytes());
        buf.extend_from_slice(&self.deadline.to_le_bytes());
        put_bytes(&mut buf, self.recipient.as_bytes());
        buf.extend_from_slice(&self.amount.to_le_bytes());

        match &self.message {
            Some(message) => {
                let inner_len = 8 + message.payload.len();
                buf.extend_from_slice(&(inner_len as u32).to_le_bytes());
                buf.extend_from_slice(&u32::from(message.message_type).to_le_bytes());
                put_bytes(&mut buf, &message.payload);
            }
            None => buf.extend_from_slice(&0u32.to_le_bytes()),
        }
        buf
    }
}

fn put_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    buf.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
    buf.extend_from_slice(bytes);
}

/// Minimum fee (micro-XEM) for a transfer of `amount` micro-XEM with a
/// message of `message_len` bytes.
pub fn calculate_transfer_fee(amount: u64, message_len: Option<usize>) -> u64 {
    let xem = amount / MICRO_XEM_PER_XEM;
    let units = (xem / XEM_PER_FEE_UNIT).clamp(1, MAX_TRANSFER_FEE_UNITS);
    let mut fee = FEE_UNIT * units;
    if let Some(len) = message_len {
        fee += FEE_UNIT * (len / MESSAGE_FEE_BLOCK + 1) as u64;
    }
    fee
}

/// Seconds between the NEM epoch and `now`.
pub fn nem_timestamp(now: DateTime<Utc>) -> Result<u32, SignError> {
    let secs = now.timestamp() - NEM_EPOCH_UNIX_SECS;
    u32::try_from(secs).map_err(|_| SignError::Time(format!("{} is before the NEM epoch", now)))
}
