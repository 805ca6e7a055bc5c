//! NIS1 protocol support: keys, addresses, secure messages, transfer
//! serialization, and the built-in signer and announcer.

pub mod address;
pub mod announcer;
pub mod constants;
pub mod keys;
pub mod secure;
pub mod signer;
pub mod transfer;

pub use address::Address;
pub use announcer::NisAnnouncer;
pub use keys::KeyPair;
pub use secure::{decrypt_message, encrypt_message};
pub use signer::NisSigner;
pub use transfer::{calculate_transfer_fee, nem_timestamp, TransferMessage, TransferTransaction};
