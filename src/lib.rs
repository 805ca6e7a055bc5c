//! # NEM Storage SDK
//!
//! A Rust client for a NEM/IPFS storage gateway: upload text or binary
//! payloads, then optionally sign and announce a NIS1 transfer carrying the
//! resulting resource hash.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Errors, network constants, domain models (requests, resource hashes, announce results)
//! 2. **NIS** — Keccak-flavoured Ed25519 keys, addresses, secure messages, transfer serialization, built-in signer + announcer
//! 3. **HTTP** — `Transport` seam, `ReqwestTransport`, `GatewayHttp`, upload progress
//! 4. **High-Level Client** — `StorageClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nem_storage_sdk::prelude::*;
//!
//! let client = StorageClient::builder()
//!     .base_url("https://testnet.gateway.proximax.io")
//!     .network(NetworkType::Testnet)
//!     .build()?;
//!
//! let hash = client
//!     .uploads()
//!     .upload_text_to_storage_only(&UploadTextRequest::new("hello"))
//!     .await?;
//!
//! let request = UploadTextRequest::new("hello").with_keys(private_key, public_key);
//! let result = client.uploads().upload_text(&request).await?;
//! println!("{}: {}", result.code, result.meaning());
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants and NEM network identifiers.
pub mod network;

// ── Layer 2: NIS ─────────────────────────────────────────────────────────────

/// NIS1 keys, addresses, transfer transactions, signer and announcer.
pub mod nis;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// Transport seam and the low-level gateway client.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `StorageClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types — upload
    pub use crate::domain::upload::{UploadBinaryRequest, UploadTextRequest};

    // Domain types — resource hash
    pub use crate::domain::resource_hash::{BincodeCodec, ResourceHashCodec, ResourceHashMessage};

    // Domain types — announce
    pub use crate::domain::announce::{
        AnnounceResultType, NemAnnounceResult, NodeStatus, ValidationCode,
    };

    // Domain types — transaction
    pub use crate::domain::transaction::{
        MessageType, SignRequest, SignedTransaction, TransactionAnnouncer, TransactionSigner,
    };

    // Errors
    pub use crate::error::{DecodeError, HttpError, SdkError, SignError};

    // Network
    pub use crate::network::{NetworkType, DEFAULT_GATEWAY_URL, DEFAULT_NIS_URL};

    // NIS
    pub use crate::nis::{Address, KeyPair, NisAnnouncer, NisSigner};

    // HTTP
    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;
    pub use crate::http::{HttpRequest, HttpResponse, ProgressCallback, Transport, UploadProgress};

    // Client + sub-clients
    pub use crate::client::{
        ClientConfig, StorageClient, StorageClientBuilder, TransactionsClient, UploadsClient,
    };
}
