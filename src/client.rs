//! High-level client — `StorageClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the configuration, the builder, and accessor methods.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::resource_hash::{BincodeCodec, ResourceHashCodec};
use crate::domain::transaction::client::Transactions;
use crate::domain::transaction::{TransactionAnnouncer, TransactionSigner};
use crate::domain::upload::client::Uploads;
use crate::error::SdkError;
use crate::http::{GatewayHttp, Transport, DEFAULT_TIMEOUT};
use crate::network::{NetworkType, DEFAULT_GATEWAY_URL, DEFAULT_NIS_URL};
use crate::nis::{NisAnnouncer, NisSigner};

// Re-export sub-client types for convenience.
pub use crate::domain::transaction::client::Transactions as TransactionsClient;
pub use crate::domain::upload::client::Uploads as UploadsClient;

pub const ENV_GATEWAY_URL: &str = "STORAGE_GATEWAY_URL";
pub const ENV_NIS_URL: &str = "STORAGE_NIS_URL";
pub const ENV_NETWORK: &str = "STORAGE_NETWORK";

// ═════════════════════════════════════════════════════════════════════════════
// Config
// ═════════════════════════════════════════════════════════════════════════════

/// Endpoints, network and timeout used by [`StorageClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub nis_url: String,
    pub network: NetworkType,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GATEWAY_URL.to_string(),
            nis_url: DEFAULT_NIS_URL.to_string(),
            network: NetworkType::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Defaults, overridden by `STORAGE_GATEWAY_URL`, `STORAGE_NIS_URL` and
    /// `STORAGE_NETWORK` when set.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SdkError> {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_GATEWAY_URL) {
            config.base_url = url;
        }
        if let Some(url) = lookup(ENV_NIS_URL) {
            config.nis_url = url;
        }
        if let Some(network) = lookup(ENV_NETWORK) {
            config.network = network
                .parse()
                .map_err(|e: String| SdkError::Validation(format!("{}: {}", ENV_NETWORK, e)))?;
        }
        Ok(config)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Client
// ═════════════════════════════════════════════════════════════════════════════

/// The primary entry point for the storage SDK.
///
/// Provides nested sub-client accessors: `client.uploads()`,
/// `client.transactions()`.
#[derive(Clone)]
pub struct StorageClient {
    pub(crate) http: GatewayHttp,
    pub(crate) signer: Arc<dyn TransactionSigner>,
    pub(crate) announcer: Arc<dyn TransactionAnnouncer>,
    pub(crate) codec: Arc<dyn ResourceHashCodec>,
    config: ClientConfig,
}

impl StorageClient {
    pub fn builder() -> StorageClientBuilder {
        StorageClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn uploads(&self) -> Uploads<'_> {
        Uploads { client: self }
    }

    pub fn transactions(&self) -> Transactions<'_> {
        Transactions { client: self }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl std::fmt::Debug for StorageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageClient")
            .field("http", &self.http)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct StorageClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
    signer: Option<Arc<dyn TransactionSigner>>,
    announcer: Option<Arc<dyn TransactionAnnouncer>>,
    codec: Option<Arc<dyn ResourceHashCodec>>,
}

impl Default for StorageClientBuilder {
    fn default() -> Self {
        Self {
            config: ClientConfig::default(),
            transport: None,
            signer: None,
            announcer: None,
            codec: None,
        }
    }
}

impl StorageClientBuilder {
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.config.base_url = url.to_string();
        self
    }

    pub fn nis_url(mut self, url: &str) -> Self {
        self.config.nis_url = url.to_string();
        self
    }

    pub fn network(mut self, network: NetworkType) -> Self {
        self.config.network = network;
        self
    }

    /// Request timeout for the default reqwest transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Transport shared by the gateway client and the default announcer.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn signer(mut self, signer: Arc<dyn TransactionSigner>) -> Self {
        self.signer = Some(signer);
        self
    }

    pub fn announcer(mut self, announcer: Arc<dyn TransactionAnnouncer>) -> Self {
        self.announcer = Some(announcer);
        self
    }

    pub fn codec(mut self, codec: Arc<dyn ResourceHashCodec>) -> Self {
        self.codec = Some(codec);
        self
    }

    pub fn build(self) -> Result<StorageClient, SdkError> {
        let config = self.config;
        let transport = match self.transport {
            Some(transport) => transport,
            None => default_transport(config.timeout)?,
        };

        let signer = self
            .signer
            .unwrap_or_else(|| Arc::new(NisSigner::new(config.network)));
        let announcer = self
            .announcer
            .unwrap_or_else(|| Arc::new(NisAnnouncer::new(&config.nis_url, transport.clone())));
        let codec = self.codec.unwrap_or_else(|| Arc::new(BincodeCodec));

        tracing::debug!(
            base_url = %config.base_url,
            nis_url = %config.nis_url,
            network = %config.network,
            "Storage client built"
        );

        Ok(StorageClient {
            http: GatewayHttp::new(&config.base_url, transport),
            signer,
            announcer,
            codec,
            config,
        })
    }
}

#[cfg(feature = "http")]
fn default_transport(timeout: Duration) -> Result<Arc<dyn Transport>, SdkError> {
    Ok(Arc::new(crate::http::ReqwestTransport::new(timeout)?))
}

#[cfg(not(feature = "http"))]
fn default_transport(_timeout: Duration) -> Result<Arc<dyn Transport>, SdkError> {
    Err(SdkError::Other(
        "no transport configured; enable the `http` feature or call `transport()`".to_string(),
    ))
}
