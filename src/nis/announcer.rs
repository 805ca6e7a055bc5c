//! Built-in announcer: `POST {nis}/transaction/announce`.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::announce::wire::NemAnnounceResultResponse;
use crate::domain::announce::NemAnnounceResult;
use crate::domain::transaction::{SignedTransaction, TransactionAnnouncer};
use crate::error::{DecodeError, SdkError};
use crate::http::{ensure_success, HttpRequest, Transport};

/// Announces signed transactions to a NIS node.
#[derive(Clone)]
pub struct NisAnnouncer {
    nis_url: String,
    transport: Arc<dyn Transport>,
}

impl NisAnnouncer {
    pub fn new(nis_url: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            nis_url: nis_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn nis_url(&self) -> &str {
        &self.nis_url
    }
}

impl std::fmt::Debug for NisAnnouncer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NisAnnouncer")
            .field("nis_url", &self.nis_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TransactionAnnouncer for NisAnnouncer {
    async fn announce(&self, signed: &SignedTransaction) -> Result<NemAnnounceResult, SdkError> {
        let url = format!("{}/transaction/announce", self.nis_url);
        let body = serde_json::to_vec(signed)?;
        tracing::debug!(url = %url, data_len = signed.data.len(), "Announcing transaction");

        let response = ensure_success(self.transport.post(HttpRequest::json(url, body)).await?)?;
        if response.body.is_empty() {
            return Err(DecodeError::EmptyBody.into());
        }
        let wire: NemAnnounceResultResponse = serde_json::from_slice(&response.body)?;
        Ok(NemAnnounceResult::from(wire))
    }
}
