//! Uploads sub-client — store payloads, optionally sign and announce.
//!
//! `upload_*` = upload → sign → announce. `upload_*_to_storage_only` stops
//! after the upload and never reaches the signer or announcer.

use crate::client::StorageClient;
use crate::domain::announce::NemAnnounceResult;
use crate::domain::resource_hash::{decode_response_body, ResourceHashMessage};
use crate::domain::upload::wire::{CleanupBody, UploadBinaryBody, UploadTextBody};
use crate::domain::upload::{AnnounceKeys, UploadBinaryRequest, UploadTextRequest};
use crate::error::{SdkError, SignError};
use crate::http::{HttpResponse, ProgressCallback};

/// Sub-client for gateway uploads.
pub struct Uploads<'a> {
    pub(crate) client: &'a StorageClient,
}

impl<'a> Uploads<'a> {
    // ── Storage only ─────────────────────────────────────────────────────

    /// Upload text and return the decoded resource hash.
    pub async fn upload_text_to_storage_only(
        &self,
        request: &UploadTextRequest,
    ) -> Result<ResourceHashMessage, SdkError> {
        self.upload_text_to_storage_with_progress(request, None).await
    }

    pub async fn upload_text_to_storage_with_progress(
        &self,
        request: &UploadTextRequest,
        progress: Option<ProgressCallback>,
    ) -> Result<ResourceHashMessage, SdkError> {
        request.validate()?;
        let body = UploadTextBody::from(request);
        let response = self.client.http.upload_text(&body, progress).await?;
        self.decode(response)
    }

    /// Upload bytes and return the decoded resource hash.
    pub async fn upload_binary_to_storage_only(
        &self,
        request: &UploadBinaryRequest,
    ) -> Result<ResourceHashMessage, SdkError> {
        self.upload_binary_to_storage_with_progress(request, None).await
    }

    pub async fn upload_binary_to_storage_with_progress(
        &self,
        request: &UploadBinaryRequest,
        progress: Option<ProgressCallback>,
    ) -> Result<ResourceHashMessage, SdkError> {
        request.validate()?;
        let body = UploadBinaryBody::from(request);
        let response = self.client.http.upload_binary(&body, progress).await?;
        self.decode(response)
    }

    // ── Upload + sign + announce ─────────────────────────────────────────

    /// Upload text, then sign and announce a transfer carrying its resource hash.
    pub async fn upload_text(
        &self,
        request: &UploadTextRequest,
    ) -> Result<NemAnnounceResult, SdkError> {
        self.upload_text_with_progress(request, None).await
    }

    pub async fn upload_text_with_progress(
        &self,
        request: &UploadTextRequest,
        progress: Option<ProgressCallback>,
    ) -> Result<NemAnnounceResult, SdkError> {
        request.validate()?;
        let keys = request.announce_keys()?;
        self.ensure_signable(&keys)?;
        let resource_hash = self
            .upload_text_to_storage_with_progress(request, progress)
            .await?;
        self.announce(&resource_hash, &keys).await
    }

    /// Upload bytes, then sign and announce a transfer carrying its resource hash.
    pub async fn upload_binary(
        &self,
        request: &UploadBinaryRequest,
    ) -> Result<NemAnnounceResult, SdkError> {
        self.upload_binary_with_progress(request, None).await
    }

    pub async fn upload_binary_with_progress(
        &self,
        request: &UploadBinaryRequest,
        progress: Option<ProgressCallback>,
    ) -> Result<NemAnnounceResult, SdkError> {
        request.validate()?;
        let keys = request.announce_keys()?;
        self.ensure_signable(&keys)?;
        let resource_hash = self
            .upload_binary_to_storage_with_progress(request, progress)
            .await?;
        self.announce(&resource_hash, &keys).await
    }

    // ── Cleanup ──────────────────────────────────────────────────────────

    /// Ask the gateway to release a stored payload by multihash (base58).
    pub async fn cleanup(&self, multihash: &str) -> Result<(), SdkError> {
        validate_multihash(multihash)?;
        let body = CleanupBody {
            multihash: multihash.to_string(),
        };
        self.client.http.cleanup(&body).await?;
        Ok(())
    }

    // ── Internal ─────────────────────────────────────────────────────────

    fn decode(&self, response: HttpResponse) -> Result<ResourceHashMessage, SdkError> {
        let message = decode_response_body(&response.body, self.client.codec.as_ref())?;
        tracing::debug!(hash = %message.hash, digest = %message.digest, "Decoded resource hash");
        Ok(message)
    }

    fn ensure_signable(&self, keys: &AnnounceKeys) -> Result<(), SdkError> {
        if self.client.signer.supports_message_type(keys.message_type) {
            return Ok(());
        }
        Err(SignError::UnsupportedMessageType(keys.message_type.as_str().to_string()).into())
    }

    async fn announce(
        &self,
        resource_hash: &ResourceHashMessage,
        keys: &AnnounceKeys,
    ) -> Result<NemAnnounceResult, SdkError> {
        self.client
            .transactions()
            .sign_and_announce(
                resource_hash,
                &keys.sender_private_key,
                &keys.receiver_public_key,
                keys.message_type,
            )
            .await
    }
}

fn validate_multihash(value: &str) -> Result<(), SdkError> {
    if value.is_empty() {
        return Err(SdkError::Validation("multihash cannot be empty".to_string()));
    }
    let bytes = bs58::decode(value)
        .into_vec()
        .map_err(|_| SdkError::Validation("multihash is not valid Base58".to_string()))?;
    multihash::Multihash::<64>::from_bytes(&bytes)
        .map_err(|e| SdkError::Validation(format!("invalid multihash: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_multihash() {
        assert!(validate_multihash("QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG").is_ok());
        assert!(validate_multihash("").is_err());
        assert!(validate_multihash("0OIl").is_err());
        // valid base58, but not a multihash
        assert!(validate_multihash("2").is_err());
    }
}
