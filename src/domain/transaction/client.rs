//! Transactions sub-client — sign, announce, sign-and-announce.

use crate::client::StorageClient;
use crate::domain::announce::NemAnnounceResult;
use crate::domain::resource_hash::ResourceHashMessage;
use crate::domain::transaction::{MessageType, SignRequest, SignedTransaction};
use crate::error::SdkError;

/// Sub-client for signing and announcing transfer transactions.
pub struct Transactions<'a> {
    pub(crate) client: &'a StorageClient,
}

impl<'a> Transactions<'a> {
    /// Sign a transfer whose message is the JSON form of `resource_hash`.
    pub fn sign(
        &self,
        resource_hash: &ResourceHashMessage,
        sender_private_key: &str,
        receiver_public_key: &str,
        message_type: MessageType,
    ) -> Result<SignedTransaction, SdkError> {
        let request = SignRequest {
            sender_private_key: sender_private_key.to_string(),
            receiver_public_key: receiver_public_key.to_string(),
            message_type,
            payload: resource_hash.to_message_payload()?,
        };
        Ok(self.client.signer.sign(&request)?)
    }

    /// Submit an already signed transaction.
    pub async fn announce(&self, signed: &SignedTransaction) -> Result<NemAnnounceResult, SdkError> {
        let result = self.client.announcer.announce(signed).await?;
        if result.is_success() {
            tracing::info!(
                transaction_hash = result.transaction_hash.as_deref().unwrap_or(""),
                "Transaction announced"
            );
        } else {
            tracing::warn!(
                result_type = %result.result_type,
                code = result.code,
                message = %result.message,
                "Announce was not accepted"
            );
        }
        Ok(result)
    }

    /// Sign then announce. The announcer is not called when signing fails.
    pub async fn sign_and_announce(
        &self,
        resource_hash: &ResourceHashMessage,
        sender_private_key: &str,
        receiver_public_key: &str,
        message_type: MessageType,
    ) -> Result<NemAnnounceResult, SdkError> {
        let signed = self.sign(
            resource_hash,
            sender_private_key,
            receiver_public_key,
            message_type,
        )?;
        self.announce(&signed).await
    }
}
