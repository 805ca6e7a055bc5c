//! Built-in NIS1 transaction signer.

use chrono::{DateTime, Utc};

use crate::domain::transaction::{MessageType, SignRequest, SignedTransaction, TransactionSigner};
use crate::error::SignError;
use crate::network::NetworkType;
use crate::nis::address::Address;
use crate::nis::constants::{DEFAULT_DEADLINE_SECS, MAX_MESSAGE_LEN};
use crate::nis::keys::{parse_public_key_hex, KeyPair};
use crate::nis::secure::encrypt_message;
use crate::nis::transfer::{calculate_transfer_fee, nem_timestamp, TransferMessage, TransferTransaction};

/// Signs zero-XEM transfers whose message carries the payload, in the clear
/// or encrypted for the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NisSigner {
    network: NetworkType,
    deadline_secs: u32,
}

impl NisSigner {
    pub fn new(network: NetworkType) -> Self {
        Self {
            network,
            deadline_secs: DEFAULT_DEADLINE_SECS,
        }
    }

    pub fn with_deadline_secs(mut self, deadline_secs: u32) -> Self {
        self.deadline_secs = deadline_secs;
        self
    }

    pub fn network(&self) -> NetworkType {
        self.network
    }

    /// Build the unsigned transfer for `request` as of `now`. Secure
    /// payloads are encrypted for the receiver with `sender`'s key.
    pub fn build_transfer(
        &self,
        request: &SignRequest,
        sender: &KeyPair,
        now: DateTime<Utc>,
    ) -> Result<TransferTransaction, SignError> {
        let receiver = parse_public_key_hex(&request.receiver_public_key)?;
        let payload = match request.message_type {
            MessageType::Plain => request.payload.clone(),
            MessageType::Secure => encrypt_message(sender, &receiver, &request.payload)?,
        };
        if payload.len() > MAX_MESSAGE_LEN {
            return Err(SignError::MessageTooLarge {
                len: payload.len(),
                max: MAX_MESSAGE_LEN,
            });
        }

        let timestamp = nem_timestamp(now)?;
        let amount = 0;

        Ok(TransferTransaction {
            network: self.network,
            timestamp,
            deadline: timestamp.saturating_add(self.deadline_secs),
            signer: sender.public_key(),
            recipient: Address::from_public_key(&receiver, self.network),
            amount,
            fee: calculate_transfer_fee(amount, Some(payload.len())),
            message: Some(TransferMessage {
                message_type: request.message_type,
                payload,
            }),
        })
    }

    /// Sign as of `now`.
    pub fn sign_at(
        &self,
        request: &SignRequest,
        now: DateTime<Utc>,
    ) -> Result<SignedTransaction, SignError> {
        let key_pair = KeyPair::from_private_key_hex(&request.sender_private_key)?;
        let transfer = self.build_transfer(request, &key_pair, now)?;
        let data = transfer.serialize();
        let signature = key_pair.sign(&data);

        tracing::debug!(
            network = %self.network,
            recipient = %transfer.recipient,
            fee = transfer.fee,
            message_type = request.message_type.as_str(),
            payload_len = request.payload.len(),
            "Signed transfer"
        );
        Ok(SignedTransaction::new(&data, &signature))
    }
}

impl Default for NisSigner {
    fn default() -> Self {
        Self::new(NetworkType::default())
    }
}

impl TransactionSigner for NisSigner {
    fn sign(&self, request: &SignRequest) -> Result<SignedTransaction, SignError> {
        self.sign_at(request, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crate::nis::secure::decrypt_message;
    use curve25519_dalek::edwards::CompressedEdwardsY;
    use ed25519_dalek::hazmat::raw_verify;
    use ed25519_dalek::{Signature, VerifyingKey};
    use sha3::Keccak512;

    const PRIVATE_KEY: &str = "575dbb3062267eff57c970a336ebbc8fbcfe12c5bd3ed7bc11eb0481d7704ced";

    fn request(message_type: MessageType, payload: &[u8]) -> SignRequest {
        SignRequest {
            sender_private_key: PRIVATE_KEY.to_string(),
            receiver_public_key: KeyPair::generate().public_key_hex(),
            message_type,
            payload: payload.to_vec(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_sign_produces_verifiable_signature() {
        let signer = NisSigner::new(NetworkType::Testnet);
        let signed = signer.sign_at(&request(MessageType::Plain, b"{}"), now()).unwrap();

        let data = hex::decode(&signed.data).unwrap();
        let signature: [u8; 64] = hex::decode(&signed.signature).unwrap().try_into().unwrap();
        let public = KeyPair::from_private_key_hex(PRIVATE_KEY).unwrap().public_key();
        let verifying = VerifyingKey::from_bytes(&public).unwrap();

        assert!(raw_verify::<Keccak512>(&verifying, &data, &Signature::from_bytes(&signature)).is_ok());
        assert_eq!(&data[16..48], &public);
    }

    #[test]
    fn test_deadline_and_fee() {
        let signer = NisSigner::new(NetworkType::Testnet).with_deadline_secs(60);
        let pair = KeyPair::from_private_key_hex(PRIVATE_KEY).unwrap();
        let tx = signer
            .build_transfer(&request(MessageType::Plain, &[0u8; 40]), &pair, now())
            .unwrap();
        assert_eq!(tx.deadline - tx.timestamp, 60);
        assert_eq!(tx.amount, 0);
        assert_eq!(tx.fee, 150_000);
        assert!(tx.recipient.plain().starts_with('T'));
    }

    #[test]
    fn test_secure_message_is_encrypted_for_receiver() {
        let sender = KeyPair::from_private_key_hex(PRIVATE_KEY).unwrap();
        let receiver = KeyPair::generate();
        let req = SignRequest {
            receiver_public_key: receiver.public_key_hex(),
            ..request(MessageType::Secure, b"{\"hash\":\"Qm\"}")
        };

        let tx = NisSigner::default().build_transfer(&req, &sender, now()).unwrap();
        let message = tx.message.as_ref().unwrap();
        assert_eq!(message.message_type, MessageType::Secure);
        assert_ne!(message.payload, req.payload);
        // salt + iv + one padded block
        assert_eq!(message.payload.len(), 32 + 16 + 16);
        assert_eq!(tx.fee, calculate_transfer_fee(0, Some(64)));

        let plaintext = decrypt_message(&receiver, &sender.public_key(), &message.payload).unwrap();
        assert_eq!(plaintext, req.payload);
    }

    #[test]
    fn test_secure_message_needs_curve_point_receiver() {
        let not_a_point = (0u8..=255)
            .map(|b| {
                let mut bytes = [0u8; 32];
                bytes[0] = b;
                bytes
            })
            .find(|bytes| CompressedEdwardsY(*bytes).decompress().is_none())
            .unwrap();
        let mut req = request(MessageType::Secure, b"x");
        req.receiver_public_key = hex::encode(not_a_point);
        assert!(matches!(
            NisSigner::default().sign_at(&req, now()),
            Err(SignError::InvalidPublicKey(_))
        ));
    }

    #[test]
    fn test_secure_payload_counts_toward_size_limit() {
        // fits in the clear, but not after salt, iv and padding
        let payload = vec![b'a'; MAX_MESSAGE_LEN - 8];
        assert!(NisSigner::default().sign_at(&request(MessageType::Plain, &payload), now()).is_ok());
        let result = NisSigner::default().sign_at(&request(MessageType::Secure, &payload), now());
        assert!(matches!(result, Err(SignError::MessageTooLarge { .. })));
    }

    #[test]
    fn test_message_too_large() {
        let payload = vec![b'a'; MAX_MESSAGE_LEN + 1];
        let result = NisSigner::default().sign_at(&request(MessageType::Plain, &payload), now());
        assert!(matches!(result, Err(SignError::MessageTooLarge { len, .. }) if len == MAX_MESSAGE_LEN + 1));
    }

    #[test]
    fn test_bad_keys() {
        let mut req = request(MessageType::Plain, b"x");
        req.receiver_public_key = "zz".to_string();
        assert!(matches!(
            NisSigner::default().sign_at(&req, now()),
            Err(SignError::InvalidPublicKey(_))
        ));

        let mut req = request(MessageType::Plain, b"x");
        req.sender_private_key = "1234".to_string();
        assert!(matches!(
            NisSigner::default().sign_at(&req, now()),
            Err(SignError::InvalidPrivateKey(_))
        ));
    }
}
