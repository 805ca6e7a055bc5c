//! Upload domain — request records, validation, wire bodies.

pub mod client;
pub mod wire;

use crate::domain::transaction::MessageType;
use crate::error::SdkError;

// ─── Requests ────────────────────────────────────────────────────────────────

/// Upload a UTF-8 text payload.
///
/// ```rust,ignore
/// let request = UploadTextRequest::new("hello world")
///     .with_name("hello.txt")
///     .with_content_type("text/plain")
///     .with_metadata(r#"{"author":"alice"}"#)
///     .with_keys(sender_private_key, receiver_public_key);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadTextRequest {
    pub text: String,
    pub content_type: Option<String>,
    pub encoding: Option<String>,
    pub name: Option<String>,
    pub keywords: Option<String>,
    /// Must be JSON text when present.
    pub metadata: Option<String>,
    pub sender_private_key: Option<String>,
    pub receiver_public_key: Option<String>,
    pub message_type: MessageType,
}

impl UploadTextRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    pub fn with_keys(
        mut self,
        sender_private_key: impl Into<String>,
        receiver_public_key: impl Into<String>,
    ) -> Self {
        self.sender_private_key = Some(sender_private_key.into());
        self.receiver_public_key = Some(receiver_public_key.into());
        self
    }

    pub fn with_message_type(mut self, message_type: MessageType) -> Self {
        self.message_type = message_type;
        self
    }

    /// Checks required for every upload.
    pub fn validate(&self) -> Result<(), SdkError> {
        if self.text.is_empty() {
            return Err(SdkError::Validation("text is required".to_string()));
        }
        validate_metadata(self.metadata.as_deref())
    }

    /// Checks required before an upload that is followed by an announce.
    pub fn announce_keys(&self) -> Result<AnnounceKeys, SdkError> {
        AnnounceKeys::from_options(
            self.sender_private_key.as_deref(),
            self.receiver_public_key.as_deref(),
            self.message_type,
        )
    }
}

/// Upload a binary payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadBinaryRequest {
    pub data: Vec<u8>,
    pub content_type: Option<String>,
    pub name: Option<String>,
    pub keywords: Option<String>,
    /// Must be JSON text when present.
    pub metadata: Option<String>,
    pub sender_private_key: Option<String>,
    pub receiver_public_key: Option<String>,
    pub message_type: MessageType,
}

impl UploadBinaryRequest {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            ..Default::default()
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    pub fn with_keys(
        mut self,
        sender_private_key: impl Into<String>,
        receiver_public_key: impl Into<String>,
    ) -> Self {
        self.sender_private_key = Some(sender_private_key.into());
        self.receiver_public_key = Some(receiver_public_key.into());
        self
    }

    pub fn with_message_type(mut self, message_type: MessageType) -> Self {
        self.message_type = message_type;
        self
    }

    pub fn validate(&self) -> Result<(), SdkError> {
        if self.data.is_empty() {
            return Err(SdkError::Validation("data is required".to_string()));
        }
        validate_metadata(self.metadata.as_deref())
    }

    pub fn announce_keys(&self) -> Result<AnnounceKeys, SdkError> {
        AnnounceKeys::from_options(
            self.sender_private_key.as_deref(),
            self.receiver_public_key.as_deref(),
            self.message_type,
        )
    }
}

// ─── Announce keys ───────────────────────────────────────────────────────────

/// Key material checked up front so a bad key never costs an upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnounceKeys {
    pub sender_private_key: String,
    pub receiver_public_key: String,
    pub message_type: MessageType,
}

impl AnnounceKeys {
    fn from_options(
        sender_private_key: Option<&str>,
        receiver_public_key: Option<&str>,
        message_type: MessageType,
    ) -> Result<Self, SdkError> {
        let sender = sender_private_key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| SdkError::Validation("sender_private_key is required".to_string()))?;
        let receiver = receiver_public_key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| SdkError::Validation("receiver_public_key is required".to_string()))?;

        validate_key_hex(sender, "sender_private_key", true)?;
        validate_key_hex(receiver, "receiver_public_key", false)?;

        Ok(Self {
            sender_private_key: sender.to_string(),
            receiver_public_key: receiver.to_string(),
            message_type,
        })
    }
}

// ─── Validation helpers ──────────────────────────────────────────────────────

fn validate_metadata(metadata: Option<&str>) -> Result<(), SdkError> {
    if let Some(metadata) = metadata {
        serde_json::from_str::<serde_json::Value>(metadata)
            .map_err(|e| SdkError::Validation(format!("metadata is not valid JSON: {}", e)))?;
    }
    Ok(())
}

/// 32-byte keys are 64 hex chars. NIS1 private keys may carry a `00` sign prefix.
fn validate_key_hex(value: &str, field_name: &str, allow_sign_prefix: bool) -> Result<(), SdkError> {
    let stripped = match value.len() {
        66 if allow_sign_prefix && value.starts_with("00") => &value[2..],
        _ => value,
    };
    if stripped.len() != 64 {
        return Err(SdkError::Validation(format!(
            "{} must be 64 hex characters, got {}",
            field_name,
            value.len()
        )));
    }
    hex::decode(stripped)
        .map_err(|_| SdkError::Validation(format!("{} must contain only hex characters", field_name)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIVATE_KEY: &str = "575dbb3062267eff57c970a336ebbc8fbcfe12c5bd3ed7bc11eb0481d7704ced";
    const PUBLIC_KEY: &str = "c5f54ba980fcbb657dbaaa42700539b207873e134d2375efeab5f1ab52f87844";

    #[test]
    fn test_text_required() {
        let err = UploadTextRequest::new("").validate().unwrap_err();
        assert!(matches!(err, SdkError::Validation(msg) if msg == "text is required"));
    }

    #[test]
    fn test_data_required() {
        let err = UploadBinaryRequest::new(Vec::new()).validate().unwrap_err();
        assert!(matches!(err, SdkError::Validation(msg) if msg == "data is required"));
    }

    #[test]
    fn test_metadata_must_be_json() {
        let err = UploadTextRequest::new("hello")
            .with_metadata("author=alice")
            .validate()
            .unwrap_err();
        assert!(matches!(err, SdkError::Validation(msg) if msg.starts_with("metadata is not valid JSON")));

        assert!(UploadTextRequest::new("hello")
            .with_metadata(r#"{"author":"alice"}"#)
            .validate()
            .is_ok());
        assert!(UploadBinaryRequest::new(vec![1, 2, 3])
            .with_metadata("{")
            .validate()
            .is_err());
    }

    #[test]
    fn test_metadata_optional() {
        assert!(UploadTextRequest::new("hello").validate().is_ok());
    }

    #[test]
    fn test_announce_keys_required() {
        let err = UploadTextRequest::new("hello").announce_keys().unwrap_err();
        assert!(matches!(err, SdkError::Validation(msg) if msg == "sender_private_key is required"));

        let err = UploadTextRequest {
            sender_private_key: Some(PRIVATE_KEY.to_string()),
            ..UploadTextRequest::new("hello")
        }
        .announce_keys()
        .unwrap_err();
        assert!(matches!(err, SdkError::Validation(msg) if msg == "receiver_public_key is required"));
    }

    #[test]
    fn test_announce_keys_must_be_hex() {
        let err = UploadBinaryRequest::new(vec![1])
            .with_keys("zz", PUBLIC_KEY)
            .announce_keys()
            .unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));

        let bad_hex = "g".repeat(64);
        let err = UploadBinaryRequest::new(vec![1])
            .with_keys(PRIVATE_KEY, bad_hex)
            .announce_keys()
            .unwrap_err();
        assert!(matches!(err, SdkError::Validation(msg) if msg.contains("hex characters")));
    }

    #[test]
    fn test_announce_keys_accepts_sign_prefix() {
        let keys = UploadTextRequest::new("hello")
            .with_keys(format!("00{}", PRIVATE_KEY), PUBLIC_KEY)
            .with_message_type(MessageType::Plain)
            .announce_keys()
            .unwrap();
        assert_eq!(keys.receiver_public_key, PUBLIC_KEY);
        assert_eq!(keys.message_type, MessageType::Plain);
    }
}
