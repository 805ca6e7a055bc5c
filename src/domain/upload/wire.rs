//! Wire bodies for the gateway upload endpoints.
//!
//! Key material never leaves the client: signing happens locally.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use super::{UploadBinaryRequest, UploadTextRequest};

/// Body for `POST /upload/text`. `text` is base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadTextBody {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

impl From<&UploadTextRequest> for UploadTextBody {
    fn from(request: &UploadTextRequest) -> Self {
        Self {
            text: BASE64.encode(request.text.as_bytes()),
            content_type: request.content_type.clone(),
            encoding: request.encoding.clone(),
            name: request.name.clone(),
            keywords: request.keywords.clone(),
            metadata: request.metadata.clone(),
        }
    }
}

/// Body for `POST /upload/bytes/binary`. `data` goes out as a raw byte array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadBinaryBody {
    pub data: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

impl From<&UploadBinaryRequest> for UploadBinaryBody {
    fn from(request: &UploadBinaryRequest) -> Self {
        Self {
            data: request.data.clone(),
            content_type: request.content_type.clone(),
            name: request.name.clone(),
            keywords: request.keywords.clone(),
            metadata: request.metadata.clone(),
        }
    }
}

/// Body for `POST /upload/cleanup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupBody {
    pub multihash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_body_is_base64() {
        let request = UploadTextRequest::new("hello world")
            .with_name("greeting")
            .with_keys("a".repeat(64), "b".repeat(64));
        let body = UploadTextBody::from(&request);
        assert_eq!(body.text, "aGVsbG8gd29ybGQ=");

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["text"], "aGVsbG8gd29ybGQ=");
        assert_eq!(json["name"], "greeting");
        assert!(json.get("contentType").is_none());
        assert!(json.get("senderPrivateKey").is_none());
    }

    #[test]
    fn test_binary_body_is_raw_bytes() {
        let request = UploadBinaryRequest::new(vec![0u8, 1, 255]).with_content_type("application/octet-stream");
        let json = serde_json::to_value(UploadBinaryBody::from(&request)).unwrap();
        assert_eq!(json["data"], serde_json::json!([0, 1, 255]));
        assert_eq!(json["contentType"], "application/octet-stream");
    }
}
