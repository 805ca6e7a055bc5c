//! Low-level gateway client — `GatewayHttp`.
//!
//! One method per gateway endpoint. Returns the raw response on success
//! (decoding happens in the upload sub-client). Non-2xx statuses go through
//! [`ensure_success`], the shared error mapping for every HTTP call.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::upload::wire::{CleanupBody, UploadBinaryBody, UploadTextBody};
use crate::error::{HttpError, SdkError};
use crate::http::progress::ProgressCallback;
use crate::http::transport::{HttpRequest, HttpResponse, Transport};

/// Low-level HTTP client for the storage gateway.
#[derive(Clone)]
pub struct GatewayHttp {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl GatewayHttp {
    pub fn new(base_url: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Upload ───────────────────────────────────────────────────────────

    pub async fn upload_text(
        &self,
        body: &UploadTextBody,
        progress: Option<ProgressCallback>,
    ) -> Result<HttpResponse, SdkError> {
        let url = format!("{}/upload/text", self.base_url);
        self.post(&url, body, progress).await
    }

    pub async fn upload_binary(
        &self,
        body: &UploadBinaryBody,
        progress: Option<ProgressCallback>,
    ) -> Result<HttpResponse, SdkError> {
        let url = format!("{}/upload/bytes/binary", self.base_url);
        self.post(&url, body, progress).await
    }

    pub async fn cleanup(&self, body: &CleanupBody) -> Result<HttpResponse, SdkError> {
        let url = format!("{}/upload/cleanup", self.base_url);
        self.post(&url, body, None).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn post<B: Serialize>(
        &self,
        url: &str,
        body: &B,
        progress: Option<ProgressCallback>,
    ) -> Result<HttpResponse, SdkError> {
        let bytes = serde_json::to_vec(body)?;
        tracing::debug!(url, body_len = bytes.len(), "POST");
        let request = HttpRequest::json(url, bytes).with_progress(progress);
        let response = self.transport.post(request).await?;
        Ok(ensure_success(response)?)
    }
}

impl std::fmt::Debug for GatewayHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayHttp")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Map a non-2xx response to an [`HttpError`]; pass successes through.
pub fn ensure_success(response: HttpResponse) -> Result<HttpResponse, HttpError> {
    if response.is_success() {
        return Ok(response);
    }

    let status = response.status;
    let body_text = response.text();
    tracing::debug!(status, body = %body_text, "Request failed");

    match status {
        400 => Err(HttpError::BadRequest(body_text)),
        401 | 403 => Err(HttpError::Unauthorized),
        404 => Err(HttpError::NotFound(body_text)),
        500..=599 => Err(HttpError::ServerError {
            status,
            body: body_text,
        }),
        _ => Err(HttpError::UnexpectedStatus {
            status,
            body: body_text,
        }),
    }
}
