//! Transport seam — the only place that touches the network.

use async_trait::async_trait;
#[cfg(feature = "http")]
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
#[cfg(feature = "http")]
use reqwest::Client;
use std::time::Duration;

use crate::error::HttpError;
use crate::http::progress::ProgressCallback;
#[cfg(feature = "http")]
use crate::http::progress::UploadProgress;

/// Upload bodies are streamed in chunks of this size so progress can be reported.
pub const PROGRESS_CHUNK_SIZE: usize = 16 * 1024;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// An outgoing POST.
#[derive(Clone)]
pub struct HttpRequest {
    pub url: String,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    pub progress: Option<ProgressCallback>,
}

impl HttpRequest {
    pub fn json(url: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            url: url.into(),
            content_type: "application/json",
            body,
            progress: None,
        }
    }

    pub fn with_progress(mut self, progress: Option<ProgressCallback>) -> Self {
        self.progress = progress;
        self
    }
}

impl std::fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRequest")
            .field("url", &self.url)
            .field("content_type", &self.content_type)
            .field("body_len", &self.body.len())
            .field("progress", &self.progress.is_some())
            .finish()
    }
}

/// The full response: status, headers and raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends POST requests. Non-2xx statuses are returned, not turned into errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

/// `reqwest`-backed transport.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

#[cfg(feature = "http")]
impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl Transport for ReqwestTransport {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let total = request.body.len() as u64;

        let body = match request.progress {
            Some(progress) => {
                let chunks: Vec<Vec<u8>> = request
                    .body
                    .chunks(PROGRESS_CHUNK_SIZE)
                    .map(<[u8]>::to_vec)
                    .collect();
                let stream = async_stream::stream! {
                    let mut loaded = 0u64;
                    for chunk in chunks {
                        loaded += chunk.len() as u64;
                        yield Ok::<Vec<u8>, std::io::Error>(chunk);
                        progress(UploadProgress { loaded, total: Some(total) });
                    }
                };
                reqwest::Body::wrap_stream(stream)
            }
            None => reqwest::Body::from(request.body),
        };

        let resp = self
            .client
            .post(&request.url)
            .header(CONTENT_TYPE, request.content_type)
            .header(CONTENT_LENGTH, total)
            .body(body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let headers = resp
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.to_string(), v.to_string())))
            .collect();
        let body = resp.bytes().await?.to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
