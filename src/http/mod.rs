//! HTTP layer — `GatewayHttp`, the `Transport` seam and upload progress.

pub mod client;
pub mod progress;
pub mod transport;

pub use client::{ensure_success, GatewayHttp};
pub use progress::{ProgressCallback, UploadProgress};
#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
pub use transport::{HttpRequest, HttpResponse, Transport, DEFAULT_TIMEOUT};
