//! Mock collaborators shared by the integration tests.
//!
//! Every mock appends to one [`CallLog`] so tests can assert ordering across
//! transport, signer and announcer.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use nem_storage_sdk::prelude::*;

pub const PRIVATE_KEY: &str = "575dbb3062267eff57c970a336ebbc8fbcfe12c5bd3ed7bc11eb0481d7704ced";
pub const PUBLIC_KEY: &str = "c5f54ba980fcbb657dbaaa42700539b207873e134d2375efeab5f1ab52f87844";

// ─── Call log ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.entries().iter().filter(|e| e.starts_with(prefix)).count()
    }
}

// ─── Transport ───────────────────────────────────────────────────────────────

/// Replays queued responses and records each request.
pub struct MockTransport {
    log: CallLog,
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    pub requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(self, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.into(),
        }));
        self
    }

    pub fn with_error(self, error: HttpError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn last_body_json(&self) -> serde_json::Value {
        let requests = self.requests.lock().unwrap();
        let last = requests.last().expect("no request recorded");
        serde_json::from_slice(&last.body).unwrap()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.log.push(format!("post {}", request.url));
        if let Some(progress) = &request.progress {
            let total = request.body.len() as u64;
            let half = total / 2;
            progress(UploadProgress { loaded: half, total: Some(total) });
            progress(UploadProgress { loaded: total, total: Some(total) });
        }
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::Transport("no response queued".to_string())))
    }
}

// ─── Signer / announcer ──────────────────────────────────────────────────────

pub struct MockSigner {
    log: CallLog,
    fail: bool,
    plain_only: bool,
    pub requests: Mutex<Vec<SignRequest>>,
}

impl MockSigner {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            fail: false,
            plain_only: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(log: &CallLog) -> Self {
        Self {
            fail: true,
            ..Self::new(log)
        }
    }

    /// Declines `MessageType::Secure`.
    pub fn plain_only(log: &CallLog) -> Self {
        Self {
            plain_only: true,
            ..Self::new(log)
        }
    }
}

impl TransactionSigner for MockSigner {
    fn sign(&self, request: &SignRequest) -> Result<SignedTransaction, SignError> {
        self.log.push("sign");
        self.requests.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(SignError::InvalidPrivateKey("rejected by mock".to_string()));
        }
        Ok(SignedTransaction::new(&request.payload, &[0u8; 64]))
    }

    fn supports_message_type(&self, message_type: MessageType) -> bool {
        !(self.plain_only && message_type == MessageType::Secure)
    }
}

pub struct MockAnnouncer {
    log: CallLog,
    result: NemAnnounceResult,
}

impl MockAnnouncer {
    pub fn new(log: &CallLog, result_type: AnnounceResultType, code: u32) -> Self {
        Self {
            log: log.clone(),
            result: NemAnnounceResult {
                result_type,
                code,
                message: String::new(),
                transaction_hash: Some("deadbeef".to_string()),
                inner_transaction_hash: None,
            },
        }
    }

    pub fn success(log: &CallLog) -> Self {
        Self::new(log, AnnounceResultType::Validation, 1)
    }
}

#[async_trait]
impl TransactionAnnouncer for MockAnnouncer {
    async fn announce(&self, _signed: &SignedTransaction) -> Result<NemAnnounceResult, SdkError> {
        self.log.push("announce");
        Ok(self.result.clone())
    }
}

// ─── Fixtures ────────────────────────────────────────────────────────────────

pub fn sample_resource_hash() -> ResourceHashMessage {
    ResourceHashMessage {
        digest: "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9".to_string(),
        hash: "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG".to_string(),
        keywords: Some("greeting".to_string()),
        name: Some("hello.txt".to_string()),
        timestamp: 1_530_000_000_000,
        content_type: Some("text/plain".to_string()),
        metadata: None,
    }
}

/// Gateway success body for `message`: base64 of the bincode record.
pub fn gateway_body(message: &ResourceHashMessage) -> Vec<u8> {
    nem_storage_sdk::domain::resource_hash::encode_response_body(message, &BincodeCodec)
        .unwrap()
        .into_bytes()
}

pub fn client(
    transport: MockTransport,
    signer: MockSigner,
    announcer: MockAnnouncer,
) -> (StorageClient, Arc<MockTransport>, Arc<MockSigner>) {
    let transport = Arc::new(transport);
    let signer = Arc::new(signer);
    let client = StorageClient::builder()
        .base_url("https://gateway.test")
        .transport(transport.clone())
        .signer(signer.clone())
        .announcer(Arc::new(announcer))
        .build()
        .unwrap();
    (client, transport, signer)
}
