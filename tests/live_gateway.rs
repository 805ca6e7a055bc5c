//! Live tests against a real gateway and NIS node.
//!
//! All tests are `#[ignore]` because they require network access. Endpoints
//! come from `STORAGE_GATEWAY_URL` / `STORAGE_NIS_URL` / `STORAGE_NETWORK`
//! (a `.env` file is honoured); the announce test also needs
//! `STORAGE_SENDER_PRIVATE_KEY` and `STORAGE_RECEIVER_PUBLIC_KEY`.
//!
//! Run with:
//! ```bash
//! cargo test -p nem-storage-sdk --test live_gateway -- --ignored
//! ```

use nem_storage_sdk::prelude::*;

fn live_client() -> StorageClient {
    dotenvy::dotenv().ok();
    let config = ClientConfig::from_env().expect("valid STORAGE_* environment");
    StorageClient::builder()
        .config(config)
        .build()
        .expect("client should build")
}

#[tokio::test]
#[ignore]
async fn test_live_upload_text_to_storage_only() {
    let client = live_client();
    let request = UploadTextRequest::new("nem-storage-sdk live test")
        .with_name("live.txt")
        .with_content_type("text/plain")
        .with_keywords("test");

    let hash = client
        .uploads()
        .upload_text_to_storage_only(&request)
        .await
        .expect("upload should succeed");

    assert!(!hash.hash.is_empty());
    assert!(!hash.digest.is_empty());
    assert_eq!(hash.name.as_deref(), Some("live.txt"));
}

#[tokio::test]
#[ignore]
async fn test_live_upload_binary_to_storage_only() {
    let client = live_client();
    let request = UploadBinaryRequest::new(b"\x00\x01\x02 live bytes".to_vec()).with_name("live.bin");

    let hash = client
        .uploads()
        .upload_binary_to_storage_only(&request)
        .await
        .expect("upload should succeed");

    assert!(!hash.hash.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_live_upload_text_and_announce() {
    let client = live_client();
    let sender = std::env::var("STORAGE_SENDER_PRIVATE_KEY").expect("STORAGE_SENDER_PRIVATE_KEY");
    let receiver = std::env::var("STORAGE_RECEIVER_PUBLIC_KEY").expect("STORAGE_RECEIVER_PUBLIC_KEY");

    let request = UploadTextRequest::new("nem-storage-sdk announce test").with_keys(sender, receiver);
    let result = client
        .uploads()
        .upload_text(&request)
        .await
        .expect("upload and announce should complete");

    println!("{} {}: {}", result.result_type, result.code, result.meaning());
    assert_eq!(result.result_type, AnnounceResultType::Validation);
}
