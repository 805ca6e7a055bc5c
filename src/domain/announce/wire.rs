//! Wire types for NIS announce responses.

use serde::{Deserialize, Serialize};

/// `{ "data": "<hex>" }` hash wrapper used by NIS.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashData {
    #[serde(default)]
    pub data: Option<String>,
}

/// Raw `NemAnnounceResult` as returned by `POST /transaction/announce`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NemAnnounceResultResponse {
    #[serde(rename = "type")]
    pub result_type: u32,
    pub code: u32,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub transaction_hash: Option<HashData>,
    #[serde(default)]
    pub inner_transaction_hash: Option<HashData>,
}
