//! Conversions: NIS wire types → announce domain types.

use super::wire::{HashData, NemAnnounceResultResponse};
use super::NemAnnounceResult;

fn non_empty(hash: Option<HashData>) -> Option<String> {
    hash.and_then(|h| h.data).filter(|d| !d.is_empty())
}

impl From<NemAnnounceResultResponse> for NemAnnounceResult {
    fn from(resp: NemAnnounceResultResponse) -> Self {
        NemAnnounceResult {
            result_type: resp.result_type.into(),
            code: resp.code,
            message: resp.message,
            transaction_hash: non_empty(resp.transaction_hash),
            inner_transaction_hash: non_empty(resp.inner_transaction_hash),
        }
    }
}
