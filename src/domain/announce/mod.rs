//! Announce domain — the result of submitting a transaction to a NIS node.
//!
//! A [`NemAnnounceResult`] pairs a result type with a code whose meaning
//! depends on the type. Callers branch on the pair, so the tables below
//! mirror the NIS documentation exactly:
//!
//! | type | codes |
//! |------|-------|
//! | Validation (1) | 0..=19, see [`ValidationCode`] |
//! | HeartBeat (2) | 1 = success |
//! | Status (4) | 0..=8, see [`NodeStatus`] |

mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Result type ─────────────────────────────────────────────────────────────

/// Kind of announce result. Unknown values are preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum AnnounceResultType {
    Validation,
    HeartBeat,
    Status,
    Unknown(u32),
}

impl From<u32> for AnnounceResultType {
    fn from(value: u32) -> Self {
        match value {
            1 => Self::Validation,
            2 => Self::HeartBeat,
            4 => Self::Status,
            other => Self::Unknown(other),
        }
    }
}

impl From<AnnounceResultType> for u32 {
    fn from(result_type: AnnounceResultType) -> Self {
        match result_type {
            AnnounceResultType::Validation => 1,
            AnnounceResultType::HeartBeat => 2,
            AnnounceResultType::Status => 4,
            AnnounceResultType::Unknown(other) => other,
        }
    }
}

impl fmt::Display for AnnounceResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::HeartBeat => write!(f, "heartbeat"),
            Self::Status => write!(f, "status"),
            Self::Unknown(v) => write!(f, "unknown({})", v),
        }
    }
}

// ─── Validation codes ────────────────────────────────────────────────────────

/// Codes reported with [`AnnounceResultType::Validation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ValidationCode {
    Neutral = 0,
    Success = 1,
    Failure = 2,
    PastDeadline = 3,
    FutureDeadline = 4,
    InsufficientBalance = 5,
    MessageTooLarge = 6,
    TransactionHashExists = 7,
    InvalidSignature = 8,
    TimestampTooFarInPast = 9,
    TimestampTooFarInFuture = 10,
    EntityUnusable = 11,
    ChainScoreInferior = 12,
    ChainInvalid = 13,
    ConflictingImportanceTransfer = 14,
    TooManyTransactions = 15,
    SelfSignedTransaction = 16,
    ConflictingTransaction = 17,
    AccountAlreadyActive = 18,
    AccountNotActive = 19,
}

impl ValidationCode {
    pub fn from_code(code: u32) -> Option<Self> {
        use ValidationCode::*;
        let value = match code {
            0 => Neutral,
            1 => Success,
            2 => Failure,
            3 => PastDeadline,
            4 => FutureDeadline,
            5 => InsufficientBalance,
            6 => MessageTooLarge,
            7 => TransactionHashExists,
            8 => InvalidSignature,
            9 => TimestampTooFarInPast,
            10 => TimestampTooFarInFuture,
            11 => EntityUnusable,
            12 => ChainScoreInferior,
            13 => ChainInvalid,
            14 => ConflictingImportanceTransfer,
            15 => TooManyTransactions,
            16 => SelfSignedTransaction,
            17 => ConflictingTransaction,
            18 => AccountAlreadyActive,
            19 => AccountNotActive,
            _ => return None,
        };
        Some(value)
    }

    pub fn description(&self) -> &'static str {
        use ValidationCode::*;
        match self {
            Neutral => "neutral: validation result is neither success nor failure",
            Success => "success",
            Failure => "unknown failure",
            PastDeadline => "transaction deadline has already passed",
            FutureDeadline => "transaction deadline is too far in the future",
            InsufficientBalance => "insufficient balance",
            MessageTooLarge => "message is too large",
            TransactionHashExists => "transaction hash already exists",
            InvalidSignature => "invalid signature",
            TimestampTooFarInPast => "timestamp is too far in the past",
            TimestampTooFarInFuture => "timestamp is too far in the future",
            EntityUnusable => "entity is unusable",
            ChainScoreInferior => "chain score is inferior",
            ChainInvalid => "chain could not be validated",
            ConflictingImportanceTransfer => "conflicting importance transfer detected",
            TooManyTransactions => "too many transactions in block",
            SelfSignedTransaction => "block contains a transaction signed by the harvester",
            ConflictingTransaction => "conflicting prior transaction",
            AccountAlreadyActive => "importance transfer activation attempted while already active",
            AccountNotActive => "importance transfer deactivation attempted but not active",
        }
    }
}

// ─── Node status codes ───────────────────────────────────────────────────────

/// Codes reported with [`AnnounceResultType::Status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum NodeStatus {
    Unknown = 0,
    Stopped = 1,
    Starting = 2,
    Running = 3,
    Booting = 4,
    Booted = 5,
    Synchronized = 6,
    NoRemoteNisAvailable = 7,
    LoadingChain = 8,
}

impl NodeStatus {
    pub fn from_code(code: u32) -> Option<Self> {
        use NodeStatus::*;
        let value = match code {
            0 => Unknown,
            1 => Stopped,
            2 => Starting,
            3 => Running,
            4 => Booting,
            5 => Booted,
            6 => Synchronized,
            7 => NoRemoteNisAvailable,
            8 => LoadingChain,
            _ => return None,
        };
        Some(value)
    }

    pub fn description(&self) -> &'static str {
        use NodeStatus::*;
        match self {
            Unknown => "unknown status",
            Stopped => "NIS is stopped",
            Starting => "NIS is starting",
            Running => "NIS is running",
            Booting => "NIS is booting the local node",
            Booted => "local node is booted",
            Synchronized => "local node is synchronized",
            NoRemoteNisAvailable => "no remote NIS is available",
            LoadingChain => "NIS is loading the block chain",
        }
    }
}

/// Only heartbeat code defined by NIS.
pub const HEARTBEAT_OK: u32 = 1;

// ─── NemAnnounceResult ───────────────────────────────────────────────────────

/// Result of announcing a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NemAnnounceResult {
    pub result_type: AnnounceResultType,
    pub code: u32,
    pub message: String,
    pub transaction_hash: Option<String>,
    /// Inner hash for multisig / aggregate transactions.
    pub inner_transaction_hash: Option<String>,
}

impl NemAnnounceResult {
    pub fn validation_code(&self) -> Option<ValidationCode> {
        match self.result_type {
            AnnounceResultType::Validation => ValidationCode::from_code(self.code),
            _ => None,
        }
    }

    pub fn node_status(&self) -> Option<NodeStatus> {
        match self.result_type {
            AnnounceResultType::Status => NodeStatus::from_code(self.code),
            _ => None,
        }
    }

    /// Documented meaning of the (type, code) pair.
    pub fn meaning(&self) -> &'static str {
        match self.result_type {
            AnnounceResultType::Validation => self
                .validation_code()
                .map(|c| c.description())
                .unwrap_or("undocumented validation code"),
            AnnounceResultType::HeartBeat if self.code == HEARTBEAT_OK => "heartbeat successful",
            AnnounceResultType::HeartBeat => "undocumented heartbeat code",
            AnnounceResultType::Status => self
                .node_status()
                .map(|s| s.description())
                .unwrap_or("undocumented status code"),
            AnnounceResultType::Unknown(_) => "undocumented result type",
        }
    }

    /// Whether the node accepted the transaction (or heartbeat).
    pub fn is_success(&self) -> bool {
        matches!(
            (self.result_type, self.code),
            (AnnounceResultType::Validation, 1) | (AnnounceResultType::HeartBeat, HEARTBEAT_OK)
        )
    }
}
