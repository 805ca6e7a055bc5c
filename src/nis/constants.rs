//! NIS1 protocol constants.
//!
//! Values match the NIS1 transaction format and fee schedule exactly.

/// Unix timestamp (seconds) of the NEM nemesis block: 2015-03-29T00:06:25Z.
pub const NEM_EPOCH_UNIX_SECS: i64 = 1_427_587_585;

// ============================================================================
// Transaction layout
// ============================================================================

/// Transfer transaction type.
pub const TRANSFER_TYPE: u32 = 0x0101;

/// Transfer transaction version (XEM-only transfers).
pub const TRANSFER_VERSION: u8 = 1;

/// Length of a public key in bytes.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Length of an address in base32 characters.
pub const ADDRESS_LEN: usize = 40;

/// Length of a signature in bytes.
pub const SIGNATURE_LEN: usize = 64;

/// Largest message payload NIS accepts.
pub const MAX_MESSAGE_LEN: usize = 1024;

/// Default distance between timestamp and deadline.
pub const DEFAULT_DEADLINE_SECS: u32 = 2 * 60 * 60;

// ============================================================================
// Fees
// ============================================================================

/// Micro-XEM per XEM.
pub const MICRO_XEM_PER_XEM: u64 = 1_000_000;

/// Smallest fee step: 0.05 XEM.
pub const FEE_UNIT: u64 = 50_000;

/// Message fee is `floor(len / MESSAGE_FEE_BLOCK) + 1` units.
pub const MESSAGE_FEE_BLOCK: usize = 32;

/// Transfer fee grows by one unit per this many XEM.
pub const XEM_PER_FEE_UNIT: u64 = 10_000;

/// Transfer fee is capped at this many units.
pub const MAX_TRANSFER_FEE_UNITS: u64 = 25;
