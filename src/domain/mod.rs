//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching gateway / NIS bodies
//! - `convert.rs` — `From` conversions from wire types
//! - `client.rs` — Sub-client with HTTP methods

pub mod announce;
pub mod resource_hash;
pub mod transaction;
pub mod upload;
