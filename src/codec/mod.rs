//! # Attribute Value Codec
//!
//! This module converts typed attribute values to their compact binary form
//! and back. It is organized by wire category, with a shared reader/writer
//! layer underneath:
//!
//! - `wire`: big-endian buffer primitives with hardened length handling
//! - `scalar`: the eleven primitive kinds
//! - `list`: homogeneous sequences of one primitive kind
//! - `dynamic`: interval-indexed time-varying values
//! - `row`: whole-row and bare-values orchestration
//!
//! The public entry points are the row-level functions re-exported here;
//! the per-category `encode`/`decode` pairs are available for callers that
//! already hold a framed buffer.

pub mod dynamic;
pub mod list;
pub mod row;
pub mod scalar;
pub mod wire;

#[cfg(test)]
mod tests;

pub use row::{
    decode_row, decode_value, decode_values, encode_row, encode_value, encode_values, RowEntry,
};
pub use wire::{Reader, Writer};
