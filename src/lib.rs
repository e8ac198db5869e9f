//! # attrstore - Typed Attribute Value Serialization
//!
//! This crate is the serialization codec for an attribute store: it converts a
//! heterogeneous, per-column-typed row of attribute values into a compact
//! binary representation and back. Three shapes of value are supported:
//!
//! - **Primitive scalars**: eleven kinds, from fixed-width integers and floats
//!   to arbitrary-precision integers/decimals and strings
//! - **Lists**: homogeneous ordered sequences of one primitive kind
//! - **Dynamic values**: time-varying values represented as an ordered list of
//!   real-number intervals, each carrying an optional payload
//!
//! ## Wire Layout
//!
//! Every encoded value starts with a one-byte category tag, then a one-byte
//! sub-tag identifying the concrete type, then the payload. All multi-byte
//! integers are big-endian.
//!
//! ```text
//! RowWireFormat    := i32(entryCount) Entry*
//! Entry            := i32(columnIndex) TaggedValue
//! ValuesWireFormat := i32(entryCount) TaggedValue*
//! TaggedValue      := u8(category) u8(subTag) Payload
//! ```
//!
//! | Category | Byte | Payload |
//! |----------|------|---------|
//! | Primitive | 0x10 | fixed-width bytes, or `[i32 len][bytes]` for bigint/decimal/string |
//! | List | 0x20 | `[i32 count]` then `count` bare item payloads |
//! | Dynamic | 0x40 | `[i32 count]` then per interval `[u8 flags][f64 low][f64 high][payload]` |
//!
//! ## Design Goals
//!
//! 1. **Self-describing wire**: decode needs no external column model
//! 2. **Pure transforms**: no retained state, no partial output on failure
//! 3. **Hardened decode**: negative/oversized lengths and truncated buffers
//!    are errors, never panics or undefined behavior
//!
//! ## Quick Start
//!
//! ```ignore
//! use attrstore::codec::{encode_row, decode_row, RowEntry};
//! use attrstore::types::{AttrValue, ScalarValue};
//!
//! let row = vec![
//!     RowEntry { column: 0, value: AttrValue::Scalar(ScalarValue::Int(42)) },
//!     RowEntry { column: 3, value: AttrValue::Scalar(ScalarValue::Str("hi".into())) },
//! ];
//! let bytes = encode_row(&row)?;
//! let decoded = decode_row(&bytes)?;
//! assert_eq!(row, decoded);
//! ```
//!
//! ## Concurrency
//!
//! Every encode/decode call is synchronous, side-effect-free, and operates
//! only on caller-owned buffers. There is no shared mutable state anywhere in
//! the crate; concurrent calls need no coordination.
//!
//! ## Module Overview
//!
//! - [`types`]: logical type registry and in-memory value model
//! - [`codec`]: wire reader/writer and the per-category codecs

pub mod codec;
pub mod types;

pub use codec::{
    decode_row, decode_value, decode_values, encode_row, encode_value, encode_values, RowEntry,
};
pub use types::{AttrType, AttrValue, Category, Interval, ScalarKind, ScalarValue};
