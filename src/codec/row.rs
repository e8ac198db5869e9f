//! # Row and Values Codec
//!
//! Orchestrates the three sub-codecs to serialize a full row to a single
//! buffer and back. Two sibling wire formats exist:
//!
//! - **Row format**: `[i32 entryCount]` then per entry
//!   `[i32 columnIndex][tagged value]` - used when a row is keyed by
//!   explicit column indices
//! - **Bare values format**: `[i32 entryCount]` then per entry
//!   `[tagged value]` - used when column identity is implicit positional
//!   order and the caller maps the Nth value to the Nth known column
//!
//! Entry ordering on the wire is caller order; entries are never sorted by
//! column index. Decoding is a straight-line loop with a per-entry category
//! dispatch; there is no backtracking or nested framing beyond the fixed
//! category -> sub-tag -> payload structure.
//!
//! ## Failure Semantics
//!
//! A row either fully encodes/decodes or the whole call fails. Encoding
//! targets a fresh in-memory writer that is discarded on failure, so no
//! partial output is observable. Decode errors are wrapped with the failing
//! entry's position so callers see a single error carrying the root cause.
//! Trailing bytes after the last entry are left unread, matching the stream
//! semantics of the backing store.

use eyre::{ensure, Result, WrapErr};

use crate::codec::wire::{Reader, Writer};
use crate::codec::{dynamic, list, scalar};
use crate::types::{AttrValue, Category};

/// One row entry: a value tagged with its owning column's index.
#[derive(Debug, Clone, PartialEq)]
pub struct RowEntry {
    pub column: i32,
    pub value: AttrValue,
}

fn write_tagged_value(w: &mut Writer, value: &AttrValue) -> Result<()> {
    match value {
        AttrValue::Scalar(v) => scalar::encode(w, v),
        AttrValue::List(v) => list::encode(w, v),
        AttrValue::Dynamic(v) => dynamic::encode(w, v),
    }
}

fn read_tagged_value(r: &mut Reader) -> Result<AttrValue> {
    let category = Category::try_from(r.read_u8("category tag")?)?;
    match category {
        Category::Primitive => Ok(AttrValue::Scalar(scalar::decode(r)?)),
        Category::List => Ok(AttrValue::List(list::decode(r)?)),
        Category::Dynamic => Ok(AttrValue::Dynamic(dynamic::decode(r)?)),
    }
}

/// Encodes a row of (column, value) entries in caller order.
pub fn encode_row(entries: &[RowEntry]) -> Result<Vec<u8>> {
    ensure!(
        entries.len() <= i32::MAX as usize,
        "row has too many entries: {}",
        entries.len()
    );
    let mut w = Writer::new();
    w.put_i32(entries.len() as i32);
    for entry in entries {
        w.put_i32(entry.column);
        write_tagged_value(&mut w, &entry.value)
            .wrap_err_with(|| format!("failed to encode value for column {}", entry.column))?;
    }
    Ok(w.into_bytes())
}

/// Decodes a row, reconstructing entries keyed by the decoded column index.
pub fn decode_row(buf: &[u8]) -> Result<Vec<RowEntry>> {
    let mut r = Reader::new(buf);
    let count = r.read_len("row entry count")?;
    let mut entries = Vec::with_capacity(count);
    for i in 0..count {
        let column = r.read_i32("column index")?;
        let value = read_tagged_value(&mut r)
            .wrap_err_with(|| format!("failed to decode row entry {} (column {})", i, column))?;
        entries.push(RowEntry { column, value });
    }
    Ok(entries)
}

/// Encodes an ordered set of values without column indices.
pub fn encode_values(values: &[AttrValue]) -> Result<Vec<u8>> {
    ensure!(
        values.len() <= i32::MAX as usize,
        "too many values: {}",
        values.len()
    );
    let mut w = Writer::new();
    w.put_i32(values.len() as i32);
    for (i, value) in values.iter().enumerate() {
        write_tagged_value(&mut w, value)
            .wrap_err_with(|| format!("failed to encode value {}", i))?;
    }
    Ok(w.into_bytes())
}

/// Decodes an ordered set of values; the caller maps positions to columns.
pub fn decode_values(buf: &[u8]) -> Result<Vec<AttrValue>> {
    let mut r = Reader::new(buf);
    let count = r.read_len("value count")?;
    let mut values = Vec::with_capacity(count);
    for i in 0..count {
        let value = read_tagged_value(&mut r)
            .wrap_err_with(|| format!("failed to decode value {}", i))?;
        values.push(value);
    }
    Ok(values)
}

/// Encodes a single tagged value to its own buffer.
pub fn encode_value(value: &AttrValue) -> Result<Vec<u8>> {
    let mut w = Writer::new();
    write_tagged_value(&mut w, value)?;
    Ok(w.into_bytes())
}

/// Decodes a single tagged value from the start of `buf`.
pub fn decode_value(buf: &[u8]) -> Result<AttrValue> {
    let mut r = Reader::new(buf);
    read_tagged_value(&mut r)
}
