//! # Homogeneous List Codec
//!
//! Encodes and decodes ordered sequences of one primitive kind. The wire
//! form is the list category byte, one sub-tag covering every item, an
//! `i32` count, then the items as bare payloads:
//!
//! ```text
//! ListWireFormat := 0x20 u8(subTag) i32(count) ItemPayload*count
//! ```
//!
//! Fixed-width kinds need no per-item framing, so their decode is a simple
//! fixed-stride scan; bigint, decimal, and string items carry their own
//! length prefixes, exactly as in the scalar codec.

use eyre::{ensure, Result};

use crate::codec::scalar;
use crate::codec::wire::{Reader, Writer};
use crate::types::{AttrType, Category, ListValue, ScalarKind};

/// Encodes a tagged list: category byte, sub-tag, count, items.
pub fn encode(w: &mut Writer, value: &ListValue) -> Result<()> {
    ensure!(
        value.len() <= i32::MAX as usize,
        "list has too many items: {}",
        value.len()
    );
    w.put_u8(Category::List.wire_byte());
    w.put_u8(AttrType::list_for(value.kind()).wire_tag());
    w.put_i32(value.len() as i32);

    match value {
        ListValue::Byte(items) => {
            for &item in items {
                w.put_i8(item);
            }
        }
        ListValue::Short(items) => {
            for &item in items {
                w.put_i16(item);
            }
        }
        ListValue::Int(items) => {
            for &item in items {
                w.put_i32(item);
            }
        }
        ListValue::Long(items) => {
            for &item in items {
                w.put_i64(item);
            }
        }
        ListValue::Float(items) => {
            for &item in items {
                w.put_f32(item);
            }
        }
        ListValue::Double(items) => {
            for &item in items {
                w.put_f64(item);
            }
        }
        ListValue::BigInt(items) => {
            for item in items {
                scalar::write_bigint(w, item);
            }
        }
        ListValue::Decimal(items) => {
            for item in items {
                scalar::write_decimal(w, item);
            }
        }
        ListValue::Bool(items) => {
            for &item in items {
                w.put_u8(u8::from(item));
            }
        }
        ListValue::Char(items) => {
            for &item in items {
                scalar::write_char(w, item)?;
            }
        }
        ListValue::Str(items) => {
            for item in items {
                scalar::write_str(w, item);
            }
        }
    }
    Ok(())
}

/// Decodes a tagged list whose category byte was already consumed.
pub fn decode(r: &mut Reader) -> Result<ListValue> {
    let sub_tag = r.read_u8("list sub-tag")?;
    let ty = AttrType::from_wire(Category::List, sub_tag)?;
    let kind = ty
        .scalar_kind()
        .expect("list types always carry a scalar kind");
    let count = r.read_len("list count")?;

    Ok(match kind {
        ScalarKind::Byte => {
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(r.read_i8("byte item")?);
            }
            ListValue::Byte(items)
        }
        ScalarKind::Short => {
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(r.read_i16("short item")?);
            }
            ListValue::Short(items)
        }
        ScalarKind::Int => {
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(r.read_i32("int item")?);
            }
            ListValue::Int(items)
        }
        ScalarKind::Long => {
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(r.read_i64("long item")?);
            }
            ListValue::Long(items)
        }
        ScalarKind::Float => {
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(r.read_f32("float item")?);
            }
            ListValue::Float(items)
        }
        ScalarKind::Double => {
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(r.read_f64("double item")?);
            }
            ListValue::Double(items)
        }
        ScalarKind::BigInt => {
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(scalar::read_bigint(r)?);
            }
            ListValue::BigInt(items)
        }
        ScalarKind::Decimal => {
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(scalar::read_decimal(r)?);
            }
            ListValue::Decimal(items)
        }
        ScalarKind::Bool => {
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(r.read_u8("bool item")? != 0);
            }
            ListValue::Bool(items)
        }
        ScalarKind::Char => {
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(scalar::read_char(r)?);
            }
            ListValue::Char(items)
        }
        ScalarKind::Str => {
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(scalar::read_str(r)?);
            }
            ListValue::Str(items)
        }
    })
}
