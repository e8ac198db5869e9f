//! # Primitive Scalar Codec
//!
//! Encodes and decodes single scalar values. Two forms exist:
//!
//! - the **tagged** form ([`encode`]/[`decode`]), which frames the payload
//!   with the primitive category byte and the kind's sub-tag, used when a
//!   scalar stands alone in a row
//! - the **bare payload** form ([`write_payload`]/[`read_payload`]), reused
//!   by the list and dynamic codecs for their items, whose sub-tag covers
//!   all items at once
//!
//! ## Payload Formats
//!
//! | Kind | Bytes |
//! |------|-------|
//! | byte / bool | 1 |
//! | short / char | 2 |
//! | int / float | 4 |
//! | long / double | 8 |
//! | bigint | `[i32 len][len bytes]` minimal two's-complement big-endian |
//! | decimal | `[i32 scale][i32 len][len bytes]` |
//! | string | `[i32 len][len UTF-8 bytes]` |
//!
//! Strings are always UTF-8 on the wire. A char is carried as one UTF-16
//! code unit, so encoding rejects code points outside the basic multilingual
//! plane and decoding rejects surrogate code units.

use eyre::{bail, Result};
use num_bigint::BigInt;

use crate::codec::wire::{Reader, Writer};
use crate::types::{AttrType, Category, Decimal, ScalarKind, ScalarValue};

/// Encodes a tagged scalar: category byte, sub-tag, payload.
pub fn encode(w: &mut Writer, value: &ScalarValue) -> Result<()> {
    w.put_u8(Category::Primitive.wire_byte());
    w.put_u8(AttrType::primitive_for(value.kind()).wire_tag());
    write_payload(w, value)
}

/// Decodes a tagged scalar whose category byte was already consumed.
pub fn decode(r: &mut Reader) -> Result<ScalarValue> {
    let sub_tag = r.read_u8("primitive sub-tag")?;
    let ty = AttrType::from_wire(Category::Primitive, sub_tag)?;
    let kind = ty
        .scalar_kind()
        .expect("primitive types always carry a scalar kind");
    read_payload(r, kind)
}

/// Writes a scalar payload without any tag bytes.
pub(crate) fn write_payload(w: &mut Writer, value: &ScalarValue) -> Result<()> {
    match value {
        ScalarValue::Byte(v) => w.put_i8(*v),
        ScalarValue::Short(v) => w.put_i16(*v),
        ScalarValue::Int(v) => w.put_i32(*v),
        ScalarValue::Long(v) => w.put_i64(*v),
        ScalarValue::Float(v) => w.put_f32(*v),
        ScalarValue::Double(v) => w.put_f64(*v),
        ScalarValue::BigInt(v) => write_bigint(w, v),
        ScalarValue::Decimal(v) => write_decimal(w, v),
        ScalarValue::Bool(v) => w.put_u8(u8::from(*v)),
        ScalarValue::Char(v) => write_char(w, *v)?,
        ScalarValue::Str(v) => write_str(w, v),
    }
    Ok(())
}

/// Reads a scalar payload of a known kind without any tag bytes.
pub(crate) fn read_payload(r: &mut Reader, kind: ScalarKind) -> Result<ScalarValue> {
    Ok(match kind {
        ScalarKind::Byte => ScalarValue::Byte(r.read_i8("byte value")?),
        ScalarKind::Short => ScalarValue::Short(r.read_i16("short value")?),
        ScalarKind::Int => ScalarValue::Int(r.read_i32("int value")?),
        ScalarKind::Long => ScalarValue::Long(r.read_i64("long value")?),
        ScalarKind::Float => ScalarValue::Float(r.read_f32("float value")?),
        ScalarKind::Double => ScalarValue::Double(r.read_f64("double value")?),
        ScalarKind::BigInt => ScalarValue::BigInt(read_bigint(r)?),
        ScalarKind::Decimal => ScalarValue::Decimal(read_decimal(r)?),
        ScalarKind::Bool => ScalarValue::Bool(r.read_u8("bool value")? != 0),
        ScalarKind::Char => ScalarValue::Char(read_char(r)?),
        ScalarKind::Str => ScalarValue::Str(read_str(r)?),
    })
}

/// Writes `[i32 len][minimal two's-complement big-endian bytes]`.
pub(crate) fn write_bigint(w: &mut Writer, value: &BigInt) {
    let bytes = value.to_signed_bytes_be();
    w.put_i32(bytes.len() as i32);
    w.put_bytes(&bytes);
}

pub(crate) fn read_bigint(r: &mut Reader) -> Result<BigInt> {
    let len = r.read_len("bigint length")?;
    let bytes = r.take(len, "bigint bytes")?;
    // An empty byte run decodes to zero.
    Ok(BigInt::from_signed_bytes_be(bytes))
}

/// Writes `[i32 scale]` followed by the unscaled integer's bigint encoding.
pub(crate) fn write_decimal(w: &mut Writer, value: &Decimal) {
    w.put_i32(value.scale);
    write_bigint(w, &value.unscaled);
}

pub(crate) fn read_decimal(r: &mut Reader) -> Result<Decimal> {
    let scale = r.read_i32("decimal scale")?;
    let unscaled = read_bigint(r)?;
    Ok(Decimal { unscaled, scale })
}

/// Writes one UTF-16 code unit.
pub(crate) fn write_char(w: &mut Writer, value: char) -> Result<()> {
    let code = value as u32;
    if code > u16::MAX as u32 {
        bail!(
            "char U+{:04X} is outside the basic multilingual plane and cannot \
             be encoded as a single UTF-16 code unit",
            code
        );
    }
    w.put_u16(code as u16);
    Ok(())
}

pub(crate) fn read_char(r: &mut Reader) -> Result<char> {
    let unit = r.read_u16("char code unit")?;
    match char::from_u32(unit as u32) {
        Some(c) => Ok(c),
        None => bail!("invalid char code unit: 0x{:04X} is a surrogate", unit),
    }
}

/// Writes `[i32 len][UTF-8 bytes]`.
pub(crate) fn write_str(w: &mut Writer, value: &str) {
    w.put_i32(value.len() as i32);
    w.put_bytes(value.as_bytes());
}

pub(crate) fn read_str(r: &mut Reader) -> Result<String> {
    let len = r.read_len("string length")?;
    let bytes = r.take(len, "string bytes")?;
    match std::str::from_utf8(bytes) {
        Ok(s) => Ok(s.to_string()),
        Err(e) => bail!("invalid UTF-8 in string payload: {}", e),
    }
}
