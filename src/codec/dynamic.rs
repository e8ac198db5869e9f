//! # Dynamic (Interval-Indexed) Value Codec
//!
//! Encodes and decodes time-varying values: an ordered run of real-number
//! intervals, each carrying a payload of one primitive kind. The payload-less
//! time-interval variant writes bounds only.
//!
//! ```text
//! DynamicWireFormat := 0x40 u8(subTag) i32(intervalCount) IntervalEntry*count
//! IntervalEntry     := u8(endpointFlags) f64(low) f64(high) [ItemPayload]
//! endpointFlags     := 0x0F low excluded | 0xF0 high excluded
//! ```
//!
//! The codec writes the intervals exactly as given: no sorting, merging,
//! overlap checks, or windowing. A full dynamic value is a timeline of
//! (range, value) steps whose interpretation belongs to the caller.

use eyre::{ensure, Result};

use crate::codec::scalar;
use crate::codec::wire::{Reader, Writer};
use crate::types::{AttrType, Category, DynamicValue, Interval, ScalarKind};

fn write_interval(w: &mut Writer, interval: &Interval) {
    w.put_u8(interval.flags());
    w.put_f64(interval.low);
    w.put_f64(interval.high);
}

fn read_interval(r: &mut Reader) -> Result<Interval> {
    let flags = r.read_u8("endpoint flags")?;
    let low = r.read_f64("interval low bound")?;
    let high = r.read_f64("interval high bound")?;
    Ok(Interval::from_flags(low, high, flags))
}

/// Encodes a tagged dynamic value: category byte, sub-tag, count, intervals.
pub fn encode(w: &mut Writer, value: &DynamicValue) -> Result<()> {
    ensure!(
        value.len() <= i32::MAX as usize,
        "dynamic value has too many intervals: {}",
        value.len()
    );
    w.put_u8(Category::Dynamic.wire_byte());
    let ty = match value.kind() {
        Some(kind) => AttrType::dynamic_for(kind),
        None => AttrType::TimeInterval,
    };
    w.put_u8(ty.wire_tag());
    w.put_i32(value.len() as i32);

    match value {
        DynamicValue::Byte(entries) => {
            for (interval, item) in entries {
                write_interval(w, interval);
                w.put_i8(*item);
            }
        }
        DynamicValue::Short(entries) => {
            for (interval, item) in entries {
                write_interval(w, interval);
                w.put_i16(*item);
            }
        }
        DynamicValue::Int(entries) => {
            for (interval, item) in entries {
                write_interval(w, interval);
                w.put_i32(*item);
            }
        }
        DynamicValue::Long(entries) => {
            for (interval, item) in entries {
                write_interval(w, interval);
                w.put_i64(*item);
            }
        }
        DynamicValue::Float(entries) => {
            for (interval, item) in entries {
                write_interval(w, interval);
                w.put_f32(*item);
            }
        }
        DynamicValue::Double(entries) => {
            for (interval, item) in entries {
                write_interval(w, interval);
                w.put_f64(*item);
            }
        }
        DynamicValue::BigInt(entries) => {
            for (interval, item) in entries {
                write_interval(w, interval);
                scalar::write_bigint(w, item);
            }
        }
        DynamicValue::Decimal(entries) => {
            for (interval, item) in entries {
                write_interval(w, interval);
                scalar::write_decimal(w, item);
            }
        }
        DynamicValue::Bool(entries) => {
            for (interval, item) in entries {
                write_interval(w, interval);
                w.put_u8(u8::from(*item));
            }
        }
        DynamicValue::Char(entries) => {
            for (interval, item) in entries {
                write_interval(w, interval);
                scalar::write_char(w, *item)?;
            }
        }
        DynamicValue::Str(entries) => {
            for (interval, item) in entries {
                write_interval(w, interval);
                scalar::write_str(w, item);
            }
        }
        DynamicValue::TimeInterval(intervals) => {
            for interval in intervals {
                write_interval(w, interval);
            }
        }
    }
    Ok(())
}

/// Decodes a tagged dynamic value whose category byte was already consumed.
pub fn decode(r: &mut Reader) -> Result<DynamicValue> {
    let sub_tag = r.read_u8("dynamic sub-tag")?;
    let ty = AttrType::from_wire(Category::Dynamic, sub_tag)?;
    let count = r.read_len("interval count")?;

    let kind = match ty.scalar_kind() {
        Some(kind) => kind,
        None => {
            let mut intervals = Vec::with_capacity(count);
            for _ in 0..count {
                intervals.push(read_interval(r)?);
            }
            return Ok(DynamicValue::TimeInterval(intervals));
        }
    };

    Ok(match kind {
        ScalarKind::Byte => {
            let mut entries = Vec::with_capacity(count);
            for _ in 0..count {
                let interval = read_interval(r)?;
                entries.push((interval, r.read_i8("byte payload")?));
            }
            DynamicValue::Byte(entries)
        }
        ScalarKind::Short => {
            let mut entries = Vec::with_capacity(count);
            for _ in 0..count {
                let interval = read_interval(r)?;
                entries.push((interval, r.read_i16("short payload")?));
            }
            DynamicValue::Short(entries)
        }
        ScalarKind::Int => {
            let mut entries = Vec::with_capacity(count);
            for _ in 0..count {
                let interval = read_interval(r)?;
                entries.push((interval, r.read_i32("int payload")?));
            }
            DynamicValue::Int(entries)
        }
        ScalarKind::Long => {
            let mut entries = Vec::with_capacity(count);
            for _ in 0..count {
                let interval = read_interval(r)?;
                entries.push((interval, r.read_i64("long payload")?));
            }
            DynamicValue::Long(entries)
        }
        ScalarKind::Float => {
            let mut entries = Vec::with_capacity(count);
            for _ in 0..count {
                let interval = read_interval(r)?;
                entries.push((interval, r.read_f32("float payload")?));
            }
            DynamicValue::Float(entries)
        }
        ScalarKind::Double => {
            let mut entries = Vec::with_capacity(count);
            for _ in 0..count {
                let interval = read_interval(r)?;
                entries.push((interval, r.read_f64("double payload")?));
            }
            DynamicValue::Double(entries)
        }
        ScalarKind::BigInt => {
            let mut entries = Vec::with_capacity(count);
            for _ in 0..count {
                let interval = read_interval(r)?;
                entries.push((interval, scalar::read_bigint(r)?));
            }
            DynamicValue::BigInt(entries)
        }
        ScalarKind::Decimal => {
            let mut entries = Vec::with_capacity(count);
            for _ in 0..count {
                let interval = read_interval(r)?;
                entries.push((interval, scalar::read_decimal(r)?));
            }
            DynamicValue::Decimal(entries)
        }
        ScalarKind::Bool => {
            let mut entries = Vec::with_capacity(count);
            for _ in 0..count {
                let interval = read_interval(r)?;
                entries.push((interval, r.read_u8("bool payload")? != 0));
            }
            DynamicValue::Bool(entries)
        }
        ScalarKind::Char => {
            let mut entries = Vec::with_capacity(count);
            for _ in 0..count {
                let interval = read_interval(r)?;
                entries.push((interval, scalar::read_char(r)?));
            }
            DynamicValue::Char(entries)
        }
        ScalarKind::Str => {
            let mut entries = Vec::with_capacity(count);
            for _ in 0..count {
                let interval = read_interval(r)?;
                entries.push((interval, scalar::read_str(r)?));
            }
            DynamicValue::Str(entries)
        }
    })
}
