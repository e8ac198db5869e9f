//! # In-Memory Value Model
//!
//! This module provides the call-scoped value structures the codec encodes
//! and decodes. All of them are transient: constructed from caller-supplied
//! data immediately before encoding, or reconstructed immediately after
//! decoding. The codec owns no persistent state between calls.
//!
//! ## Value Shapes
//!
//! | Shape | Type | Wire category |
//! |-------|------|---------------|
//! | Scalar | [`ScalarValue`] | 0x10 |
//! | Homogeneous list | [`ListValue`] | 0x20 |
//! | Interval-indexed | [`DynamicValue`] | 0x40 |
//!
//! List and dynamic values are typed per kind, so heterogeneous sequences
//! are unrepresentable rather than merely rejected at encode time.

use num_bigint::BigInt;

use crate::types::attr_type::{AttrType, ScalarKind};

/// Wire bit patterns for interval endpoint exclusion.
///
/// Each flag occupies a full nibble rather than a single bit; the sparse
/// encoding is reproduced exactly for wire compatibility.
pub mod endpoint_flags {
    pub const LOW_EXCLUDED: u8 = 0x0F;
    pub const HIGH_EXCLUDED: u8 = 0xF0;
}

/// Arbitrary-precision decimal: `unscaled * 10^(-scale)`.
///
/// The pair maps one-to-one onto the wire format
/// `[i32 scale][i32 len][unscaled bytes]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimal {
    pub unscaled: BigInt,
    pub scale: i32,
}

impl Decimal {
    pub fn new(unscaled: impl Into<BigInt>, scale: i32) -> Self {
        Self {
            unscaled: unscaled.into(),
            scale,
        }
    }
}

/// A real-number range with independently toggleable endpoint exclusion.
///
/// `low <= high` is assumed but never validated; the codec passes bounds
/// through untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub low: f64,
    pub high: f64,
    pub low_excluded: bool,
    pub high_excluded: bool,
}

impl Interval {
    /// A closed interval `[low, high]`.
    pub fn closed(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            low_excluded: false,
            high_excluded: false,
        }
    }

    /// Builds the endpoint-flags wire byte.
    pub fn flags(&self) -> u8 {
        let mut flags = 0u8;
        if self.low_excluded {
            flags |= endpoint_flags::LOW_EXCLUDED;
        }
        if self.high_excluded {
            flags |= endpoint_flags::HIGH_EXCLUDED;
        }
        flags
    }

    /// Reconstructs an interval from bounds and an endpoint-flags byte.
    pub fn from_flags(low: f64, high: f64, flags: u8) -> Self {
        Self {
            low,
            high,
            low_excluded: flags & endpoint_flags::LOW_EXCLUDED != 0,
            high_excluded: flags & endpoint_flags::HIGH_EXCLUDED != 0,
        }
    }
}

/// A single scalar of one of the eleven primitive kinds.
///
/// There is no null variant at this layer; absence is the caller's concern
/// (a row or list simply omits the entry).
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    BigInt(BigInt),
    Decimal(Decimal),
    Bool(bool),
    Char(char),
    Str(String),
}

impl ScalarValue {
    pub fn kind(&self) -> ScalarKind {
        match self {
            ScalarValue::Byte(_) => ScalarKind::Byte,
            ScalarValue::Short(_) => ScalarKind::Short,
            ScalarValue::Int(_) => ScalarKind::Int,
            ScalarValue::Long(_) => ScalarKind::Long,
            ScalarValue::Float(_) => ScalarKind::Float,
            ScalarValue::Double(_) => ScalarKind::Double,
            ScalarValue::BigInt(_) => ScalarKind::BigInt,
            ScalarValue::Decimal(_) => ScalarKind::Decimal,
            ScalarValue::Bool(_) => ScalarKind::Bool,
            ScalarValue::Char(_) => ScalarKind::Char,
            ScalarValue::Str(_) => ScalarKind::Str,
        }
    }
}

/// An ordered, homogeneous sequence of one primitive kind.
///
/// Empty lists are valid (count 0 on the wire).
#[derive(Debug, Clone, PartialEq)]
pub enum ListValue {
    Byte(Vec<i8>),
    Short(Vec<i16>),
    Int(Vec<i32>),
    Long(Vec<i64>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    BigInt(Vec<BigInt>),
    Decimal(Vec<Decimal>),
    Bool(Vec<bool>),
    Char(Vec<char>),
    Str(Vec<String>),
}

impl ListValue {
    pub fn kind(&self) -> ScalarKind {
        match self {
            ListValue::Byte(_) => ScalarKind::Byte,
            ListValue::Short(_) => ScalarKind::Short,
            ListValue::Int(_) => ScalarKind::Int,
            ListValue::Long(_) => ScalarKind::Long,
            ListValue::Float(_) => ScalarKind::Float,
            ListValue::Double(_) => ScalarKind::Double,
            ListValue::BigInt(_) => ScalarKind::BigInt,
            ListValue::Decimal(_) => ScalarKind::Decimal,
            ListValue::Bool(_) => ScalarKind::Bool,
            ListValue::Char(_) => ScalarKind::Char,
            ListValue::Str(_) => ScalarKind::Str,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ListValue::Byte(v) => v.len(),
            ListValue::Short(v) => v.len(),
            ListValue::Int(v) => v.len(),
            ListValue::Long(v) => v.len(),
            ListValue::Float(v) => v.len(),
            ListValue::Double(v) => v.len(),
            ListValue::BigInt(v) => v.len(),
            ListValue::Decimal(v) => v.len(),
            ListValue::Bool(v) => v.len(),
            ListValue::Char(v) => v.len(),
            ListValue::Str(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A time-varying value: an ordered sequence of intervals, each carrying a
/// payload of one primitive kind, or bare bounds for the time-interval
/// variant.
///
/// Ordering is preserved exactly as given; the codec never sorts, merges, or
/// validates overlap.
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicValue {
    Byte(Vec<(Interval, i8)>),
    Short(Vec<(Interval, i16)>),
    Int(Vec<(Interval, i32)>),
    Long(Vec<(Interval, i64)>),
    Float(Vec<(Interval, f32)>),
    Double(Vec<(Interval, f64)>),
    BigInt(Vec<(Interval, BigInt)>),
    Decimal(Vec<(Interval, Decimal)>),
    Bool(Vec<(Interval, bool)>),
    Char(Vec<(Interval, char)>),
    Str(Vec<(Interval, String)>),
    TimeInterval(Vec<Interval>),
}

impl DynamicValue {
    /// Returns the payload kind, or `None` for the time-interval variant.
    pub fn kind(&self) -> Option<ScalarKind> {
        match self {
            DynamicValue::Byte(_) => Some(ScalarKind::Byte),
            DynamicValue::Short(_) => Some(ScalarKind::Short),
            DynamicValue::Int(_) => Some(ScalarKind::Int),
            DynamicValue::Long(_) => Some(ScalarKind::Long),
            DynamicValue::Float(_) => Some(ScalarKind::Float),
            DynamicValue::Double(_) => Some(ScalarKind::Double),
            DynamicValue::BigInt(_) => Some(ScalarKind::BigInt),
            DynamicValue::Decimal(_) => Some(ScalarKind::Decimal),
            DynamicValue::Bool(_) => Some(ScalarKind::Bool),
            DynamicValue::Char(_) => Some(ScalarKind::Char),
            DynamicValue::Str(_) => Some(ScalarKind::Str),
            DynamicValue::TimeInterval(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            DynamicValue::Byte(v) => v.len(),
            DynamicValue::Short(v) => v.len(),
            DynamicValue::Int(v) => v.len(),
            DynamicValue::Long(v) => v.len(),
            DynamicValue::Float(v) => v.len(),
            DynamicValue::Double(v) => v.len(),
            DynamicValue::BigInt(v) => v.len(),
            DynamicValue::Decimal(v) => v.len(),
            DynamicValue::Bool(v) => v.len(),
            DynamicValue::Char(v) => v.len(),
            DynamicValue::Str(v) => v.len(),
            DynamicValue::TimeInterval(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Any encodable attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Scalar(ScalarValue),
    List(ListValue),
    Dynamic(DynamicValue),
}

impl AttrValue {
    /// Returns the logical type this value encodes as.
    pub fn attr_type(&self) -> AttrType {
        match self {
            AttrValue::Scalar(v) => AttrType::primitive_for(v.kind()),
            AttrValue::List(v) => AttrType::list_for(v.kind()),
            AttrValue::Dynamic(v) => match v.kind() {
                Some(kind) => AttrType::dynamic_for(kind),
                None => AttrType::TimeInterval,
            },
        }
    }
}
