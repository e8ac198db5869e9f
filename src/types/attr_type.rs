//! # Type Tag Registry
//!
//! This module provides the closed set of wire tags identifying every
//! encodable attribute type. Every logical type maps to exactly one
//! `(category, sub-tag)` pair; the mapping is total and fixed at compile
//! time, enforced by exhaustive matches over closed enums.
//!
//! ## Tag Namespaces
//!
//! | Category | Byte | Sub-tags |
//! |----------|------|----------|
//! | Primitive | 0x10 | 0x11 - 0x1B (eleven scalar kinds) |
//! | List | 0x20 | 0x21 - 0x2B (eleven list kinds) |
//! | Dynamic | 0x40 | 0x41 - 0x4C (eleven payload kinds + time interval) |
//!
//! Sub-tag bytes embed the category base: `sub_tag = category | ordinal`,
//! where the ordinal runs 1..=11 over the scalar kinds in declaration order
//! (byte, short, int, long, float, double, bigint, decimal, bool, char,
//! string) and 12 is the payload-less time-interval marker.

use eyre::{bail, Result};

/// Top-level wire grouping determining how a value's payload is structured.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Primitive = 0x10,
    List = 0x20,
    Dynamic = 0x40,
}

impl Category {
    /// Returns the category tag byte written to the wire.
    pub fn wire_byte(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Category {
    type Error = eyre::Report;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0x10 => Ok(Category::Primitive),
            0x20 => Ok(Category::List),
            0x40 => Ok(Category::Dynamic),
            _ => bail!("unknown category tag: 0x{:02X}", value),
        }
    }
}

/// One of the eleven primitive scalar kinds.
///
/// The discriminant is the kind's ordinal inside each category's sub-tag
/// namespace.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    BigInt = 7,
    Decimal = 8,
    Bool = 9,
    Char = 10,
    Str = 11,
}

impl ScalarKind {
    /// All eleven kinds in ordinal order, for exhaustive iteration in tests.
    pub const ALL: [ScalarKind; 11] = [
        ScalarKind::Byte,
        ScalarKind::Short,
        ScalarKind::Int,
        ScalarKind::Long,
        ScalarKind::Float,
        ScalarKind::Double,
        ScalarKind::BigInt,
        ScalarKind::Decimal,
        ScalarKind::Bool,
        ScalarKind::Char,
        ScalarKind::Str,
    ];

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    fn from_ordinal(ordinal: u8) -> Option<ScalarKind> {
        match ordinal {
            1 => Some(ScalarKind::Byte),
            2 => Some(ScalarKind::Short),
            3 => Some(ScalarKind::Int),
            4 => Some(ScalarKind::Long),
            5 => Some(ScalarKind::Float),
            6 => Some(ScalarKind::Double),
            7 => Some(ScalarKind::BigInt),
            8 => Some(ScalarKind::Decimal),
            9 => Some(ScalarKind::Bool),
            10 => Some(ScalarKind::Char),
            11 => Some(ScalarKind::Str),
            _ => None,
        }
    }
}

/// Ordinal of the payload-less time-interval dynamic variant.
const TIME_INTERVAL_ORDINAL: u8 = 12;

/// Every encodable attribute type: eleven primitives, eleven homogeneous
/// list types, and twelve dynamic (interval-indexed) types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrType {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    BigInt,
    Decimal,
    Bool,
    Char,
    Str,

    ByteList,
    ShortList,
    IntList,
    LongList,
    FloatList,
    DoubleList,
    BigIntList,
    DecimalList,
    BoolList,
    CharList,
    StrList,

    DynamicByte,
    DynamicShort,
    DynamicInt,
    DynamicLong,
    DynamicFloat,
    DynamicDouble,
    DynamicBigInt,
    DynamicDecimal,
    DynamicBool,
    DynamicChar,
    DynamicStr,
    TimeInterval,
}

impl AttrType {
    /// All thirty-four logical types, for exhaustive iteration in tests.
    pub const ALL: [AttrType; 34] = [
        AttrType::Byte,
        AttrType::Short,
        AttrType::Int,
        AttrType::Long,
        AttrType::Float,
        AttrType::Double,
        AttrType::BigInt,
        AttrType::Decimal,
        AttrType::Bool,
        AttrType::Char,
        AttrType::Str,
        AttrType::ByteList,
        AttrType::ShortList,
        AttrType::IntList,
        AttrType::LongList,
        AttrType::FloatList,
        AttrType::DoubleList,
        AttrType::BigIntList,
        AttrType::DecimalList,
        AttrType::BoolList,
        AttrType::CharList,
        AttrType::StrList,
        AttrType::DynamicByte,
        AttrType::DynamicShort,
        AttrType::DynamicInt,
        AttrType::DynamicLong,
        AttrType::DynamicFloat,
        AttrType::DynamicDouble,
        AttrType::DynamicBigInt,
        AttrType::DynamicDecimal,
        AttrType::DynamicBool,
        AttrType::DynamicChar,
        AttrType::DynamicStr,
        AttrType::TimeInterval,
    ];

    /// Returns the wire category this type belongs to.
    pub fn category(self) -> Category {
        match self {
            AttrType::Byte
            | AttrType::Short
            | AttrType::Int
            | AttrType::Long
            | AttrType::Float
            | AttrType::Double
            | AttrType::BigInt
            | AttrType::Decimal
            | AttrType::Bool
            | AttrType::Char
            | AttrType::Str => Category::Primitive,

            AttrType::ByteList
            | AttrType::ShortList
            | AttrType::IntList
            | AttrType::LongList
            | AttrType::FloatList
            | AttrType::DoubleList
            | AttrType::BigIntList
            | AttrType::DecimalList
            | AttrType::BoolList
            | AttrType::CharList
            | AttrType::StrList => Category::List,

            AttrType::DynamicByte
            | AttrType::DynamicShort
            | AttrType::DynamicInt
            | AttrType::DynamicLong
            | AttrType::DynamicFloat
            | AttrType::DynamicDouble
            | AttrType::DynamicBigInt
            | AttrType::DynamicDecimal
            | AttrType::DynamicBool
            | AttrType::DynamicChar
            | AttrType::DynamicStr
            | AttrType::TimeInterval => Category::Dynamic,
        }
    }

    /// Returns the scalar kind carried by this type, or `None` for the
    /// payload-less time-interval variant.
    pub fn scalar_kind(self) -> Option<ScalarKind> {
        match self {
            AttrType::Byte | AttrType::ByteList | AttrType::DynamicByte => Some(ScalarKind::Byte),
            AttrType::Short | AttrType::ShortList | AttrType::DynamicShort => {
                Some(ScalarKind::Short)
            }
            AttrType::Int | AttrType::IntList | AttrType::DynamicInt => Some(ScalarKind::Int),
            AttrType::Long | AttrType::LongList | AttrType::DynamicLong => Some(ScalarKind::Long),
            AttrType::Float | AttrType::FloatList | AttrType::DynamicFloat => {
                Some(ScalarKind::Float)
            }
            AttrType::Double | AttrType::DoubleList | AttrType::DynamicDouble => {
                Some(ScalarKind::Double)
            }
            AttrType::BigInt | AttrType::BigIntList | AttrType::DynamicBigInt => {
                Some(ScalarKind::BigInt)
            }
            AttrType::Decimal | AttrType::DecimalList | AttrType::DynamicDecimal => {
                Some(ScalarKind::Decimal)
            }
            AttrType::Bool | AttrType::BoolList | AttrType::DynamicBool => Some(ScalarKind::Bool),
            AttrType::Char | AttrType::CharList | AttrType::DynamicChar => Some(ScalarKind::Char),
            AttrType::Str | AttrType::StrList | AttrType::DynamicStr => Some(ScalarKind::Str),
            AttrType::TimeInterval => None,
        }
    }

    /// Returns the sub-tag byte written to the wire after the category byte.
    pub fn wire_tag(self) -> u8 {
        let ordinal = match self.scalar_kind() {
            Some(kind) => kind.ordinal(),
            None => TIME_INTERVAL_ORDINAL,
        };
        self.category().wire_byte() | ordinal
    }

    /// Looks up the logical type for a sub-tag byte read from the wire.
    ///
    /// The category has already been consumed by the caller; the sub-tag must
    /// belong to that category's namespace.
    pub fn from_wire(category: Category, sub_tag: u8) -> Result<AttrType> {
        let ordinal = sub_tag.wrapping_sub(category.wire_byte());
        match category {
            Category::Primitive => match ScalarKind::from_ordinal(ordinal) {
                Some(kind) => Ok(AttrType::primitive_for(kind)),
                None => bail!("unknown primitive sub-tag: 0x{:02X}", sub_tag),
            },
            Category::List => match ScalarKind::from_ordinal(ordinal) {
                Some(kind) => Ok(AttrType::list_for(kind)),
                None => bail!("unknown list sub-tag: 0x{:02X}", sub_tag),
            },
            Category::Dynamic => {
                if ordinal == TIME_INTERVAL_ORDINAL {
                    return Ok(AttrType::TimeInterval);
                }
                match ScalarKind::from_ordinal(ordinal) {
                    Some(kind) => Ok(AttrType::dynamic_for(kind)),
                    None => bail!("unknown dynamic sub-tag: 0x{:02X}", sub_tag),
                }
            }
        }
    }

    /// Returns the primitive type carrying `kind`.
    pub fn primitive_for(kind: ScalarKind) -> AttrType {
        match kind {
            ScalarKind::Byte => AttrType::Byte,
            ScalarKind::Short => AttrType::Short,
            ScalarKind::Int => AttrType::Int,
            ScalarKind::Long => AttrType::Long,
            ScalarKind::Float => AttrType::Float,
            ScalarKind::Double => AttrType::Double,
            ScalarKind::BigInt => AttrType::BigInt,
            ScalarKind::Decimal => AttrType::Decimal,
            ScalarKind::Bool => AttrType::Bool,
            ScalarKind::Char => AttrType::Char,
            ScalarKind::Str => AttrType::Str,
        }
    }

    /// Returns the list type whose items are of `kind`.
    pub fn list_for(kind: ScalarKind) -> AttrType {
        match kind {
            ScalarKind::Byte => AttrType::ByteList,
            ScalarKind::Short => AttrType::ShortList,
            ScalarKind::Int => AttrType::IntList,
            ScalarKind::Long => AttrType::LongList,
            ScalarKind::Float => AttrType::FloatList,
            ScalarKind::Double => AttrType::DoubleList,
            ScalarKind::BigInt => AttrType::BigIntList,
            ScalarKind::Decimal => AttrType::DecimalList,
            ScalarKind::Bool => AttrType::BoolList,
            ScalarKind::Char => AttrType::CharList,
            ScalarKind::Str => AttrType::StrList,
        }
    }

    /// Returns the dynamic type whose interval payloads are of `kind`.
    pub fn dynamic_for(kind: ScalarKind) -> AttrType {
        match kind {
            ScalarKind::Byte => AttrType::DynamicByte,
            ScalarKind::Short => AttrType::DynamicShort,
            ScalarKind::Int => AttrType::DynamicInt,
            ScalarKind::Long => AttrType::DynamicLong,
            ScalarKind::Float => AttrType::DynamicFloat,
            ScalarKind::Double => AttrType::DynamicDouble,
            ScalarKind::BigInt => AttrType::DynamicBigInt,
            ScalarKind::Decimal => AttrType::DynamicDecimal,
            ScalarKind::Bool => AttrType::DynamicBool,
            ScalarKind::Char => AttrType::DynamicChar,
            ScalarKind::Str => AttrType::DynamicStr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn category_wire_bytes_match_fixed_constants() {
        assert_eq!(Category::Primitive.wire_byte(), 0x10);
        assert_eq!(Category::List.wire_byte(), 0x20);
        assert_eq!(Category::Dynamic.wire_byte(), 0x40);
    }

    #[test]
    fn category_from_unknown_byte_fails() {
        for byte in [0x00u8, 0x11, 0x30, 0x50, 0x80, 0xFF] {
            let result = Category::try_from(byte);
            assert!(result.is_err(), "byte 0x{:02X} should be rejected", byte);
            assert!(result.unwrap_err().to_string().contains("unknown category"));
        }
    }

    #[test]
    fn primitive_sub_tags_span_expected_range() {
        assert_eq!(AttrType::Byte.wire_tag(), 0x11);
        assert_eq!(AttrType::Short.wire_tag(), 0x12);
        assert_eq!(AttrType::Int.wire_tag(), 0x13);
        assert_eq!(AttrType::Long.wire_tag(), 0x14);
        assert_eq!(AttrType::Float.wire_tag(), 0x15);
        assert_eq!(AttrType::Double.wire_tag(), 0x16);
        assert_eq!(AttrType::BigInt.wire_tag(), 0x17);
        assert_eq!(AttrType::Decimal.wire_tag(), 0x18);
        assert_eq!(AttrType::Bool.wire_tag(), 0x19);
        assert_eq!(AttrType::Char.wire_tag(), 0x1A);
        assert_eq!(AttrType::Str.wire_tag(), 0x1B);
    }

    #[test]
    fn list_and_dynamic_sub_tags_span_expected_ranges() {
        assert_eq!(AttrType::ByteList.wire_tag(), 0x21);
        assert_eq!(AttrType::StrList.wire_tag(), 0x2B);
        assert_eq!(AttrType::DynamicByte.wire_tag(), 0x41);
        assert_eq!(AttrType::DynamicInt.wire_tag(), 0x43);
        assert_eq!(AttrType::DynamicStr.wire_tag(), 0x4B);
        assert_eq!(AttrType::TimeInterval.wire_tag(), 0x4C);
    }

    #[test]
    fn wire_tags_are_injective_across_all_types() {
        let mut seen = HashSet::new();
        for ty in AttrType::ALL {
            let pair = (ty.category().wire_byte(), ty.wire_tag());
            assert!(seen.insert(pair), "duplicate tag pair {:?} for {:?}", pair, ty);
        }
        assert_eq!(seen.len(), 34);
    }

    #[test]
    fn categories_partition_the_type_set() {
        let mut primitive = 0;
        let mut list = 0;
        let mut dynamic = 0;
        for ty in AttrType::ALL {
            match ty.category() {
                Category::Primitive => primitive += 1,
                Category::List => list += 1,
                Category::Dynamic => dynamic += 1,
            }
        }
        assert_eq!(primitive, 11);
        assert_eq!(list, 11);
        assert_eq!(dynamic, 12);
    }

    #[test]
    fn from_wire_inverts_wire_tag_for_every_type() {
        for ty in AttrType::ALL {
            let back = AttrType::from_wire(ty.category(), ty.wire_tag()).unwrap();
            assert_eq!(back, ty);
        }
    }

    #[test]
    fn from_wire_rejects_out_of_range_sub_tags() {
        assert!(AttrType::from_wire(Category::Primitive, 0x10).is_err());
        assert!(AttrType::from_wire(Category::Primitive, 0x1C).is_err());
        assert!(AttrType::from_wire(Category::List, 0x2C).is_err());
        assert!(AttrType::from_wire(Category::Dynamic, 0x4D).is_err());
        assert!(AttrType::from_wire(Category::Dynamic, 0x40).is_err());

        let err = AttrType::from_wire(Category::List, 0xFF).unwrap_err();
        assert!(err.to_string().contains("unknown list sub-tag"));
    }

    #[test]
    fn from_wire_rejects_sub_tag_from_wrong_category() {
        // 0x13 is a valid primitive sub-tag but not a list one.
        assert!(AttrType::from_wire(Category::List, 0x13).is_err());
    }

    #[test]
    fn time_interval_carries_no_scalar_kind() {
        assert_eq!(AttrType::TimeInterval.scalar_kind(), None);
        for ty in AttrType::ALL {
            if ty != AttrType::TimeInterval {
                assert!(ty.scalar_kind().is_some());
            }
        }
    }
}
