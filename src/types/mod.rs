//! # Attribute Type System
//!
//! This module provides the logical type registry and the in-memory value
//! model the codec operates on.
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | `Category` | Top-level wire grouping (primitive / list / dynamic) |
//! | `ScalarKind` | One of the eleven primitive kinds |
//! | `AttrType` | Every encodable logical type (34 variants) |
//! | `ScalarValue` | A single primitive value |
//! | `ListValue` | Homogeneous list of one primitive kind |
//! | `DynamicValue` | Interval-indexed time-varying value |
//! | `AttrValue` | Any of the three shapes |
//! | `Interval` | Real-number range with endpoint exclusion flags |
//! | `Decimal` | Arbitrary-precision unscaled integer + scale |

mod attr_type;
mod value;

pub use attr_type::{AttrType, Category, ScalarKind};
pub use value::{
    endpoint_flags, AttrValue, Decimal, DynamicValue, Interval, ListValue, ScalarValue,
};
