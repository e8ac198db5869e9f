//! Integration tests exercising the public codec surface the way the
//! attribute store uses it: encode a full row to one buffer, persist it as a
//! blob, and reconstruct it later either by column index or positionally.

use attrstore::{
    decode_row, decode_value, decode_values, encode_row, encode_value, encode_values, AttrValue,
    Interval, RowEntry, ScalarValue,
};
use attrstore::types::{Decimal, DynamicValue, ListValue};
use num_bigint::BigInt;

fn node_row() -> Vec<RowEntry> {
    vec![
        RowEntry {
            column: 0,
            value: AttrValue::Scalar(ScalarValue::Long(184_467_440)),
        },
        RowEntry {
            column: 1,
            value: AttrValue::Scalar(ScalarValue::Str("node-label".into())),
        },
        RowEntry {
            column: 4,
            value: AttrValue::List(ListValue::Float(vec![0.25, 0.5, 0.75])),
        },
        RowEntry {
            column: 7,
            value: AttrValue::Dynamic(DynamicValue::Double(vec![
                (Interval::closed(2001.0, 2005.0), 0.8),
                (Interval::closed(2005.0, 2009.0), 1.4),
            ])),
        },
    ]
}

#[test]
fn full_row_survives_a_blob_round_trip() {
    let row = node_row();
    let blob = encode_row(&row).unwrap();

    // Simulate storage: the blob is copied around as opaque bytes.
    let stored = blob.clone();
    let restored = decode_row(&stored).unwrap();
    assert_eq!(restored, row);
}

#[test]
fn values_format_reads_back_against_a_known_column_order() {
    let row = node_row();
    let values: Vec<AttrValue> = row.iter().map(|e| e.value.clone()).collect();
    let columns: Vec<i32> = row.iter().map(|e| e.column).collect();

    let blob = encode_values(&values).unwrap();
    let decoded = decode_values(&blob).unwrap();

    let rebuilt: Vec<RowEntry> = columns
        .into_iter()
        .zip(decoded)
        .map(|(column, value)| RowEntry { column, value })
        .collect();
    assert_eq!(rebuilt, row);
}

#[test]
fn single_values_round_trip_standalone() {
    let values = [
        AttrValue::Scalar(ScalarValue::BigInt(BigInt::parse_bytes(
            b"-123456789012345678901234567890",
            10,
        )
        .unwrap())),
        AttrValue::Scalar(ScalarValue::Decimal(Decimal::new(314159, 5))),
        AttrValue::Dynamic(DynamicValue::TimeInterval(vec![Interval {
            low: f64::NEG_INFINITY,
            high: f64::INFINITY,
            low_excluded: false,
            high_excluded: false,
        }])),
    ];
    for value in values {
        let blob = encode_value(&value).unwrap();
        assert_eq!(decode_value(&blob).unwrap(), value);
    }
}

#[test]
fn corrupted_blob_never_yields_a_partial_row() {
    let blob = encode_row(&node_row()).unwrap();

    // Flip the sub-tag of the first value to an unassigned byte.
    let mut corrupted = blob.clone();
    corrupted[9] = 0x1F;
    assert!(decode_row(&corrupted).is_err());

    // The pristine blob still decodes, proving the failure left no state.
    assert_eq!(decode_row(&blob).unwrap(), node_row());
}
