//! Cross-cutting tests for the codec: row/values orchestration, wire-level
//! byte layouts, and corruption handling.

use num_bigint::BigInt;

use super::*;
use crate::types::{AttrValue, Decimal, DynamicValue, Interval, ListValue, ScalarValue};

fn sample_values() -> Vec<AttrValue> {
    vec![
        AttrValue::Scalar(ScalarValue::Int(-42)),
        AttrValue::Scalar(ScalarValue::Str("label".into())),
        AttrValue::List(ListValue::Double(vec![0.5, -1.5])),
        AttrValue::Scalar(ScalarValue::BigInt(BigInt::from(1) << 80)),
        AttrValue::Dynamic(DynamicValue::Str(vec![
            (Interval::closed(0.0, 1.0), "old".into()),
            (Interval::closed(1.0, 2.0), "new".into()),
        ])),
        AttrValue::Scalar(ScalarValue::Decimal(Decimal::new(-995, 2))),
        AttrValue::Dynamic(DynamicValue::TimeInterval(vec![Interval::closed(
            3.0, 4.0,
        )])),
    ]
}

#[test]
fn row_round_trips_mixed_value_shapes() {
    let entries: Vec<RowEntry> = sample_values()
        .into_iter()
        .enumerate()
        .map(|(i, value)| RowEntry {
            column: i as i32 * 3,
            value,
        })
        .collect();

    let bytes = encode_row(&entries).unwrap();
    let decoded = decode_row(&bytes).unwrap();
    assert_eq!(decoded, entries);
}

#[test]
fn row_preserves_caller_order_not_column_order() {
    let entries = vec![
        RowEntry {
            column: 9,
            value: AttrValue::Scalar(ScalarValue::Bool(true)),
        },
        RowEntry {
            column: 2,
            value: AttrValue::Scalar(ScalarValue::Bool(false)),
        },
    ];
    let bytes = encode_row(&entries).unwrap();
    let decoded = decode_row(&bytes).unwrap();
    assert_eq!(decoded[0].column, 9);
    assert_eq!(decoded[1].column, 2);
}

#[test]
fn empty_row_and_empty_values_round_trip() {
    assert_eq!(decode_row(&encode_row(&[]).unwrap()).unwrap(), vec![]);
    assert_eq!(
        decode_values(&encode_values(&[]).unwrap()).unwrap(),
        Vec::<AttrValue>::new()
    );
}

#[test]
fn row_format_and_values_format_decode_to_identical_values() {
    let values = sample_values();
    let entries: Vec<RowEntry> = values
        .iter()
        .cloned()
        .enumerate()
        .map(|(i, value)| RowEntry {
            column: i as i32,
            value,
        })
        .collect();

    let via_row: Vec<AttrValue> = decode_row(&encode_row(&entries).unwrap())
        .unwrap()
        .into_iter()
        .map(|e| e.value)
        .collect();
    let via_values = decode_values(&encode_values(&values).unwrap()).unwrap();

    assert_eq!(via_row, via_values);
    assert_eq!(via_values, values);
}

#[test]
fn row_format_carries_column_indices_values_format_does_not() {
    let value = AttrValue::Scalar(ScalarValue::Byte(1));
    let row_bytes = encode_row(&[RowEntry {
        column: 7,
        value: value.clone(),
    }])
    .unwrap();
    let values_bytes = encode_values(std::slice::from_ref(&value)).unwrap();

    // The row entry adds exactly one i32 column index.
    assert_eq!(row_bytes.len(), values_bytes.len() + 4);
    assert_eq!(&row_bytes[4..8], &7i32.to_be_bytes());
}

#[test]
fn single_value_round_trips_through_its_own_buffer() {
    for value in sample_values() {
        let bytes = encode_value(&value).unwrap();
        assert_eq!(decode_value(&bytes).unwrap(), value);
    }
}

#[test]
fn dynamic_int_example_matches_specified_wire_bytes() {
    let value = AttrValue::Dynamic(DynamicValue::Int(vec![
        (Interval::closed(0.0, 10.0), 5),
        (
            Interval {
                low: 10.0,
                high: 20.0,
                low_excluded: true,
                high_excluded: false,
            },
            7,
        ),
    ]));

    let mut expected = vec![0x40u8, 0x43];
    expected.extend(2i32.to_be_bytes());
    expected.push(0x00);
    expected.extend(0.0f64.to_be_bytes());
    expected.extend(10.0f64.to_be_bytes());
    expected.extend(5i32.to_be_bytes());
    expected.push(0x0F);
    expected.extend(10.0f64.to_be_bytes());
    expected.extend(20.0f64.to_be_bytes());
    expected.extend(7i32.to_be_bytes());

    assert_eq!(encode_value(&value).unwrap(), expected);
    assert_eq!(decode_value(&expected).unwrap(), value);
}

#[test]
fn unknown_category_byte_fails_and_returns_no_partial_row() {
    let mut bytes = encode_row(&[
        RowEntry {
            column: 0,
            value: AttrValue::Scalar(ScalarValue::Int(1)),
        },
        RowEntry {
            column: 1,
            value: AttrValue::Scalar(ScalarValue::Int(2)),
        },
    ])
    .unwrap();

    // Corrupt the second entry's category byte; decode must fail outright
    // even though the first entry was valid.
    let second_entry_category = 4 + 4 + 6 + 4;
    bytes[second_entry_category] = 0x30;

    let err = decode_row(&bytes).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("failed to decode row entry 1"));
    assert!(msg.contains("unknown category tag: 0x30"));
}

#[test]
fn decode_errors_carry_the_failing_position() {
    let mut bytes = encode_values(&[
        AttrValue::Scalar(ScalarValue::Bool(true)),
        AttrValue::List(ListValue::Int(vec![1])),
    ])
    .unwrap();

    // Corrupt the list sub-tag.
    let list_sub_tag = 4 + 3 + 1;
    bytes[list_sub_tag] = 0x2F;

    let err = decode_values(&bytes).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("failed to decode value 1"));
    assert!(msg.contains("unknown list sub-tag"));
}

#[test]
fn truncated_row_buffer_is_rejected() {
    let bytes = encode_row(&[RowEntry {
        column: 0,
        value: AttrValue::Scalar(ScalarValue::Long(1)),
    }])
    .unwrap();

    for cut in 1..bytes.len() {
        assert!(
            decode_row(&bytes[..cut]).is_err(),
            "truncation at {} must fail",
            cut
        );
    }
}

#[test]
fn trailing_bytes_after_row_are_tolerated() {
    let entries = vec![RowEntry {
        column: 1,
        value: AttrValue::Scalar(ScalarValue::Short(3)),
    }];
    let mut bytes = encode_row(&entries).unwrap();
    bytes.extend_from_slice(&[0xDE, 0xAD]);
    assert_eq!(decode_row(&bytes).unwrap(), entries);
}

#[test]
fn negative_entry_count_is_rejected() {
    let bytes = (-5i32).to_be_bytes();
    let err = decode_row(&bytes).unwrap_err();
    assert!(err.to_string().contains("negative length"));
}

#[test]
fn entry_count_beyond_buffer_is_rejected_before_allocation() {
    let mut bytes = Vec::new();
    bytes.extend(i32::MAX.to_be_bytes());
    bytes.extend([0u8; 8]);
    let err = decode_row(&bytes).unwrap_err();
    assert!(err.to_string().contains("exceeds remaining"));
}

#[test]
fn failed_encode_produces_no_output() {
    // A char above the BMP cannot be encoded; the whole row must fail and
    // the returned error must not be accompanied by any buffer.
    let entries = vec![
        RowEntry {
            column: 0,
            value: AttrValue::Scalar(ScalarValue::Int(1)),
        },
        RowEntry {
            column: 1,
            value: AttrValue::Scalar(ScalarValue::Char('𝄞')),
        },
    ];
    let err = encode_row(&entries).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("failed to encode value for column 1"));
}

#[test]
fn list_of_n_ints_payload_is_four_plus_four_n_bytes() {
    for n in [0usize, 1, 5, 100] {
        let value = AttrValue::List(ListValue::Int((0..n as i32).collect()));
        let bytes = encode_value(&value).unwrap();
        assert_eq!(bytes.len(), 2 + 4 + 4 * n);
    }
}
