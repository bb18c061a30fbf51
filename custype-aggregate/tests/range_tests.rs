use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Float64Array, Int32Array, Int64Array, StringArray};
use custype_aggregate::{
    AggregateFunction, RangeAccumulator, RangeAggregate, RangeResult, RangeStream, RangeValue,
};
use custype_result::Error;
use custype_test_utils::init_tracing_for_tests;
use custype_types::{DetachedSession, Value};

#[test]
fn text_range_uses_first_differing_code_point() {
    let mut acc = RangeAccumulator::new();
    for word in ["apple", "zebra", "mango"] {
        acc.add(word).unwrap();
    }
    assert_eq!(acc.count(), 3);
    assert_eq!(acc.max(), Some(RangeValue::from("zebra")));
    assert_eq!(acc.min(), Some(RangeValue::from("apple")));
    assert_eq!(acc.result(), RangeResult::Range(25));
}

#[test]
fn integer_range() {
    let mut acc = RangeAccumulator::new();
    for v in [5i64, 1, 9, 3] {
        acc.add(v).unwrap();
    }
    assert_eq!(acc.min(), Some(RangeValue::Integer(1)));
    assert_eq!(acc.max(), Some(RangeValue::Integer(9)));
    assert_eq!(acc.result(), RangeResult::Range(8));
}

#[test]
fn single_row_has_no_result() {
    let mut acc = RangeAccumulator::new();
    assert_eq!(acc.result(), RangeResult::NoResult);
    acc.add(42i64).unwrap();
    assert_eq!(acc.count(), 1);
    assert_eq!(acc.result(), RangeResult::NoResult);
    assert_eq!(acc.result().value(), None);

    let mut text = RangeAccumulator::new();
    text.add("only").unwrap();
    assert_eq!(text.result(), RangeResult::NoResult);
}

#[test]
fn two_equal_rows_give_zero() {
    let mut acc = RangeAccumulator::new();
    acc.add(7i64).unwrap();
    acc.add(7i64).unwrap();
    assert_eq!(acc.result(), RangeResult::Range(0));
}

#[test]
fn both_bounds_move_for_descending_then_ascending_input() {
    // The second value is below the first; the third is above both.
    let mut acc = RangeAccumulator::new();
    for v in [5i64, 2, 11] {
        acc.add(v).unwrap();
    }
    assert_eq!(acc.min(), Some(RangeValue::Integer(2)));
    assert_eq!(acc.max(), Some(RangeValue::Integer(11)));
    assert_eq!(acc.result(), RangeResult::Range(9));
}

#[test]
fn result_reflects_rows_seen_so_far() {
    let mut acc = RangeAccumulator::new();
    let mut seen = Vec::new();
    for v in [10i64, 12, 3, 3, 40] {
        acc.add(v).unwrap();
        seen.push(acc.result().value());
        // Reading twice changes nothing.
        assert_eq!(acc.result(), acc.result());
    }
    assert_eq!(seen, vec![None, Some(2), Some(9), Some(9), Some(37)]);
}

#[test]
fn mixed_kind_input_is_rejected() {
    init_tracing_for_tests();
    let mut acc = RangeAccumulator::new();
    acc.add("text").unwrap();
    let err = acc.add(3i64).unwrap_err();
    assert_eq!(
        err,
        Error::MixedKindInput {
            expected: "text",
            got: "integer"
        }
    );
    assert_eq!(acc.count(), 1);
}

#[test]
fn merge_matches_sequential_feeding() {
    let values = [17i64, -4, 8, 30, 2, 11];
    let mut sequential = RangeAccumulator::new();
    for v in values {
        sequential.add(v).unwrap();
    }

    let (left_values, right_values) = values.split_at(2);
    let mut left = RangeAccumulator::new();
    let mut right = RangeAccumulator::new();
    for v in left_values {
        left.add(*v).unwrap();
    }
    for v in right_values {
        right.add(*v).unwrap();
    }
    left.merge(right).unwrap();
    assert_eq!(left, sequential);
}

#[test]
fn merge_of_single_rows_produces_a_result() {
    let mut left = RangeAccumulator::new();
    left.add("apple").unwrap();
    let mut right = RangeAccumulator::new();
    right.add("zebra").unwrap();
    left.merge(right).unwrap();
    assert_eq!(left.count(), 2);
    assert_eq!(left.result(), RangeResult::Range(25));

    let mut empty = RangeAccumulator::new();
    empty.merge(RangeAccumulator::new()).unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.result(), RangeResult::NoResult);
}

#[test]
fn merge_rejects_mixed_kinds() {
    init_tracing_for_tests();
    let mut left = RangeAccumulator::new();
    left.add(1i64).unwrap();
    let mut right = RangeAccumulator::new();
    right.add("one").unwrap();
    assert!(matches!(
        left.merge(right),
        Err(Error::MixedKindInput { .. })
    ));
}

#[test]
fn arrow_chunks_skip_nulls() {
    let mut acc = RangeAccumulator::new();
    let chunk: ArrayRef = Arc::new(Int64Array::from(vec![Some(5), None, Some(1)]));
    acc.update_array(&chunk).unwrap();
    let chunk: ArrayRef = Arc::new(Int32Array::from(vec![None, Some(9), Some(3)]));
    acc.update_array(&chunk).unwrap();
    assert_eq!(acc.count(), 4);
    assert_eq!(acc.result(), RangeResult::Range(8));

    let (field, array) = acc.finalize().unwrap();
    assert_eq!(field.name(), "range");
    let array = array.as_any().downcast_ref::<Int64Array>().unwrap();
    assert_eq!(array.value(0), 8);
}

#[test]
fn unsupported_arrow_columns_are_rejected() {
    let mut acc = RangeAccumulator::new();
    let chunk: ArrayRef = Arc::new(Float64Array::from(vec![1.0, 2.0]));
    assert!(matches!(
        acc.update_array(&chunk),
        Err(Error::InvalidArgumentError(_))
    ));
}

#[test]
fn stream_yields_one_batch() {
    let chunks: Vec<Result<ArrayRef, Error>> = vec![
        Ok(Arc::new(StringArray::from(vec!["apple", "mango"])) as ArrayRef),
        Ok(Arc::new(StringArray::from(vec![Some("zebra"), None])) as ArrayRef),
    ];
    let mut stream = RangeStream::new(chunks.into_iter(), "fruit_range");
    assert_eq!(stream.schema().field(0).name(), "fruit_range");

    let batch = stream.next().unwrap().unwrap();
    assert_eq!(batch.num_rows(), 1);
    let column = batch
        .column(0)
        .as_any()
        .downcast_ref::<Int64Array>()
        .unwrap();
    assert_eq!(column.value(0), 25);
    assert!(stream.next().is_none());
}

#[test]
fn stream_of_one_value_yields_null() {
    let chunks: Vec<Result<ArrayRef, Error>> =
        vec![Ok(Arc::new(Int64Array::from(vec![3])) as ArrayRef)];
    let batch = RangeStream::new(chunks.into_iter(), "r")
        .next()
        .unwrap()
        .unwrap();
    assert!(batch.column(0).is_null(0));
}

#[test]
fn stream_propagates_input_errors() {
    let chunks: Vec<Result<ArrayRef, Error>> = vec![Err(Error::Internal("scan failed".into()))];
    let mut stream = RangeStream::new(chunks.into_iter(), "r");
    assert_eq!(
        stream.next().unwrap().unwrap_err(),
        Error::Internal("scan failed".into())
    );
}

#[test]
fn row_protocol_end_to_end() {
    init_tracing_for_tests();
    let mut agg = RangeAggregate::new();
    agg.init(&DetachedSession).unwrap();
    assert_eq!(agg.result().unwrap(), Value::Null);
    for word in ["apple", "zebra", "mango"] {
        agg.add(&[Value::from(word)]).unwrap();
    }
    assert_eq!(agg.result().unwrap(), Value::BigInt(25));
    let err = agg.add(&[Value::Int(1)]).unwrap_err();
    assert!(matches!(err, Error::MixedKindInput { .. }));
    assert_eq!(agg.result().unwrap(), Value::BigInt(25));
}
