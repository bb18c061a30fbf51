use std::sync::Arc;

use arrow::array::{
    Array, ArrayRef, Int32Array, Int64Array, Int64Builder, LargeStringArray, StringArray,
};
use arrow::datatypes::{DataType, Field};
use custype_result::{Error, Result};

use crate::AggregateResult;

/// One input value for the RANGE aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeValue {
    Text(String),
    Integer(i64),
}

impl RangeValue {
    pub fn kind_name(&self) -> &'static str {
        match self {
            RangeValue::Text(_) => "text",
            RangeValue::Integer(_) => "integer",
        }
    }
}

impl From<&str> for RangeValue {
    fn from(v: &str) -> Self {
        RangeValue::Text(v.to_string())
    }
}

impl From<String> for RangeValue {
    fn from(v: String) -> Self {
        RangeValue::Text(v)
    }
}

impl From<i64> for RangeValue {
    fn from(v: i64) -> Self {
        RangeValue::Integer(v)
    }
}

impl From<i32> for RangeValue {
    fn from(v: i32) -> Self {
        RangeValue::Integer(v.into())
    }
}

/// Outcome of [`RangeAccumulator::result`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeResult {
    /// Fewer than two values have been seen.
    NoResult,
    /// `max - min` under the kind's distance function.
    Range(i64),
}

impl RangeResult {
    pub fn value(self) -> Option<i64> {
        match self {
            RangeResult::NoResult => None,
            RangeResult::Range(v) => Some(v),
        }
    }
}

/// Signed distance between two strings.
///
/// The difference of the first differing characters (as Unicode scalar
/// values), or the difference in character count when one string is a
/// prefix of the other. Its sign agrees with `a.cmp(b)` but it is not a
/// metric: `"b"` and `"azzz"` are 1 apart.
pub fn ordinal_distance(a: &str, b: &str) -> i64 {
    let mut left = a.chars();
    let mut right = b.chars();
    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) if x != y => {
                return i64::from(u32::from(x)) - i64::from(u32::from(y));
            }
            (Some(_), Some(_)) => continue,
            (Some(_), None) => return 1 + left.count() as i64,
            (None, Some(_)) => return -(1 + right.count() as i64),
            (None, None) => return 0,
        }
    }
}

/// Bounds seen so far. The variant is fixed by the first value.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Bounds {
    Empty,
    Text { min: String, max: String },
    Integer { min: i64, max: i64 },
}

impl Bounds {
    fn kind_name(&self) -> &'static str {
        match self {
            Bounds::Empty => "empty",
            Bounds::Text { .. } => "text",
            Bounds::Integer { .. } => "integer",
        }
    }

    fn distance(&self) -> Option<i64> {
        match self {
            Bounds::Empty => None,
            Bounds::Text { min, max } => Some(ordinal_distance(max, min)),
            Bounds::Integer { min, max } => {
                let range = max.wrapping_sub(*min);
                if max.checked_sub(*min).is_none() {
                    tracing::warn!(min, max, range, "integer range overflowed i64 and wrapped");
                }
                Some(range)
            }
        }
    }
}

/// Streaming max - min accumulator for one group.
///
/// Starts empty. The first value fixes the kind and both bounds; each later
/// value widens whichever bound it exceeds and refreshes the cached result.
/// [`RangeAccumulator::result`] may be read at any point and reflects only
/// the values seen so far.
///
/// One instance per group and never shared while being fed. Parallel
/// partial accumulators are combined with [`RangeAccumulator::merge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeAccumulator {
    count: u64,
    bounds: Bounds,
    result: RangeResult,
}

impl Default for RangeAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeAccumulator {
    pub fn new() -> Self {
        Self {
            count: 0,
            bounds: Bounds::Empty,
            result: RangeResult::NoResult,
        }
    }

    /// Rows accepted so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn result(&self) -> RangeResult {
        self.result
    }

    pub fn min(&self) -> Option<RangeValue> {
        match &self.bounds {
            Bounds::Empty => None,
            Bounds::Text { min, .. } => Some(RangeValue::Text(min.clone())),
            Bounds::Integer { min, .. } => Some(RangeValue::Integer(*min)),
        }
    }

    pub fn max(&self) -> Option<RangeValue> {
        match &self.bounds {
            Bounds::Empty => None,
            Bounds::Text { max, .. } => Some(RangeValue::Text(max.clone())),
            Bounds::Integer { max, .. } => Some(RangeValue::Integer(*max)),
        }
    }

    /// Feed one value.
    ///
    /// A value of a different kind than the first is rejected with
    /// [`Error::MixedKindInput`] and leaves the accumulator untouched.
    pub fn add(&mut self, value: impl Into<RangeValue>) -> AggregateResult<()> {
        match (&mut self.bounds, value.into()) {
            (slot @ Bounds::Empty, RangeValue::Text(v)) => {
                *slot = Bounds::Text {
                    min: v.clone(),
                    max: v,
                };
            }
            (slot @ Bounds::Empty, RangeValue::Integer(v)) => {
                *slot = Bounds::Integer { min: v, max: v };
            }
            (Bounds::Text { min, max }, RangeValue::Text(v)) => {
                if v > *max {
                    max.clone_from(&v);
                }
                if v < *min {
                    *min = v;
                }
            }
            (Bounds::Integer { min, max }, RangeValue::Integer(v)) => {
                if v < *min {
                    *min = v;
                }
                if v > *max {
                    *max = v;
                }
            }
            (bounds, value) => {
                tracing::debug!(
                    expected = bounds.kind_name(),
                    got = value.kind_name(),
                    "rejecting mixed kind input"
                );
                return Err(Error::MixedKindInput {
                    expected: bounds.kind_name(),
                    got: value.kind_name(),
                });
            }
        }
        self.count += 1;
        if self.count >= 2 {
            self.refresh();
        }
        Ok(())
    }

    fn refresh(&mut self) {
        if let Some(range) = self.bounds.distance() {
            self.result = RangeResult::Range(range);
        }
    }

    /// Fold a disjoint partial accumulator into this one.
    ///
    /// Same bounds, count and result as feeding `other`'s values into `self`.
    pub fn merge(&mut self, other: RangeAccumulator) -> AggregateResult<()> {
        let RangeAccumulator { count, bounds, .. } = other;
        match (&mut self.bounds, bounds) {
            (_, Bounds::Empty) => return Ok(()),
            (slot @ Bounds::Empty, bounds) => *slot = bounds,
            (
                Bounds::Text { min, max },
                Bounds::Text {
                    min: other_min,
                    max: other_max,
                },
            ) => {
                if other_min < *min {
                    *min = other_min;
                }
                if other_max > *max {
                    *max = other_max;
                }
            }
            (
                Bounds::Integer { min, max },
                Bounds::Integer {
                    min: other_min,
                    max: other_max,
                },
            ) => {
                *min = (*min).min(other_min);
                *max = (*max).max(other_max);
            }
            (bounds, other_bounds) => {
                return Err(Error::MixedKindInput {
                    expected: bounds.kind_name(),
                    got: other_bounds.kind_name(),
                });
            }
        }
        self.count += count;
        if self.count >= 2 {
            self.refresh();
        }
        Ok(())
    }

    /// Feed a whole column chunk, skipping NULL slots.
    pub fn update_array(&mut self, array: &ArrayRef) -> AggregateResult<()> {
        match array.data_type() {
            DataType::Utf8 => {
                let array = downcast::<StringArray>(array)?;
                for i in 0..array.len() {
                    if array.is_valid(i) {
                        self.add(array.value(i))?;
                    }
                }
            }
            DataType::LargeUtf8 => {
                let array = downcast::<LargeStringArray>(array)?;
                for i in 0..array.len() {
                    if array.is_valid(i) {
                        self.add(array.value(i))?;
                    }
                }
            }
            DataType::Int64 => {
                let array = downcast::<Int64Array>(array)?;
                for i in 0..array.len() {
                    if array.is_valid(i) {
                        self.add(array.value(i))?;
                    }
                }
            }
            DataType::Int32 => {
                let array = downcast::<Int32Array>(array)?;
                for i in 0..array.len() {
                    if array.is_valid(i) {
                        self.add(array.value(i))?;
                    }
                }
            }
            other => {
                return Err(Error::InvalidArgumentError(format!(
                    "RANGE aggregate expected a text or integer column, got {other}"
                )));
            }
        }
        Ok(())
    }

    /// Finalize into a single-row Arrow column. `NoResult` becomes NULL.
    pub fn finalize(self) -> AggregateResult<(Field, ArrayRef)> {
        let mut builder = Int64Builder::with_capacity(1);
        match self.result {
            RangeResult::Range(v) => builder.append_value(v),
            RangeResult::NoResult => builder.append_null(),
        }
        let array = Arc::new(builder.finish()) as ArrayRef;
        Ok((Field::new("range", DataType::Int64, true), array))
    }
}

fn downcast<T: Array + 'static>(array: &ArrayRef) -> Result<&T> {
    array.as_any().downcast_ref::<T>().ok_or_else(|| {
        Error::Internal(format!(
            "column reported {} but did not downcast",
            array.data_type()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_distance_first_difference_or_length() {
        assert_eq!(ordinal_distance("zebra", "apple"), 25);
        assert_eq!(ordinal_distance("apple", "zebra"), -25);
        assert_eq!(ordinal_distance("abc", "ab"), 1);
        assert_eq!(ordinal_distance("ab", "abcd"), -2);
        assert_eq!(ordinal_distance("", ""), 0);
        assert_eq!(ordinal_distance("b", "azzz"), 1);
        assert_eq!(ordinal_distance("é", "e"), 0xe9 - 0x65);
    }

    #[test]
    fn distance_sign_agrees_with_ordering() {
        let words = ["", "a", "ab", "abc", "b", "ba", "Z", "zz", "é"];
        for a in words {
            for b in words {
                assert_eq!(ordinal_distance(a, b).cmp(&0), a.cmp(b), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn mixed_kinds_leave_state_untouched() {
        let mut acc = RangeAccumulator::new();
        acc.add(5i64).unwrap();
        let before = acc.clone();
        let err = acc.add("five").unwrap_err();
        assert_eq!(
            err,
            Error::MixedKindInput {
                expected: "integer",
                got: "text"
            }
        );
        assert_eq!(acc, before);
    }

    #[test]
    fn integer_range_wraps_on_overflow() {
        let mut acc = RangeAccumulator::new();
        acc.add(i64::MIN).unwrap();
        acc.add(i64::MAX).unwrap();
        assert_eq!(acc.result(), RangeResult::Range(i64::MAX.wrapping_sub(i64::MIN)));
    }
}
