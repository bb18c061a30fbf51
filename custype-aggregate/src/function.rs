use custype_result::Error;
use custype_types::{Session, Value, ValueType};

use crate::AggregateResult;
use crate::range::{RangeAccumulator, RangeResult, RangeValue};

/// Row-at-a-time aggregate protocol driven by the host's aggregation loop.
///
/// The host creates one instance per group, calls [`init`](Self::init) once,
/// [`add`](Self::add) once per input row, and may call
/// [`result`](Self::result) any number of times.
pub trait AggregateFunction {
    fn init(&mut self, session: &dyn Session) -> AggregateResult<()>;

    /// Result kind given the input column kinds. Also checks arity.
    fn result_type(&self, input_types: &[ValueType]) -> AggregateResult<ValueType>;

    /// Feed one row. Rows arrive as a fixed-size tuple of column values.
    fn add(&mut self, row: &[Value]) -> AggregateResult<()>;

    fn result(&self) -> AggregateResult<Value>;
}

/// `RANGE(column)`: max - min over a text or integer column.
#[derive(Debug, Clone, Default)]
pub struct RangeAggregate {
    accumulator: RangeAccumulator,
}

impl RangeAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accumulator(&self) -> &RangeAccumulator {
        &self.accumulator
    }

    pub fn into_accumulator(self) -> RangeAccumulator {
        self.accumulator
    }
}

fn single_column<T>(columns: &[T]) -> AggregateResult<&T> {
    match columns {
        [only] => Ok(only),
        _ => Err(Error::InvalidArgumentError(format!(
            "RANGE takes exactly one argument, got {}",
            columns.len()
        ))),
    }
}

impl AggregateFunction for RangeAggregate {
    fn init(&mut self, session: &dyn Session) -> AggregateResult<()> {
        tracing::trace!(session = session.session_id(), "RANGE aggregate init");
        Ok(())
    }

    fn result_type(&self, input_types: &[ValueType]) -> AggregateResult<ValueType> {
        match single_column(input_types)? {
            ValueType::String | ValueType::Int | ValueType::BigInt => Ok(ValueType::BigInt),
            other => Err(Error::InvalidArgumentError(format!(
                "RANGE expects a text or integer column, got {other}"
            ))),
        }
    }

    /// NULL is skipped and does not count as a row.
    fn add(&mut self, row: &[Value]) -> AggregateResult<()> {
        let value = match single_column(row)? {
            Value::Null => return Ok(()),
            Value::String(s) => RangeValue::Text(s.clone()),
            Value::Int(v) => RangeValue::Integer((*v).into()),
            Value::BigInt(v) => RangeValue::Integer(*v),
            other => {
                return Err(Error::InvalidArgumentError(format!(
                    "RANGE expects text or integer values, got {}",
                    other.value_type()
                )));
            }
        };
        self.accumulator.add(value)
    }

    fn result(&self) -> AggregateResult<Value> {
        Ok(match self.accumulator.result() {
            RangeResult::Range(v) => Value::BigInt(v),
            RangeResult::NoResult => Value::Null,
        })
    }
}
