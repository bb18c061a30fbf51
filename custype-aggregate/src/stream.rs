use std::sync::Arc;

use arrow::array::{ArrayRef, RecordBatch};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use custype_result::Error;

use crate::range::RangeAccumulator;

/// Drives a [`RangeAccumulator`] over a stream of column chunks and yields a
/// single one-row batch holding the result.
pub struct RangeStream<I> {
    accumulator: RangeAccumulator,
    input: I,
    done: bool,
    schema: SchemaRef,
}

impl<I> RangeStream<I>
where
    I: Iterator<Item = Result<ArrayRef, Error>>,
{
    pub fn new(input: I, alias: impl Into<String>) -> Self {
        let schema = Arc::new(Schema::new(vec![Field::new(
            alias.into(),
            DataType::Int64,
            true,
        )]));
        Self {
            accumulator: RangeAccumulator::new(),
            input,
            done: false,
            schema,
        }
    }

    pub fn schema(&self) -> SchemaRef {
        self.schema.clone()
    }
}

impl<I> Iterator for RangeStream<I>
where
    I: Iterator<Item = Result<ArrayRef, Error>>,
{
    type Item = Result<RecordBatch, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for chunk in self.input.by_ref() {
            let chunk = match chunk {
                Ok(c) => c,
                Err(e) => return Some(Err(e)),
            };
            if let Err(e) = self.accumulator.update_array(&chunk) {
                return Some(Err(e));
            }
        }

        self.done = true;

        let accumulator = std::mem::take(&mut self.accumulator);
        tracing::trace!(rows = accumulator.count(), "RANGE stream finalized");
        let (_field, array) = match accumulator.finalize() {
            Ok(res) => res,
            Err(e) => return Some(Err(e)),
        };
        Some(RecordBatch::try_new(self.schema.clone(), vec![array]).map_err(Error::from))
    }
}
