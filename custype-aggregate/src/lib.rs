//! RANGE aggregate: streaming `max - min` over a text or integer column.
//!
//! - [`RangeAccumulator`]: the per-group state machine (empty, then
//!   accumulating), fed one value at a time or one Arrow chunk at a time.
//! - [`RangeAggregate`]: the row protocol (`init`, `add`, `result`) the host
//!   aggregation driver calls, via [`AggregateFunction`].
//! - [`RangeStream`]: iterator adapter that folds column chunks into a
//!   one-row `RecordBatch`.
//!
//! Text values order by code point and their distance is the code point
//! difference at the first mismatch (see [`ordinal_distance`]); integers use
//! plain subtraction, wrapping on overflow.

use custype_result::Error;

pub mod function;
pub mod range;
pub mod stream;

pub use function::{AggregateFunction, RangeAggregate};
pub use range::{RangeAccumulator, RangeResult, RangeValue, ordinal_distance};
pub use stream::RangeStream;

pub type AggregateResult<T> = Result<T, Error>;
