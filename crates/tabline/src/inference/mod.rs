//! Series inference: numeric sniffing, column classification and row materialization.

mod classify;
mod materialize;
mod numeric;

pub use classify::{DEFAULT_SAMPLE_ROWS, SeriesSelection, classify_columns};
pub use materialize::{DataPoint, Materialized, materialize};
pub use numeric::parse_number;
