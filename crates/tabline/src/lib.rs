//! Tabline: line-chart series inference for pasted tabular text.
//!
//! Tabline takes delimiter-separated text (typed, pasted from a spreadsheet,
//! or produced by a [`TableGrid`]), picks the delimiter, decides which
//! columns are numeric series, and builds one data point per row. The
//! result feeds a renderer together with a [`StyleConfig`].
//!
//! # Pipeline
//!
//! - **Detect**: choose comma, tab or semicolon from the header line and
//!   extract cleaned headers.
//! - **Classify**: sample the first rows to find numeric columns, falling
//!   back to every non-label column when none qualify.
//! - **Materialize**: build a [`DataPoint`] per data line; anything that is
//!   not a number becomes 0.
//!
//! # Example
//!
//! ```
//! let chart = tabline::parse("Month, Sales, Expenses\nJan, 4000, 2400\nFeb, 3000, 1398").unwrap();
//!
//! assert_eq!(chart.series_keys, vec!["Sales", "Expenses"]);
//! assert_eq!(chart.points[0].value("Sales"), Some(4000.0));
//! ```

pub mod error;
pub mod grid;
pub mod inference;
pub mod input;
pub mod series;
pub mod session;
pub mod style;

mod tabline;

pub use crate::tabline::{InferenceConfig, ParsedChart, Tabline, parse};
pub use error::{Result, TablineError};
pub use grid::TableGrid;
pub use inference::{DataPoint, SeriesSelection};
pub use input::Delimiter;
pub use series::SeriesStyle;
pub use session::{ChartSession, ParseStatus};
pub use style::{AxisBound, AxisDomain, StyleConfig, StyleUpdate, SuggestedConfig};
