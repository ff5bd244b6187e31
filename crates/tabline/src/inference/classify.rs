//! Numeric column classification over a leading sample of rows.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::numeric::parse_number;

/// Number of leading data rows examined when classifying columns.
pub const DEFAULT_SAMPLE_ROWS: usize = 5;

/// Which columns became series, and how they were chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "columns", rename_all = "snake_case")]
pub enum SeriesSelection {
    /// Columns that passed the numeric check, ascending.
    Classified(Vec<usize>),
    /// No column passed; every non-label column is used and coerced.
    Fallback(Vec<usize>),
}

impl SeriesSelection {
    /// Selected column indices in ascending order.
    pub fn indices(&self) -> &[usize] {
        match self {
            SeriesSelection::Classified(indices) | SeriesSelection::Fallback(indices) => indices,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, SeriesSelection::Fallback(_))
    }
}

/// Classify columns `1..column_count` using the first `sample_rows` rows.
///
/// A column is numeric when every sampled row that has a cell at its index
/// parses as a number and at least one sampled row has such a cell. Rows
/// past the sample window are never consulted.
pub fn classify_columns(
    rows: &[Vec<String>],
    column_count: usize,
    sample_rows: usize,
) -> SeriesSelection {
    let sample = &rows[..rows.len().min(sample_rows)];

    let numeric: Vec<usize> = (1..column_count)
        .filter(|&index| is_numeric_column(sample, index))
        .collect();

    if numeric.is_empty() {
        let all: Vec<usize> = (1..column_count).collect();
        debug!(columns = all.len(), "no numeric column in sample, using fallback");
        SeriesSelection::Fallback(all)
    } else {
        debug!(columns = ?numeric, "classified numeric columns");
        SeriesSelection::Classified(numeric)
    }
}

fn is_numeric_column(sample: &[Vec<String>], index: usize) -> bool {
    let mut has_data = false;

    for cell in sample.iter().filter_map(|row| row.get(index)) {
        has_data = true;
        if parse_number(cell).is_none() {
            return false;
        }
    }

    has_data
}
