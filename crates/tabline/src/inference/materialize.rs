//! Row materialization: one data point per data line.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::classify::{SeriesSelection, classify_columns};
use super::numeric::parse_number;
use crate::input::{Delimiter, split_line};
use crate::style::SuggestedConfig;

/// One chart point: the category label plus a value per series.
///
/// Serializes as one flat object, `{"label": ..., "<series>": value, ...}`.
/// A series header literally named `label` therefore repeats the `label` key
/// in JSON output, and reading that JSON back keeps only one of the two; the
/// struct itself holds both. Infinite values serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Cell from the label column, empty when the row had none.
    pub label: String,
    /// Series key to value, in series order.
    #[serde(flatten)]
    pub values: IndexMap<String, f64>,
}

impl DataPoint {
    /// Value for a series key.
    pub fn value(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }
}

/// Output of the classifier and materializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Materialized {
    pub points: Vec<DataPoint>,
    /// Header names of the selected columns, in column order.
    pub series_keys: Vec<String>,
    pub selection: SeriesSelection,
    pub suggested: SuggestedConfig,
}

/// Classify columns and build one data point per data line.
///
/// Every line is split on the same `delimiter`. Cells that do not parse as
/// numbers, and cells missing from short rows, become 0.
pub fn materialize(
    data_lines: &[String],
    headers: &[String],
    delimiter: Delimiter,
    sample_rows: usize,
) -> Materialized {
    let rows: Vec<Vec<String>> = data_lines
        .iter()
        .map(|line| split_line(line, delimiter))
        .filter(|cells| !cells.is_empty())
        .collect();

    let selection = classify_columns(&rows, headers.len(), sample_rows);
    let indices = selection.indices();

    let series_keys: Vec<String> = indices.iter().map(|&i| headers[i].clone()).collect();

    let points: Vec<DataPoint> = rows
        .iter()
        .map(|cells| {
            let label = cells.first().cloned().unwrap_or_default();
            let mut values = IndexMap::with_capacity(indices.len());
            for &index in indices {
                let value = cells
                    .get(index)
                    .and_then(|cell| parse_number(cell))
                    .unwrap_or(0.0);
                values.insert(headers[index].clone(), value);
            }
            DataPoint { label, values }
        })
        .collect();

    debug!(
        points = points.len(),
        series = series_keys.len(),
        fallback = selection.is_fallback(),
        "materialized rows"
    );

    let suggested = SuggestedConfig::for_table(headers, &series_keys);

    Materialized {
        points,
        series_keys,
        selection,
        suggested,
    }
}
