//! Main Tabline struct and public API.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TablineError};
use crate::inference::{DEFAULT_SAMPLE_ROWS, DataPoint, SeriesSelection, materialize};
use crate::input::{Delimiter, detect_with};
use crate::series::{SeriesStyle, assign_colors};
use crate::style::SuggestedConfig;

/// Configuration for series inference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Delimiter to use (None = auto-detect from the header line).
    pub delimiter: Option<Delimiter>,
    /// Leading data rows examined when classifying numeric columns.
    pub sample_rows: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            sample_rows: DEFAULT_SAMPLE_ROWS,
        }
    }
}

/// Everything inferred from one piece of tabular text.
///
/// JSON output is lossy for two inputs: infinite series values (`"Infinity"`
/// cells) are written as `null`, and a series header named `label` collides
/// with the point label (see [`DataPoint`]). Such output does not read back
/// into a `ParsedChart`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedChart {
    pub delimiter: Delimiter,
    pub headers: Vec<String>,
    /// One point per data line, in input order.
    pub points: Vec<DataPoint>,
    pub series_keys: Vec<String>,
    pub selection: SeriesSelection,
    pub suggested: SuggestedConfig,
}

impl ParsedChart {
    pub fn row_count(&self) -> usize {
        self.points.len()
    }

    /// Minimum and maximum finite value of one series.
    pub fn series_range(&self, key: &str) -> Option<(f64, f64)> {
        self.points
            .iter()
            .filter_map(|p| p.value(key))
            .filter(|v| v.is_finite())
            .fold(None, |range, v| match range {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Names and palette colours for the selected series.
    pub fn series_styles(&self) -> Vec<SeriesStyle> {
        assign_colors(&self.series_keys)
    }
}

/// The series inference engine.
///
/// Stateless apart from its configuration: parsing the same text twice
/// yields equal results.
#[derive(Debug, Clone, Default)]
pub struct Tabline {
    config: InferenceConfig,
}

impl Tabline {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(InferenceConfig::default())
    }

    /// Create an engine with custom configuration.
    pub fn with_config(config: InferenceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Infer headers, series and data points from delimiter-separated text.
    ///
    /// Fails only when the text has fewer than two non-empty lines.
    pub fn parse(&self, text: &str) -> Result<ParsedChart> {
        let schema = detect_with(text, self.config.delimiter)?;

        let materialized = materialize(
            schema.table.data_lines(),
            &schema.headers,
            schema.delimiter,
            self.config.sample_rows,
        );

        debug!(
            delimiter = %schema.delimiter,
            series = ?materialized.series_keys,
            rows = materialized.points.len(),
            "parsed chart data"
        );

        Ok(ParsedChart {
            delimiter: schema.delimiter,
            headers: schema.headers,
            points: materialized.points,
            series_keys: materialized.series_keys,
            selection: materialized.selection,
            suggested: materialized.suggested,
        })
    }

    /// Read a file and parse its contents.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<ParsedChart> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| TablineError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.parse(&text)
    }
}

/// Parse text with the default configuration.
pub fn parse(text: &str) -> Result<ParsedChart> {
    Tabline::new().parse(text)
}
