//! Parse session holding the last successful chart.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::style::{StyleConfig, StyleUpdate};
use crate::tabline::{ParsedChart, Tabline};

/// Message shown for any failed parse.
pub const PARSE_FAILURE_MESSAGE: &str =
    "Could not parse the data. Provide a header line and at least one data row.";

/// Outward state of the most recent submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseStatus {
    #[default]
    Idle,
    Parsing,
    Success,
    Error,
}

impl ParseStatus {
    /// Generic user-facing notice for this state, if any.
    pub fn message(self) -> Option<&'static str> {
        match self {
            ParseStatus::Error => Some(PARSE_FAILURE_MESSAGE),
            _ => None,
        }
    }
}

/// Holds the displayed chart and style across parse attempts.
///
/// A failed submission leaves both untouched.
#[derive(Debug, Clone, Default)]
pub struct ChartSession {
    engine: Tabline,
    status: ParseStatus,
    chart: Option<ParsedChart>,
    style: StyleConfig,
}

impl ChartSession {
    pub fn new(engine: Tabline) -> Self {
        Self {
            engine,
            status: ParseStatus::Idle,
            chart: None,
            style: StyleConfig::default(),
        }
    }

    /// Start from an existing style instead of the defaults.
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    pub fn status(&self) -> ParseStatus {
        self.status
    }

    /// The last successfully parsed chart.
    pub fn chart(&self) -> Option<&ParsedChart> {
        self.chart.as_ref()
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Parse `text` and, on success, replace the chart and merge the
    /// suggested labels into the style.
    pub fn submit(&mut self, text: &str) -> ParseStatus {
        self.status = ParseStatus::Parsing;

        match self.engine.parse(text) {
            Ok(chart) => {
                info!(
                    series = chart.series_keys.len(),
                    rows = chart.row_count(),
                    "chart data updated"
                );
                self.style = self.style.with_suggestion(&chart.suggested);
                self.chart = Some(chart);
                self.status = ParseStatus::Success;
            }
            Err(e) => {
                warn!(error = %e, "parse failed, keeping previous chart");
                self.status = ParseStatus::Error;
            }
        }

        self.status
    }

    /// Apply a field-level style change.
    pub fn update_style(&mut self, update: StyleUpdate) {
        self.style = self.style.apply(update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let session = ChartSession::default();
        assert_eq!(session.status(), ParseStatus::Idle);
        assert!(session.chart().is_none());
        assert_eq!(session.status().message(), None);
    }

    #[test]
    fn test_success_merges_suggestion() {
        let mut session = ChartSession::default();
        let status = session.submit("Month,Sales\nJan,4000");

        assert_eq!(status, ParseStatus::Success);
        assert_eq!(session.chart().unwrap().series_keys, vec!["Sales"]);
        assert_eq!(session.style().x_axis_label, "Month");
        assert_eq!(session.style().y_axis_label, "Sales");
    }

    #[test]
    fn test_failure_keeps_previous_chart_and_style() {
        let mut session = ChartSession::default();
        session.submit("Month,Sales\nJan,4000");
        session.update_style(StyleUpdate::Title("Kept".into()));
        let before = session.chart().cloned();

        let status = session.submit("only a header");

        assert_eq!(status, ParseStatus::Error);
        assert_eq!(session.chart().cloned(), before);
        assert_eq!(session.style().title, "Kept");
        assert_eq!(session.status().message(), Some(PARSE_FAILURE_MESSAGE));
    }

    #[test]
    fn test_failure_before_any_success() {
        let mut session = ChartSession::default();
        assert_eq!(session.submit(""), ParseStatus::Error);
        assert!(session.chart().is_none());
    }

    #[test]
    fn test_update_style() {
        let mut session = ChartSession::new(Tabline::new()).with_style(StyleConfig {
            width: 640,
            ..StyleConfig::default()
        });
        session.update_style(StyleUpdate::ShowLegend(false));

        assert!(!session.style().show_legend);
        assert_eq!(session.style().width, 640);
    }
}
