//! Style hints derived from a parsed table.

use serde::{Deserialize, Serialize};

use super::config::LabelPosition;

/// Title placeholder until the user names the chart.
pub const DEFAULT_TITLE: &str = "Chart Title";
/// X-axis label when the label column has no header.
pub const DEFAULT_X_LABEL: &str = "X Axis";
/// Y-axis label unless exactly one series is plotted.
pub const DEFAULT_Y_LABEL: &str = "Value";

/// Partial style configuration suggested by the materializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedConfig {
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub x_label_position: LabelPosition,
    pub y_label_position: LabelPosition,
}

impl SuggestedConfig {
    /// Suggest labels for a table with these headers and selected series.
    pub fn for_table(headers: &[String], series_keys: &[String]) -> Self {
        let x_axis_label = headers
            .first()
            .filter(|h| !h.is_empty())
            .cloned()
            .unwrap_or_else(|| DEFAULT_X_LABEL.to_string());

        let y_axis_label = match series_keys {
            [only] => only.clone(),
            _ => DEFAULT_Y_LABEL.to_string(),
        };

        Self {
            title: DEFAULT_TITLE.to_string(),
            x_axis_label,
            y_axis_label,
            x_label_position: LabelPosition::InsideBottom,
            y_label_position: LabelPosition::InsideLeft,
        }
    }
}
