//! The style configuration record and its value types.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::domain::{MAX_TICK_COUNT, MAX_TICK_DECIMALS};
use super::keyword;
use super::suggestion::{DEFAULT_TITLE, DEFAULT_X_LABEL, DEFAULT_Y_LABEL, SuggestedConfig};
use crate::error::{Result, TablineError};

/// Where an axis label sits relative to its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelPosition {
    Top,
    Bottom,
    Left,
    Right,
    Center,
    InsideTop,
    InsideBottom,
    InsideLeft,
    InsideRight,
}

impl FromStr for LabelPosition {
    type Err = TablineError;

    fn from_str(s: &str) -> Result<Self> {
        match keyword(s).as_str() {
            "top" => Ok(LabelPosition::Top),
            "bottom" => Ok(LabelPosition::Bottom),
            "left" => Ok(LabelPosition::Left),
            "right" => Ok(LabelPosition::Right),
            "center" | "centre" => Ok(LabelPosition::Center),
            "insidetop" => Ok(LabelPosition::InsideTop),
            "insidebottom" => Ok(LabelPosition::InsideBottom),
            "insideleft" => Ok(LabelPosition::InsideLeft),
            "insideright" => Ok(LabelPosition::InsideRight),
            _ => Err(TablineError::Config(format!("Unknown label position: '{}'", s))),
        }
    }
}

/// Line interpolation between points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveType {
    Linear,
    #[default]
    Monotone,
    Step,
}

impl FromStr for CurveType {
    type Err = TablineError;

    fn from_str(s: &str) -> Result<Self> {
        match keyword(s).as_str() {
            "linear" => Ok(CurveType::Linear),
            "monotone" => Ok(CurveType::Monotone),
            "step" => Ok(CurveType::Step),
            _ => Err(TablineError::Config(format!("Unknown curve type: '{}'", s))),
        }
    }
}

/// Legend placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl FromStr for LegendPosition {
    type Err = TablineError;

    fn from_str(s: &str) -> Result<Self> {
        match keyword(s).as_str() {
            "top" => Ok(LegendPosition::Top),
            "bottom" => Ok(LegendPosition::Bottom),
            "left" => Ok(LegendPosition::Left),
            "right" => Ok(LegendPosition::Right),
            _ => Err(TablineError::Config(format!("Unknown legend position: '{}'", s))),
        }
    }
}

/// An axis bound: computed from data, or fixed.
///
/// Serialized as the sentinel string `"auto"` or a number. On input, numeric
/// strings are accepted and any other text reads as auto.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "AxisBoundRepr", into = "AxisBoundRepr")]
pub enum AxisBound {
    #[default]
    Auto,
    Value(f64),
}

impl AxisBound {
    /// The fixed value, if any.
    pub fn value(self) -> Option<f64> {
        match self {
            AxisBound::Auto => None,
            AxisBound::Value(v) => Some(v),
        }
    }

    /// Read a bound from user text; anything but a finite number is auto.
    pub fn from_text(text: &str) -> Self {
        match text.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => AxisBound::Value(v),
            _ => AxisBound::Auto,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum AxisBoundRepr {
    Number(f64),
    Text(String),
}

impl From<AxisBoundRepr> for AxisBound {
    fn from(repr: AxisBoundRepr) -> Self {
        match repr {
            AxisBoundRepr::Number(v) if v.is_finite() => AxisBound::Value(v),
            AxisBoundRepr::Number(_) => AxisBound::Auto,
            AxisBoundRepr::Text(text) => AxisBound::from_text(&text),
        }
    }
}

impl From<AxisBound> for AxisBoundRepr {
    fn from(bound: AxisBound) -> Self {
        match bound {
            AxisBound::Auto => AxisBoundRepr::Text("auto".to_string()),
            AxisBound::Value(v) => AxisBoundRepr::Number(v),
        }
    }
}

/// Every user-adjustable rendering option of a line chart.
///
/// Missing fields take their defaults when deserializing, so a style file
/// only needs the options it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    // Title
    pub title: String,
    pub title_font_size: f64,
    pub title_color: String,

    // Axis labels
    pub x_axis_label: String,
    pub x_label_position: LabelPosition,
    pub x_label_offset: f64,
    pub y_axis_label: String,
    pub y_label_position: LabelPosition,
    pub y_label_offset: f64,

    // Axes
    pub axis_color: String,
    pub axis_width: f64,
    pub y_min: AxisBound,
    pub y_max: AxisBound,
    /// Pull the y domain to include zero.
    pub y_starts_at_zero: bool,

    // Ticks
    pub x_tick_count: usize,
    pub y_tick_count: usize,
    pub tick_font_size: f64,
    pub tick_color: String,
    /// Decimal places shown on y tick labels.
    pub tick_decimals: usize,

    // Grid
    pub show_grid: bool,
    pub grid_color: String,
    /// SVG-style dash array, e.g. `"3 3"`; empty for solid.
    pub grid_dash: String,

    // Lines and dots
    pub line_width: f64,
    pub curve: CurveType,
    pub show_dots: bool,
    pub dot_radius: f64,

    // Legend
    pub show_legend: bool,
    pub legend_position: LegendPosition,

    // Canvas
    pub background_color: String,
    pub font_family: String,
    pub width: u32,
    pub height: u32,

    // Arrow decorations at the positive end of each axis
    pub show_x_arrow: bool,
    pub show_y_arrow: bool,
    pub arrow_size: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            title_font_size: 20.0,
            title_color: "#333333".to_string(),

            x_axis_label: DEFAULT_X_LABEL.to_string(),
            x_label_position: LabelPosition::InsideBottom,
            x_label_offset: -5.0,
            y_axis_label: DEFAULT_Y_LABEL.to_string(),
            y_label_position: LabelPosition::InsideLeft,
            y_label_offset: 10.0,

            axis_color: "#666666".to_string(),
            axis_width: 1.0,
            y_min: AxisBound::Auto,
            y_max: AxisBound::Auto,
            y_starts_at_zero: false,

            x_tick_count: 5,
            y_tick_count: 5,
            tick_font_size: 12.0,
            tick_color: "#666666".to_string(),
            tick_decimals: 0,

            show_grid: true,
            grid_color: "#e0e0e0".to_string(),
            grid_dash: "3 3".to_string(),

            line_width: 2.0,
            curve: CurveType::Monotone,
            show_dots: true,
            dot_radius: 4.0,

            show_legend: true,
            legend_position: LegendPosition::Bottom,

            background_color: "#ffffff".to_string(),
            font_family: "sans-serif".to_string(),
            width: 800,
            height: 500,

            show_x_arrow: false,
            show_y_arrow: false,
            arrow_size: 8.0,
        }
    }
}

impl StyleConfig {
    /// Copy the suggested title, axis labels and label positions.
    pub fn with_suggestion(&self, suggestion: &SuggestedConfig) -> StyleConfig {
        StyleConfig {
            title: suggestion.title.clone(),
            x_axis_label: suggestion.x_axis_label.clone(),
            y_axis_label: suggestion.y_axis_label.clone(),
            x_label_position: suggestion.x_label_position,
            y_label_position: suggestion.y_label_position,
            ..self.clone()
        }
    }

    /// Check tick counts and decimals against their ceilings.
    pub fn validate(&self) -> Result<()> {
        let limits = [
            ("x_tick_count", self.x_tick_count, MAX_TICK_COUNT),
            ("y_tick_count", self.y_tick_count, MAX_TICK_COUNT),
            ("tick_decimals", self.tick_decimals, MAX_TICK_DECIMALS),
        ];

        for (field, value, max) in limits {
            if value > max {
                return Err(TablineError::Config(format!(
                    "{} is {}, at most {} allowed",
                    field, value, max
                )));
            }
        }

        Ok(())
    }

    /// Load a style file written as JSON and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| TablineError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let style: StyleConfig = serde_json::from_reader(BufReader::new(file))?;
        style.validate()?;
        Ok(style)
    }

    /// Save as pretty JSON, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| TablineError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let file = File::create(path).map_err(|e| TablineError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}
