//! Field-level updates to a style configuration.

use std::str::FromStr;

use super::config::{AxisBound, CurveType, LabelPosition, LegendPosition, StyleConfig};
use super::domain::{MAX_TICK_COUNT, MAX_TICK_DECIMALS};
use crate::error::{Result, TablineError};

/// A change to exactly one style field.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleUpdate {
    Title(String),
    TitleFontSize(f64),
    TitleColor(String),
    XAxisLabel(String),
    XLabelPosition(LabelPosition),
    XLabelOffset(f64),
    YAxisLabel(String),
    YLabelPosition(LabelPosition),
    YLabelOffset(f64),
    AxisColor(String),
    AxisWidth(f64),
    YMin(AxisBound),
    YMax(AxisBound),
    YStartsAtZero(bool),
    XTickCount(usize),
    YTickCount(usize),
    TickFontSize(f64),
    TickColor(String),
    TickDecimals(usize),
    ShowGrid(bool),
    GridColor(String),
    GridDash(String),
    LineWidth(f64),
    Curve(CurveType),
    ShowDots(bool),
    DotRadius(f64),
    ShowLegend(bool),
    LegendPosition(LegendPosition),
    BackgroundColor(String),
    FontFamily(String),
    Width(u32),
    Height(u32),
    ShowXArrow(bool),
    ShowYArrow(bool),
    ArrowSize(f64),
}

impl StyleConfig {
    /// Return a copy of this configuration with one field changed.
    pub fn apply(&self, update: StyleUpdate) -> StyleConfig {
        let mut next = self.clone();
        match update {
            StyleUpdate::Title(v) => next.title = v,
            StyleUpdate::TitleFontSize(v) => next.title_font_size = v,
            StyleUpdate::TitleColor(v) => next.title_color = v,
            StyleUpdate::XAxisLabel(v) => next.x_axis_label = v,
            StyleUpdate::XLabelPosition(v) => next.x_label_position = v,
            StyleUpdate::XLabelOffset(v) => next.x_label_offset = v,
            StyleUpdate::YAxisLabel(v) => next.y_axis_label = v,
            StyleUpdate::YLabelPosition(v) => next.y_label_position = v,
            StyleUpdate::YLabelOffset(v) => next.y_label_offset = v,
            StyleUpdate::AxisColor(v) => next.axis_color = v,
            StyleUpdate::AxisWidth(v) => next.axis_width = v,
            StyleUpdate::YMin(v) => next.y_min = v,
            StyleUpdate::YMax(v) => next.y_max = v,
            StyleUpdate::YStartsAtZero(v) => next.y_starts_at_zero = v,
            StyleUpdate::XTickCount(v) => next.x_tick_count = v,
            StyleUpdate::YTickCount(v) => next.y_tick_count = v,
            StyleUpdate::TickFontSize(v) => next.tick_font_size = v,
            StyleUpdate::TickColor(v) => next.tick_color = v,
            StyleUpdate::TickDecimals(v) => next.tick_decimals = v,
            StyleUpdate::ShowGrid(v) => next.show_grid = v,
            StyleUpdate::GridColor(v) => next.grid_color = v,
            StyleUpdate::GridDash(v) => next.grid_dash = v,
            StyleUpdate::LineWidth(v) => next.line_width = v,
            StyleUpdate::Curve(v) => next.curve = v,
            StyleUpdate::ShowDots(v) => next.show_dots = v,
            StyleUpdate::DotRadius(v) => next.dot_radius = v,
            StyleUpdate::ShowLegend(v) => next.show_legend = v,
            StyleUpdate::LegendPosition(v) => next.legend_position = v,
            StyleUpdate::BackgroundColor(v) => next.background_color = v,
            StyleUpdate::FontFamily(v) => next.font_family = v,
            StyleUpdate::Width(v) => next.width = v,
            StyleUpdate::Height(v) => next.height = v,
            StyleUpdate::ShowXArrow(v) => next.show_x_arrow = v,
            StyleUpdate::ShowYArrow(v) => next.show_y_arrow = v,
            StyleUpdate::ArrowSize(v) => next.arrow_size = v,
        }
        next
    }
}

/// Parses `key=value`, where `key` is the field's serialized name.
impl FromStr for StyleUpdate {
    type Err = TablineError;

    fn from_str(s: &str) -> Result<Self> {
        let (key, value) = s.split_once('=').ok_or_else(|| {
            TablineError::Config(format!("Expected key=value, got '{}'", s))
        })?;
        let key = key.trim();

        let update = match key {
            "title" => StyleUpdate::Title(value.to_string()),
            "title_font_size" => StyleUpdate::TitleFontSize(number(key, value)?),
            "title_color" => StyleUpdate::TitleColor(value.trim().to_string()),
            "x_axis_label" => StyleUpdate::XAxisLabel(value.to_string()),
            "x_label_position" => StyleUpdate::XLabelPosition(value.parse()?),
            "x_label_offset" => StyleUpdate::XLabelOffset(number(key, value)?),
            "y_axis_label" => StyleUpdate::YAxisLabel(value.to_string()),
            "y_label_position" => StyleUpdate::YLabelPosition(value.parse()?),
            "y_label_offset" => StyleUpdate::YLabelOffset(number(key, value)?),
            "axis_color" => StyleUpdate::AxisColor(value.trim().to_string()),
            "axis_width" => StyleUpdate::AxisWidth(number(key, value)?),
            "y_min" => StyleUpdate::YMin(AxisBound::from_text(value)),
            "y_max" => StyleUpdate::YMax(AxisBound::from_text(value)),
            "y_starts_at_zero" => StyleUpdate::YStartsAtZero(flag(key, value)?),
            "x_tick_count" => StyleUpdate::XTickCount(count(key, value, MAX_TICK_COUNT)?),
            "y_tick_count" => StyleUpdate::YTickCount(count(key, value, MAX_TICK_COUNT)?),
            "tick_font_size" => StyleUpdate::TickFontSize(number(key, value)?),
            "tick_color" => StyleUpdate::TickColor(value.trim().to_string()),
            "tick_decimals" => StyleUpdate::TickDecimals(count(key, value, MAX_TICK_DECIMALS)?),
            "show_grid" => StyleUpdate::ShowGrid(flag(key, value)?),
            "grid_color" => StyleUpdate::GridColor(value.trim().to_string()),
            "grid_dash" => StyleUpdate::GridDash(value.trim().to_string()),
            "line_width" => StyleUpdate::LineWidth(number(key, value)?),
            "curve" => StyleUpdate::Curve(value.parse()?),
            "show_dots" => StyleUpdate::ShowDots(flag(key, value)?),
            "dot_radius" => StyleUpdate::DotRadius(number(key, value)?),
            "show_legend" => StyleUpdate::ShowLegend(flag(key, value)?),
            "legend_position" => StyleUpdate::LegendPosition(value.parse()?),
            "background_color" => StyleUpdate::BackgroundColor(value.trim().to_string()),
            "font_family" => StyleUpdate::FontFamily(value.trim().to_string()),
            "width" => StyleUpdate::Width(pixels(key, value)?),
            "height" => StyleUpdate::Height(pixels(key, value)?),
            "show_x_arrow" => StyleUpdate::ShowXArrow(flag(key, value)?),
            "show_y_arrow" => StyleUpdate::ShowYArrow(flag(key, value)?),
            "arrow_size" => StyleUpdate::ArrowSize(number(key, value)?),
            _ => {
                return Err(TablineError::Config(format!("Unknown style field: '{}'", key)));
            }
        };

        Ok(update)
    }
}

fn invalid(key: &str, value: &str, expected: &str) -> TablineError {
    TablineError::Config(format!(
        "Invalid value '{}' for {}: expected {}",
        value, key, expected
    ))
}

fn number(key: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid(key, value, "a number"))
}

fn count(key: &str, value: &str, max: usize) -> Result<usize> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&n| n <= max)
        .ok_or_else(|| invalid(key, value, &format!("an integer from 0 to {}", max)))
}

fn pixels(key: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(key, value, "a pixel size"))
}

fn flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(invalid(key, value, "true or false")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_is_immutable() {
        let base = StyleConfig::default();
        let next = base.apply(StyleUpdate::Title("Revenue".into()));

        assert_eq!(next.title, "Revenue");
        assert_ne!(base.title, next.title);
        assert_eq!(next.width, base.width);
    }

    #[test]
    fn test_parse_text_fields_keep_value_verbatim() {
        let update: StyleUpdate = "title=Q1 = Q2 ".parse().unwrap();
        assert_eq!(update, StyleUpdate::Title("Q1 = Q2 ".into()));
    }

    #[test]
    fn test_parse_typed_fields() {
        assert_eq!("line_width=3".parse::<StyleUpdate>().unwrap(), StyleUpdate::LineWidth(3.0));
        assert_eq!("show_grid=off".parse::<StyleUpdate>().unwrap(), StyleUpdate::ShowGrid(false));
        assert_eq!("y_tick_count=7".parse::<StyleUpdate>().unwrap(), StyleUpdate::YTickCount(7));
        assert_eq!(
            "curve=linear".parse::<StyleUpdate>().unwrap(),
            StyleUpdate::Curve(CurveType::Linear)
        );
        assert_eq!(
            "x_label_position=insideBottom".parse::<StyleUpdate>().unwrap(),
            StyleUpdate::XLabelPosition(LabelPosition::InsideBottom)
        );
    }

    #[test]
    fn test_parse_axis_bounds() {
        assert_eq!("y_min=auto".parse::<StyleUpdate>().unwrap(), StyleUpdate::YMin(AxisBound::Auto));
        assert_eq!(
            "y_max=250".parse::<StyleUpdate>().unwrap(),
            StyleUpdate::YMax(AxisBound::Value(250.0))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!("title".parse::<StyleUpdate>().is_err());
        assert!("colour=red".parse::<StyleUpdate>().is_err());
        assert!("line_width=thick".parse::<StyleUpdate>().is_err());
        assert!("show_dots=maybe".parse::<StyleUpdate>().is_err());
        assert!("width=-1".parse::<StyleUpdate>().is_err());
    }

    #[test]
    fn test_parse_rejects_oversized_counts() {
        assert!("y_tick_count=18446744073709551615".parse::<StyleUpdate>().is_err());
        assert!("x_tick_count=101".parse::<StyleUpdate>().is_err());
        assert!("tick_decimals=21".parse::<StyleUpdate>().is_err());
        assert_eq!(
            "y_tick_count=100".parse::<StyleUpdate>().unwrap(),
            StyleUpdate::YTickCount(MAX_TICK_COUNT)
        );
        assert_eq!(
            "tick_decimals=20".parse::<StyleUpdate>().unwrap(),
            StyleUpdate::TickDecimals(MAX_TICK_DECIMALS)
        );
    }

    #[test]
    fn test_apply_parsed_updates() {
        let style = ["y_starts_at_zero=true", "show_y_arrow=yes", "tick_decimals=2"]
            .iter()
            .map(|s| s.parse::<StyleUpdate>().unwrap())
            .fold(StyleConfig::default(), |style, update| style.apply(update));

        assert!(style.y_starts_at_zero);
        assert!(style.show_y_arrow);
        assert_eq!(style.tick_decimals, 2);
    }
}
