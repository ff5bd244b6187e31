//! Y-axis domain resolution and tick placement.

use serde::{Deserialize, Serialize};

use super::config::StyleConfig;
use crate::inference::DataPoint;

/// Upper bound on ticks per axis.
pub const MAX_TICK_COUNT: usize = 100;

/// Upper bound on decimals in a tick label.
pub const MAX_TICK_DECIMALS: usize = 20;

/// A closed numeric axis range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl AxisDomain {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Resolve the y domain for the selected series under `style`.
///
/// Finite series values set the automatic range. With `y_starts_at_zero`
/// the range is stretched to include zero. A degenerate automatic range is
/// widened so renderers never divide by zero. Explicit bounds replace the
/// automatic ones as given.
pub fn resolve_y_domain(
    points: &[DataPoint],
    series_keys: &[String],
    style: &StyleConfig,
) -> AxisDomain {
    let mut data_min = f64::INFINITY;
    let mut data_max = f64::NEG_INFINITY;

    for point in points {
        for key in series_keys {
            if let Some(v) = point.value(key).filter(|v| v.is_finite()) {
                data_min = data_min.min(v);
                data_max = data_max.max(v);
            }
        }
    }

    let (mut min, mut max) = if data_min.is_finite() {
        (data_min, data_max)
    } else {
        (0.0, 1.0)
    };

    if style.y_starts_at_zero {
        min = min.min(0.0);
        max = max.max(0.0);
    }

    if min == max {
        if style.y_starts_at_zero && min == 0.0 {
            max = 1.0;
        } else {
            min -= 1.0;
            max += 1.0;
        }
    }

    AxisDomain {
        min: style.y_min.value().unwrap_or(min),
        max: style.y_max.value().unwrap_or(max),
    }
}

/// Evenly spaced ticks across `domain`, both ends included.
///
/// Fewer than two requested ticks still yields both ends, and counts above
/// [`MAX_TICK_COUNT`] are capped.
pub fn ticks(domain: AxisDomain, count: usize) -> Vec<f64> {
    let count = count.min(MAX_TICK_COUNT);
    if count < 2 {
        return vec![domain.min, domain.max];
    }

    let step = domain.span() / (count - 1) as f64;
    (0..count)
        .map(|i| {
            if i == count - 1 {
                domain.max
            } else {
                domain.min + step * i as f64
            }
        })
        .collect()
}

/// Format a tick label with a fixed number of decimals, at most
/// [`MAX_TICK_DECIMALS`].
pub fn format_tick(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals.min(MAX_TICK_DECIMALS), value);
    // Avoid "-0" labels for values that round to zero.
    match formatted.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => formatted,
    }
}
