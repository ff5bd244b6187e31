//! Chart style configuration consumed by renderers.
//!
//! The inference engine only produces a [`SuggestedConfig`]; everything else
//! here is the configuration model a renderer reads: label placement, axis
//! bounds, tick policy and decorations.

mod config;
mod domain;
mod suggestion;
mod update;

pub use config::{AxisBound, CurveType, LabelPosition, LegendPosition, StyleConfig};
pub use domain::{
    AxisDomain, MAX_TICK_COUNT, MAX_TICK_DECIMALS, format_tick, resolve_y_domain, ticks,
};
pub use suggestion::{DEFAULT_TITLE, DEFAULT_X_LABEL, DEFAULT_Y_LABEL, SuggestedConfig};
pub use update::StyleUpdate;

/// Normalize an enum keyword: lowercase with `-`, `_` and spaces removed.
fn keyword(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
