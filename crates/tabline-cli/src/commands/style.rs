//! Style command - resolve the style configuration for a table.

use std::path::PathBuf;

use tabline::{StyleConfig, StyleUpdate};
use tracing::debug;

use super::{load_chart, write_output};
use crate::cli::InputArgs;

pub fn run(
    input: InputArgs,
    style_file: Option<PathBuf>,
    set: Vec<String>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Parse overrides first so typos fail before any reading
    let updates = set
        .iter()
        .map(|s| s.parse::<StyleUpdate>())
        .collect::<Result<Vec<_>, _>>()?;

    let base = match style_file {
        Some(path) => StyleConfig::load(&path)?,
        None => StyleConfig::default(),
    };

    let chart = load_chart(&input)?;
    let style = updates
        .into_iter()
        .fold(base.with_suggestion(&chart.suggested), |style, update| {
            debug!(?update, "applying style override");
            style.apply(update)
        });

    write_output(output.as_deref(), &serde_json::to_string_pretty(&style)?)?;
    Ok(())
}
