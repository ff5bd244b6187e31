//! Inspect command - human-readable summary of what was inferred.

use colored::Colorize;
use tabline::StyleConfig;
use tabline::style::{format_tick, resolve_y_domain, ticks};

use super::load_chart;
use crate::cli::InputArgs;

pub fn run(input: InputArgs, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let source = if input.file.as_os_str() == "-" {
        "stdin".to_string()
    } else {
        input.file.display().to_string()
    };

    println!("{} {}", "Inspecting".cyan().bold(), source.white());
    let chart = load_chart(&input)?;

    println!();
    println!("Delimiter: {}", chart.delimiter.to_string().white().bold());
    println!(
        "Rows: {}  Columns: {}",
        chart.row_count().to_string().white().bold(),
        chart.headers.len().to_string().white().bold()
    );
    println!(
        "Label column: {}",
        chart.headers.first().map(String::as_str).unwrap_or("").white()
    );

    println!();
    if chart.selection.is_fallback() {
        println!(
            "{}",
            "No numeric column found in the sample; using every column as a series".yellow()
        );
    }
    println!("{}", "Series:".yellow().bold());
    if chart.series_keys.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for (series, &index) in chart.series_styles().iter().zip(chart.selection.indices()) {
        let range = match chart.series_range(&series.key) {
            Some((lo, hi)) => format!("min={} max={}", lo, hi),
            None => "no values".to_string(),
        };
        println!(
            "  {:>3}  {:20} {:9} {}",
            index,
            series.name.green(),
            series.color,
            range
        );
    }

    let style = StyleConfig::default().with_suggestion(&chart.suggested);
    let domain = resolve_y_domain(&chart.points, &chart.series_keys, &style);
    let tick_labels: Vec<String> = ticks(domain, style.y_tick_count)
        .into_iter()
        .map(|t| format_tick(t, style.tick_decimals))
        .collect();

    println!();
    println!("{}", "Axes:".yellow().bold());
    println!("  x: {}", style.x_axis_label);
    println!("  y: {} [{} .. {}]", style.y_axis_label, domain.min, domain.max);
    println!("     ticks: {}", tick_labels.join(", "));

    if verbose {
        println!();
        println!("{}", "Points:".yellow().bold());
        for point in &chart.points {
            let values: Vec<String> = point
                .values
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            println!("  {:20} {}", point.label, values.join("  "));
        }
    }

    Ok(())
}
