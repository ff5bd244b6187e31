//! Example: Infer line-chart series from a tabular text file.
//!
//! Usage:
//!   cargo run --example chart -- <file_path>

use std::env;
use std::path::Path;

use tabline::style::{format_tick, resolve_y_domain, ticks};
use tabline::{StyleConfig, Tabline};

fn main() -> tabline::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example chart -- <file_path>");
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    let chart = Tabline::new().parse_file(path)?;

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!("Tabline: {}", path.display());
    println!("{}", separator);
    println!();

    println!("Delimiter: {}", chart.delimiter);
    println!("Headers:   {}", chart.headers.join(" | "));
    println!("Rows:      {}", chart.row_count());
    println!();

    println!("## Series");
    for series in chart.series_styles() {
        let (lo, hi) = chart.series_range(&series.key).unwrap_or((0.0, 0.0));
        println!("  {:20} {:8} min={:<10} max={}", series.name, series.color, lo, hi);
    }
    println!();

    let style = StyleConfig::default().with_suggestion(&chart.suggested);
    let domain = resolve_y_domain(&chart.points, &chart.series_keys, &style);
    let labels: Vec<String> = ticks(domain, style.y_tick_count)
        .into_iter()
        .map(|t| format_tick(t, style.tick_decimals))
        .collect();

    println!("## Axes");
    println!("  x: {}", style.x_axis_label);
    println!("  y: {} [{}]", style.y_axis_label, labels.join(", "));

    Ok(())
}
