//! Parse command - write inferred chart data as JSON or a normalized table.

use std::path::PathBuf;

use tabline::ParsedChart;

use super::{load_chart, write_output};
use crate::cli::{InputArgs, OutputFormat};

pub fn run(
    input: InputArgs,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let chart = load_chart(&input)?;

    let contents = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&chart)?,
        OutputFormat::Csv => to_delimited(&chart, b',')?,
        OutputFormat::Tsv => to_delimited(&chart, b'\t')?,
    };

    write_output(output.as_deref(), &contents)?;

    if let Some(path) = output {
        eprintln!(
            "Wrote {} rows, {} series ({}) to {}",
            chart.row_count(),
            chart.series_keys.len(),
            format,
            path.display()
        );
    }

    Ok(())
}

/// Label column plus one column per series, values as parsed.
fn to_delimited(chart: &ParsedChart, delimiter: u8) -> Result<String, Box<dyn std::error::Error>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    let label_header = chart.headers.first().map(String::as_str).unwrap_or("label");
    let mut header = vec![label_header.to_string()];
    header.extend(chart.series_keys.iter().cloned());
    writer.write_record(&header)?;

    for point in &chart.points {
        let mut record = vec![point.label.clone()];
        record.extend(
            chart
                .series_keys
                .iter()
                .map(|key| point.value(key).unwrap_or(0.0).to_string()),
        );
        writer.write_record(&record)?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}
