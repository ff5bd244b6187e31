//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tabline::{Delimiter, InferenceConfig};

/// Tabline: line-chart series inference for tabular text
#[derive(Parser)]
#[command(name = "tabline")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse tabular text and write the inferred chart data
    Parse {
        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,

        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show detected delimiter, series and axis ranges
    Inspect {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the resolved style configuration for a table
    Style {
        #[command(flatten)]
        input: InputArgs,

        /// Style file (JSON) to start from instead of the defaults
        #[arg(long, value_name = "STYLE_FILE")]
        style: Option<PathBuf>,

        /// Override a style field, e.g. --set title=Revenue (repeatable)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Where to read the table from and how to infer it.
#[derive(Args)]
pub struct InputArgs {
    /// Path to the data file, or '-' for stdin
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Delimiter to use instead of auto-detection (comma, tab, semicolon)
    #[arg(short, long)]
    pub delimiter: Option<Delimiter>,

    /// Leading rows sampled when classifying numeric columns
    #[arg(long, default_value_t = tabline::inference::DEFAULT_SAMPLE_ROWS)]
    pub sample_rows: usize,
}

impl InputArgs {
    pub fn inference_config(&self) -> InferenceConfig {
        InferenceConfig {
            delimiter: self.delimiter,
            sample_rows: self.sample_rows,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Tsv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            _ => Err(format!("Unknown format: {}. Use json, csv, or tsv.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Tsv => write!(f, "tsv"),
        }
    }
}
