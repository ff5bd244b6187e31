//! CLI command implementations.

pub mod inspect;
pub mod parse;
pub mod style;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use tabline::{ParsedChart, Tabline};

use crate::cli::InputArgs;

/// Read the input text from a file or, for '-', from stdin.
pub fn read_input(file: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if file == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    Ok(fs::read_to_string(file)?)
}

/// Read and parse the input described by `args`.
pub fn load_chart(args: &InputArgs) -> Result<ParsedChart, Box<dyn std::error::Error>> {
    let text = read_input(&args.file)?;
    let chart = Tabline::with_config(args.inference_config()).parse(&text)?;
    Ok(chart)
}

/// Write to a file when given, otherwise to stdout.
pub fn write_output(output: Option<&Path>, contents: &str) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => fs::write(path, contents)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            if !contents.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}
