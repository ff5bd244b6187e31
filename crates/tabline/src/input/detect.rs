//! Delimiter detection and header extraction for pasted text.

use tracing::debug;

use super::delimiter::Delimiter;
use crate::error::{Result, TablineError};

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Whitespace, plus the byte-order mark spreadsheet exports prepend.
pub(crate) fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == BYTE_ORDER_MARK
}

/// Input text split into trimmed, non-empty lines.
///
/// Always holds at least two lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    lines: Vec<String>,
}

impl RawTable {
    /// Split text into lines, trimming each and dropping blank ones.
    ///
    /// A leading byte-order mark is dropped. Fails unless at least a header
    /// line and one data line remain.
    pub fn from_text(text: &str) -> Result<Self> {
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
        let lines: Vec<String> = text
            .lines()
            .map(|l| l.trim_matches(is_blank))
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();

        if lines.len() < 2 {
            return Err(TablineError::InsufficientData { lines: lines.len() });
        }

        Ok(Self { lines })
    }

    /// The header line.
    pub fn header_line(&self) -> &str {
        &self.lines[0]
    }

    /// All lines after the header.
    pub fn data_lines(&self) -> &[String] {
        &self.lines[1..]
    }

    /// Number of data lines (excluding the header).
    pub fn row_count(&self) -> usize {
        self.lines.len() - 1
    }
}

/// Result of running the detector over raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedSchema {
    /// Delimiter chosen for every line of this input.
    pub delimiter: Delimiter,
    /// Cleaned header labels; column 0 is the label column.
    pub headers: Vec<String>,
    /// The non-empty lines the schema was derived from.
    pub table: RawTable,
}

/// Detect delimiter and headers from raw text.
pub fn detect(text: &str) -> Result<DetectedSchema> {
    detect_with(text, None)
}

/// Detect headers, using `forced` instead of counting when given.
pub fn detect_with(text: &str, forced: Option<Delimiter>) -> Result<DetectedSchema> {
    let table = RawTable::from_text(text)?;
    let delimiter = forced.unwrap_or_else(|| detect_delimiter(table.header_line()));
    let headers = split_line(table.header_line(), delimiter);

    debug!(
        delimiter = %delimiter,
        columns = headers.len(),
        rows = table.row_count(),
        forced = forced.is_some(),
        "detected table schema"
    );

    Ok(DetectedSchema {
        delimiter,
        headers,
        table,
    })
}

/// Pick the candidate occurring most often in the header line.
///
/// Only a strictly greater count displaces an earlier candidate, so a header
/// without any candidate resolves to comma.
fn detect_delimiter(header: &str) -> Delimiter {
    let mut best = Delimiter::CANDIDATES[0];
    let mut best_count = best.count_in(header);

    for &candidate in &Delimiter::CANDIDATES[1..] {
        let count = candidate.count_in(header);
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }

    best
}

/// Split a line on `delimiter` and clean every cell.
pub fn split_line(line: &str, delimiter: Delimiter) -> Vec<String> {
    line.split(delimiter.as_char()).map(clean_cell).collect()
}

/// Trim a cell and strip one matching pair of surrounding quotes.
pub fn clean_cell(cell: &str) -> String {
    let trimmed = cell.trim_matches(is_blank);
    let bytes = trimmed.as_bytes();

    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if (first == b'"' || first == b'\'') && first == last {
            return trimmed[1..trimmed.len() - 1].to_string();
        }
    }

    trimmed.to_string()
}
