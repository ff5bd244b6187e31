//! Editable cell grid that produces engine input text.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TablineError};
use crate::input::{Delimiter, detect, split_line};

/// A rectangular grid of text cells under a header row.
///
/// Every row always has exactly as many cells as there are headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableGrid {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableGrid {
    /// Create an empty grid with the given headers.
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Load a grid from delimiter-separated text.
    ///
    /// Rows are padded or truncated to the header width.
    pub fn from_text(text: &str) -> Result<Self> {
        let schema = detect(text)?;
        let width = schema.headers.len();

        let rows = schema
            .table
            .data_lines()
            .iter()
            .map(|line| {
                let mut cells = split_line(line, schema.delimiter);
                cells.resize(width, String::new());
                cells
            })
            .collect();

        Ok(Self {
            headers: schema.headers,
            rows,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Append a row of empty cells and return its index.
    pub fn push_row(&mut self) -> usize {
        self.rows.push(vec![String::new(); self.headers.len()]);
        self.rows.len() - 1
    }

    /// Append a column, filling existing rows with empty cells.
    pub fn push_column(&mut self, name: impl Into<String>) -> usize {
        self.headers.push(name.into());
        for row in &mut self.rows {
            row.push(String::new());
        }
        self.headers.len() - 1
    }

    pub fn remove_row(&mut self, row: usize) -> Result<Vec<String>> {
        if row >= self.rows.len() {
            return Err(out_of_range("row", row, self.rows.len()));
        }
        Ok(self.rows.remove(row))
    }

    /// Remove a data column. The label column cannot be removed.
    pub fn remove_column(&mut self, col: usize) -> Result<String> {
        if col == 0 {
            return Err(TablineError::Config("Cannot remove the label column".to_string()));
        }
        if col >= self.headers.len() {
            return Err(out_of_range("column", col, self.headers.len()));
        }
        for row in &mut self.rows {
            row.remove(col);
        }
        Ok(self.headers.remove(col))
    }

    pub fn set_header(&mut self, col: usize, value: impl Into<String>) -> Result<()> {
        let width = self.headers.len();
        let cell = self
            .headers
            .get_mut(col)
            .ok_or_else(|| out_of_range("column", col, width))?;
        *cell = value.into();
        Ok(())
    }

    pub fn set_cell(&mut self, row: usize, col: usize, value: impl Into<String>) -> Result<()> {
        let height = self.rows.len();
        let width = self.headers.len();
        let cells = self
            .rows
            .get_mut(row)
            .ok_or_else(|| out_of_range("row", row, height))?;
        let cell = cells
            .get_mut(col)
            .ok_or_else(|| out_of_range("column", col, width))?;
        *cell = value.into();
        Ok(())
    }

    /// Serialize header and rows, one line each, joined by `delimiter`.
    pub fn to_text(&self, delimiter: Delimiter) -> String {
        let sep = delimiter.as_char().to_string();
        std::iter::once(&self.headers)
            .chain(self.rows.iter())
            .map(|cells| cells.join(sep.as_str()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn out_of_range(what: &str, index: usize, len: usize) -> TablineError {
    TablineError::Config(format!("{} {} out of range (have {})", what, index, len))
}
