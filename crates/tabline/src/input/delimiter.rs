//! Field delimiters recognised in pasted tabular text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TablineError;

/// A field delimiter.
///
/// The declaration order is the detection priority: when two candidates
/// appear equally often in the header line, the earlier one wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Semicolon,
}

impl Delimiter {
    /// Candidates in detection order.
    pub const CANDIDATES: [Delimiter; 3] = [Delimiter::Comma, Delimiter::Tab, Delimiter::Semicolon];

    /// The character this delimiter splits on.
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Semicolon => ';',
        }
    }

    /// Short human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Delimiter::Comma => "comma",
            Delimiter::Tab => "tab",
            Delimiter::Semicolon => "semicolon",
        }
    }

    /// Count occurrences of this delimiter in a line.
    pub fn count_in(self, line: &str) -> usize {
        line.matches(self.as_char()).count()
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Delimiter {
    type Err = TablineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "," => return Ok(Delimiter::Comma),
            "\t" | "\\t" => return Ok(Delimiter::Tab),
            ";" => return Ok(Delimiter::Semicolon),
            _ => {}
        }

        match s.trim().to_lowercase().as_str() {
            "comma" | "csv" => Ok(Delimiter::Comma),
            "tab" | "tsv" => Ok(Delimiter::Tab),
            "semicolon" => Ok(Delimiter::Semicolon),
            other => Err(TablineError::Config(format!(
                "Unknown delimiter: '{}'. Use comma, tab, or semicolon.",
                other
            ))),
        }
    }
}
