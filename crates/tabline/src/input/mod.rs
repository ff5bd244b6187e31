//! Input parsing: line splitting, delimiter detection and header extraction.

mod delimiter;
mod detect;

pub use delimiter::Delimiter;
pub(crate) use detect::is_blank;
pub use detect::{DetectedSchema, RawTable, clean_cell, detect, detect_with, split_line};
