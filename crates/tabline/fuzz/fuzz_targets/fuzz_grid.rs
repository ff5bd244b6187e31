//! Fuzz target for grid loading and re-serialization.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tabline::{Delimiter, TableGrid};

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(grid) = TableGrid::from_text(text) {
        for row in grid.rows() {
            assert_eq!(row.len(), grid.column_count());
        }
        let _ = tabline::parse(&grid.to_text(Delimiter::Tab));
    }
});
