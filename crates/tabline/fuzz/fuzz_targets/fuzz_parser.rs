//! Fuzz target for the series inference engine.
//!
//! Checks that parsing:
//! 1. Never panics on arbitrary text
//! 2. Emits at most one point per data line
//! 3. Only selects non-label columns

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(chart) = tabline::parse(text) {
        let lines = text.lines().filter(|l| !l.trim().is_empty()).count();
        assert!(chart.row_count() < lines);
        assert!(chart.selection.indices().iter().all(|&i| i >= 1));
    }
});
