//! Integration tests for Tabline.

use std::io::Write;
use tempfile::NamedTempFile;

use tabline::style::resolve_y_domain;
use tabline::{
    AxisDomain, ChartSession, Delimiter, InferenceConfig, ParseStatus, SeriesSelection,
    StyleConfig, StyleUpdate, TableGrid, Tabline, TablineError,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

// =============================================================================
// End-to-End
// =============================================================================

#[test]
fn test_sales_example() {
    let text = "Month, Sales, Expenses\nJan, 4000, 2400\nFeb, 3000, 1398\n";
    let chart = tabline::parse(text).expect("Parse failed");

    assert_eq!(chart.delimiter, Delimiter::Comma);
    assert_eq!(chart.headers, vec!["Month", "Sales", "Expenses"]);
    assert_eq!(chart.series_keys, vec!["Sales", "Expenses"]);
    assert_eq!(chart.selection, SeriesSelection::Classified(vec![1, 2]));

    let json = serde_json::to_string(&chart.points).unwrap();
    assert_eq!(
        json,
        r#"[{"label":"Jan","Sales":4000.0,"Expenses":2400.0},{"label":"Feb","Sales":3000.0,"Expenses":1398.0}]"#
    );
}

#[test]
fn test_parse_file() {
    let file = create_test_file("Day\tTemp\nMon\t21.5\nTue\t19\n");
    let chart = Tabline::new().parse_file(file.path()).expect("Parse failed");

    assert_eq!(chart.delimiter, Delimiter::Tab);
    assert_eq!(chart.series_keys, vec!["Temp"]);
    assert_eq!(chart.points[0].value("Temp"), Some(21.5));
    assert_eq!(chart.suggested.y_axis_label, "Temp");
}

#[test]
fn test_parse_missing_file() {
    let err = Tabline::new().parse_file("/nonexistent/data.csv").unwrap_err();
    assert!(matches!(err, TablineError::Io { .. }));
    assert!(!err.is_parse_failure());
}

// =============================================================================
// Failure
// =============================================================================

#[test]
fn test_insufficient_data() {
    for text in ["", "   \n\n", "Month,Sales", "\n Month,Sales \n   \n"] {
        let err = tabline::parse(text).unwrap_err();
        assert!(err.is_parse_failure(), "expected parse failure for {:?}", text);
    }
}

// =============================================================================
// Delimiters and Cleaning
// =============================================================================

#[test]
fn test_semicolon_table() {
    let chart = tabline::parse("Jahr;Umsatz;Kosten\n2022;10;4\n2023;12;5").unwrap();
    assert_eq!(chart.delimiter, Delimiter::Semicolon);
    assert_eq!(chart.series_keys, vec!["Umsatz", "Kosten"]);
}

#[test]
fn test_quoted_cells() {
    let chart = tabline::parse("\"Month\",'Sales'\n \"Jan\" , \"4000\" \n'Feb','3000'").unwrap();

    assert_eq!(chart.headers, vec!["Month", "Sales"]);
    assert_eq!(chart.points[0].label, "Jan");
    assert_eq!(chart.points[0].value("Sales"), Some(4000.0));
    assert_eq!(chart.points[1].value("Sales"), Some(3000.0));
}

#[test]
fn test_byte_order_mark_stripped() {
    let chart = tabline::parse("\u{FEFF}\"Month\",Sales\nJan,4000").unwrap();

    assert_eq!(chart.headers[0], "Month");
    assert_eq!(chart.suggested.x_axis_label, "Month");
    assert_eq!(chart.points[0].value("Sales"), Some(4000.0));
}

#[test]
fn test_parse_file_with_byte_order_mark() {
    let file = create_test_file("\u{FEFF}Month,Sales\r\nJan,4000\r\nFeb,3000\r\n");
    let chart = Tabline::new().parse_file(file.path()).expect("Parse failed");

    assert_eq!(chart.headers, vec!["Month", "Sales"]);
    assert_eq!(chart.row_count(), 2);
}

#[test]
fn test_header_delimiter_reused_for_data() {
    // Data lines contain commas inside values but the header chose tab.
    let chart = tabline::parse("Item\tCount\nA,B\t3\nC\t4").unwrap();
    assert_eq!(chart.points[0].label, "A,B");
    assert_eq!(chart.points[0].value("Count"), Some(3.0));
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn test_text_column_excluded() {
    let chart = tabline::parse("Month,Sales,Notes\nJan,4000,good\nFeb,3000,ok").unwrap();
    assert_eq!(chart.series_keys, vec!["Sales"]);
    assert_eq!(chart.points[0].value("Notes"), None);
}

#[test]
fn test_all_text_fallback() {
    let chart = tabline::parse("Name,Team,Role\nAda,Core,Lead\nBob,Web,Dev").unwrap();

    assert!(chart.selection.is_fallback());
    assert_eq!(chart.series_keys, vec!["Team", "Role"]);
    for point in &chart.points {
        assert_eq!(point.value("Team"), Some(0.0));
        assert_eq!(point.value("Role"), Some(0.0));
    }
}

#[test]
fn test_ragged_rows() {
    let chart = tabline::parse("x,a,b\n1,10\n2,20,200,extra\n3").unwrap();

    assert_eq!(chart.series_keys, vec!["a", "b"]);
    assert_eq!(chart.row_count(), 3);
    assert_eq!(chart.points[0].value("b"), Some(0.0));
    assert_eq!(chart.points[1].value("b"), Some(200.0));
    assert_eq!(chart.points[2].value("a"), Some(0.0));
}

#[test]
fn test_custom_sample_window() {
    let text = "k,v\na,1\nb,2\nc,three";
    let default = tabline::parse(text).unwrap();
    assert!(default.selection.is_fallback());

    let narrow = Tabline::with_config(InferenceConfig {
        sample_rows: 2,
        ..InferenceConfig::default()
    })
    .parse(text)
    .unwrap();
    assert!(!narrow.selection.is_fallback());
    assert_eq!(narrow.points[2].value("v"), Some(0.0));
}

// =============================================================================
// Invariants
// =============================================================================

#[test]
fn test_row_count_matches_data_lines() {
    let chart = tabline::parse("a,b\n\n1,2\n   \n3,4\n5,6\n").unwrap();
    assert_eq!(chart.row_count(), 3);
}

#[test]
fn test_idempotent() {
    let text = "Month;A;B\nJan;1;x\nFeb;2;3";
    let first = tabline::parse(text).unwrap();
    let second = tabline::parse(text).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

// =============================================================================
// Grid, Style and Session
// =============================================================================

#[test]
fn test_grid_output_feeds_engine() {
    let mut grid = TableGrid::new(vec!["Week".into(), "Visits".into()]);
    for (week, visits) in [("W1", "120"), ("W2", "180")] {
        let row = grid.push_row();
        grid.set_cell(row, 0, week).unwrap();
        grid.set_cell(row, 1, visits).unwrap();
    }

    let chart = tabline::parse(&grid.to_text(Delimiter::Tab)).unwrap();
    assert_eq!(chart.delimiter, Delimiter::Tab);
    assert_eq!(chart.series_keys, vec!["Visits"]);
    assert_eq!(chart.points[1].value("Visits"), Some(180.0));
}

#[test]
fn test_style_domain_from_parsed_chart() {
    let chart = tabline::parse("Month,Sales\nJan,40\nFeb,60").unwrap();
    let style = StyleConfig::default().apply(StyleUpdate::YStartsAtZero(true));

    let domain = resolve_y_domain(&chart.points, &chart.series_keys, &style);
    assert_eq!(domain, AxisDomain { min: 0.0, max: 60.0 });
}

#[test]
fn test_session_keeps_last_good_result() {
    let mut session = ChartSession::default();

    assert_eq!(session.submit("Month,Sales\nJan,4000"), ParseStatus::Success);
    assert_eq!(session.submit("garbage"), ParseStatus::Error);

    let chart = session.chart().expect("previous chart kept");
    assert_eq!(chart.series_keys, vec!["Sales"]);
    assert_eq!(session.style().y_axis_label, "Sales");

    assert_eq!(session.submit("Month,A,B\nJan,1,2"), ParseStatus::Success);
    assert_eq!(session.style().y_axis_label, "Value");
}
