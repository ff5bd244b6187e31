//! Parser performance benchmarks.
//!
//! Measures parsing performance across table sizes and delimiters.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tabline::{Delimiter, Tabline, TableGrid};

/// Generate a synthetic table with a label column and `cols - 1` value columns.
fn generate_table(rows: usize, cols: usize, delimiter: Delimiter) -> String {
    let mut headers = vec!["label".to_string()];
    headers.extend((1..cols).map(|i| format!("series_{}", i)));

    let mut grid = TableGrid::new(headers);
    for row in 0..rows {
        let r = grid.push_row();
        grid.set_cell(r, 0, format!("P{:06}", row)).unwrap();
        for col in 1..cols {
            // Every fifth column is text to exercise classification
            let value = if col % 5 == 0 {
                format!("note_{}", row % 10)
            } else {
                format!("{:.2}", row as f64 * 1.5 + col as f64)
            };
            grid.set_cell(r, col, value).unwrap();
        }
    }

    grid.to_text(delimiter)
}

/// Benchmark parsing tables of various sizes.
fn bench_parse_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_rows");
    let engine = Tabline::new();

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_table(*rows, 10, Delimiter::Comma);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            b.iter(|| engine.parse(black_box(data)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark parsing with each delimiter.
fn bench_parse_delimiters(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_delimiters");
    let engine = Tabline::new();

    for delimiter in Delimiter::CANDIDATES {
        let data = generate_table(1_000, 10, delimiter);

        group.bench_with_input(BenchmarkId::new("delimiter", delimiter), &data, |b, data| {
            b.iter(|| engine.parse(black_box(data)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark wide tables.
fn bench_parse_columns(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_columns");
    let engine = Tabline::new();

    for cols in [5, 50, 200].iter() {
        let data = generate_table(500, *cols, Delimiter::Tab);

        group.bench_with_input(BenchmarkId::new("cols", cols), &data, |b, data| {
            b.iter(|| engine.parse(black_box(data)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_rows,
    bench_parse_delimiters,
    bench_parse_columns
);
criterion_main!(benches);
