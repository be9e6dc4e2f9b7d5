//! Tests for whitespace-delimited matrix I/O

use std::io::Write;

use shearsort::{read_matrix, read_matrix_file, sort_matrix, write_matrix_file, Matrix};
use tempfile::NamedTempFile;

#[test]
fn test_file_round_trip() {
    let mut input = NamedTempFile::new().unwrap();
    writeln!(input, "4").unwrap();
    writeln!(input, "4 3 2 1").unwrap();
    writeln!(input, "8 7 6 5").unwrap();
    writeln!(input, "12 11 10 9").unwrap();
    writeln!(input, "16 15 14 13").unwrap();
    input.flush().unwrap();

    let matrix = read_matrix_file(input.path()).unwrap();
    assert_eq!(matrix.n, 4);
    assert_eq!(matrix.get(0, 0), 4.0);
    assert_eq!(matrix.get(3, 3), 13.0);

    let sorted = sort_matrix(matrix, 2).unwrap();

    let output = NamedTempFile::new().unwrap();
    write_matrix_file(output.path(), &sorted).unwrap();

    // The emitted stream parses back to the same matrix once the
    // dimension header is prepended.
    let text = std::fs::read_to_string(output.path()).unwrap();
    let reparsed = read_matrix(format!("4 {}", text).as_bytes()).unwrap();
    assert_eq!(reparsed, sorted);
    assert!(reparsed.is_boustrophedon_sorted());
}

#[test]
fn test_missing_file_is_an_error() {
    let err = read_matrix_file("/nonexistent/shearsort-input").unwrap_err();
    assert!(err.contains("Unable to open file"));
}

#[test]
fn test_one_token_per_line_accepted() {
    let values = (1..=16).map(|v| v.to_string()).collect::<Vec<_>>().join("\n");
    let input = format!("4\n{}\n", values);
    let matrix = read_matrix(input.as_bytes()).unwrap();
    assert_eq!(matrix.n, 4);
    assert_eq!(matrix.values, (1..=16).map(f64::from).collect::<Vec<_>>());
}

#[test]
fn test_scientific_notation_values() {
    let matrix = read_matrix("2 1e3 -2.5e-2 0.0 4".as_bytes()).unwrap();
    assert_eq!(matrix.values, vec![1000.0, -0.025, 0.0, 4.0]);
}

#[test]
fn test_display_renders_rows() {
    let m = Matrix::new(2, vec![1.5f64, 2.0, 3.0, 4.0]);
    let rendered = format!("{}", m);
    assert_eq!(rendered.lines().count(), 2);
    assert!(rendered.contains("1.5"));
}
