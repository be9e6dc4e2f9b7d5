//! Whitespace-delimited matrix streams
//!
//! The exchange format is a flat stream of whitespace-separated
//! tokens: the first token is the dimension N, followed by the N*N
//! values in row-major order. Any whitespace (spaces, newlines) is an
//! equivalent separator, so writers are free to lay out one row per
//! line.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::matrix::Matrix;

/// Reads a matrix from a whitespace-delimited stream.
///
/// The first token is N, followed by N*N floating-point values in
/// row-major order.
pub fn read_matrix<R: Read>(mut reader: R) -> Result<Matrix<f64>, String> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| format!("Failed to read input: {}", e))?;
    let mut tokens = text.split_whitespace();

    let n: usize = tokens
        .next()
        .ok_or_else(|| "Input is empty; expected matrix dimension".to_string())?
        .parse()
        .map_err(|_| "Invalid matrix dimension".to_string())?;

    let mut values = Vec::with_capacity(n * n);
    for i in 0..n * n {
        let token = tokens
            .next()
            .ok_or_else(|| format!("Expected {} values, found {}", n * n, i))?;
        let value: f64 = token
            .parse()
            .map_err(|_| format!("Invalid value at position {}: {:?}", i, token))?;
        values.push(value);
    }

    Ok(Matrix::new(n, values))
}

/// Reads a matrix from a file.
pub fn read_matrix_file<P: AsRef<Path>>(path: P) -> Result<Matrix<f64>, String> {
    let file = File::open(&path)
        .map_err(|e| format!("Unable to open file {}: {}", path.as_ref().display(), e))?;
    read_matrix(BufReader::new(file))
}

/// Writes a matrix as whitespace-delimited values, one row per line.
/// The dimension header is not written; the final snake-ordered
/// matrix is self-describing to consumers that already know N.
pub fn write_matrix<W: Write>(writer: &mut W, matrix: &Matrix<f64>) -> Result<(), String> {
    for i in 0..matrix.n {
        let row = matrix.row(i);
        for (j, value) in row.iter().enumerate() {
            if j > 0 {
                write!(writer, " ").map_err(|e| format!("Failed to write output: {}", e))?;
            }
            write!(writer, "{:<10.6}", value)
                .map_err(|e| format!("Failed to write output: {}", e))?;
        }
        writeln!(writer).map_err(|e| format!("Failed to write output: {}", e))?;
    }
    Ok(())
}

/// Writes a matrix to a file.
pub fn write_matrix_file<P: AsRef<Path>>(path: P, matrix: &Matrix<f64>) -> Result<(), String> {
    let file = File::create(&path)
        .map_err(|e| format!("Unable to open file {}: {}", path.as_ref().display(), e))?;
    let mut writer = BufWriter::new(file);
    write_matrix(&mut writer, matrix)?;
    writer
        .flush()
        .map_err(|e| format!("Failed to write output: {}", e))
}
