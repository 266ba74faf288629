//! Plain-text matrix input and output.
//!
//! Input is whitespace-separated integers in row-major order, preceded by
//! the matrix side length. Output is tab-separated rows with 3-wide cells.

use std::io::{BufRead, Write};

use crate::error::Error;
use crate::matrix::Matrix;

/// Streaming reader for whitespace-separated integers.
///
/// Tokens may be split across lines however the producer likes; the scanner
/// refills from the underlying reader one line at a time.
pub struct Scanner<R> {
    reader: R,
    // tokens of the current line, reversed so pop() yields them in order
    pending: Vec<String>,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
        }
    }

    fn next_token(&mut self) -> Result<String, Error> {
        loop {
            if let Some(tok) = self.pending.pop() {
                return Ok(tok);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(Error::UnexpectedEof);
            }
            self.pending = line.split_whitespace().rev().map(String::from).collect();
        }
    }

    fn next_int(&mut self) -> Result<i64, Error> {
        let tok = self.next_token()?;
        tok.parse().map_err(|_| Error::InvalidToken(tok))
    }

    /// Read the matrix side length. Values below 1 are rejected.
    pub fn read_dimension(&mut self) -> Result<usize, Error> {
        let n = self.next_int()?;
        if n < 1 {
            return Err(Error::InvalidDimension(n));
        }
        Ok(n as usize)
    }

    /// Read an `n × n` matrix in row-major order.
    pub fn read_matrix(&mut self, n: usize) -> Result<Matrix, Error> {
        let mut matrix = Matrix::zeroed(n);
        for row in 0..n {
            for col in 0..n {
                let value = self.next_int()?;
                matrix.set(
                    row,
                    col,
                    i32::try_from(value).map_err(|_| Error::InvalidToken(value.to_string()))?,
                );
            }
        }
        Ok(matrix)
    }
}

/// Write a matrix as tab-separated rows, one row per line.
///
/// Cells are right-aligned in 3 columns, so small matrices line up when the
/// entries are the usual single digits.
pub fn print_matrix<W: Write>(out: &mut W, matrix: &Matrix) -> std::io::Result<()> {
    for row in 0..matrix.size() {
        for col in 0..matrix.size() {
            write!(out, "{:3}\t", matrix.get(row, col))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
