//! Text readers that turn separated values into matrices.

use std::str::FromStr;

use crate::element::Numeric;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Reads a matrix from a blob of separated text values.
///
/// Both separators are configurable strings. Blank rows are skipped, cell
/// tokens are trimmed before parsing, and the assembled grid goes through
/// [`Matrix::from_rows`] so irregular input fails the same way irregular
/// construction does.
#[derive(Clone, Debug)]
pub struct CsvReader {
    row_separator: String,
    column_separator: String,
}

impl Default for CsvReader {
    fn default() -> Self {
        Self {
            row_separator: "\n".to_string(),
            column_separator: ";".to_string(),
        }
    }
}

impl CsvReader {
    /// Reader with explicit separators.
    ///
    /// # Errors
    ///
    /// [`MatrixError::EmptySeparator`] when either separator is empty.
    pub fn new(
        row_separator: impl Into<String>,
        column_separator: impl Into<String>,
    ) -> Result<Self> {
        let row_separator = row_separator.into();
        let column_separator = column_separator.into();
        if row_separator.is_empty() || column_separator.is_empty() {
            return Err(MatrixError::EmptySeparator);
        }
        Ok(Self {
            row_separator,
            column_separator,
        })
    }

    /// Parses `text` into a matrix of the target element type.
    ///
    /// # Errors
    ///
    /// [`MatrixError::Parse`] names the first offending token and its
    /// position; irregular rows fail with [`MatrixError::RaggedRows`].
    pub fn read_matrix<T>(&self, text: &str) -> Result<Matrix<T>>
    where
        T: Numeric + FromStr,
    {
        let mut grid = Vec::new();
        for (row, line) in text.split(self.row_separator.as_str()).enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut cells = Vec::new();
            for (col, token) in line.split(self.column_separator.as_str()).enumerate() {
                let token = token.trim();
                let value = token.parse::<T>().map_err(|_| MatrixError::Parse {
                    row,
                    col,
                    token: token.to_string(),
                })?;
                cells.push(value);
            }
            grid.push(cells);
        }
        tracing::debug!(rows = grid.len(), "parsed matrix text");
        Matrix::from_rows(grid)
    }
}
