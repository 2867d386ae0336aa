//! Determinant, inversion and the vector/diagonal readings of a matrix.

use crate::element::Numeric;
use crate::error::{MatrixError, Result};

use super::Matrix;

impl<T: Numeric> Matrix<T> {
    /// Determinant by cofactor expansion along the first row.
    ///
    /// Sizes up to 3x3 use the closed forms; larger matrices recurse on
    /// signed minors built with [`Matrix::skip_row`] and
    /// [`Matrix::skip_column`]. Exponential in the matrix size, which keeps
    /// the element bound free of any ordering or pivoting requirements.
    ///
    /// # Errors
    ///
    /// [`MatrixError::NotSquare`] unless the matrix is square with at least
    /// one row.
    pub fn determinant(&self) -> Result<T> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.row_count(),
                cols: self.column_count(),
            });
        }
        let d = &self.data;
        Ok(match self.row_count() {
            1 => d[0][0],
            2 => d[0][0] * d[1][1] - d[0][1] * d[1][0],
            3 => {
                d[0][0] * d[1][1] * d[2][2]
                    + d[0][1] * d[1][2] * d[2][0]
                    + d[0][2] * d[1][0] * d[2][1]
                    - d[0][2] * d[1][1] * d[2][0]
                    - d[0][1] * d[1][0] * d[2][2]
                    - d[0][0] * d[1][2] * d[2][1]
            }
            size => {
                let minors = self.skip_row(0)?;
                let mut acc = T::zero();
                for col in 0..size {
                    let term = d[0][col] * minors.skip_column(col)?.determinant()?;
                    // sign alternation as add/subtract keeps the element
                    // bound free of negation
                    acc = if col % 2 == 0 { acc + term } else { acc - term };
                }
                acc
            }
        })
    }

    /// Inverse via the adjugate scaled by the reciprocal determinant.
    ///
    /// No singularity check is performed: when the determinant is the
    /// additive identity the cells hold whatever the element type produces
    /// for division by zero (non-finite values for floats).
    ///
    /// # Errors
    ///
    /// Fails exactly when [`Matrix::determinant`] fails.
    pub fn inversion(&self) -> Result<Self> {
        let reciprocal = T::one() / self.determinant()?;
        let size = self.row_count();
        if size == 1 {
            return Ok(Self {
                data: vec![vec![reciprocal]],
            });
        }
        let mut adjugate = vec![vec![T::zero(); size]; size];
        for row in 0..size {
            let minors = self.skip_row(row)?;
            for col in 0..size {
                let minor = minors.skip_column(col)?.determinant()?;
                let signed = if (row + col) % 2 == 0 {
                    minor
                } else {
                    T::zero() - minor
                };
                // the adjugate is the transposed cofactor matrix
                adjugate[col][row] = signed * reciprocal;
            }
        }
        Ok(Self { data: adjugate })
    }

    /// True when the matrix is square and every off-diagonal cell equals
    /// the additive identity. Non-square and zero-size matrices are not
    /// diagonal.
    pub fn is_diagonal(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        self.data.iter().enumerate().all(|(i, row)| {
            row.iter()
                .enumerate()
                .all(|(j, cell)| i == j || *cell == T::zero())
        })
    }

    /// Reads the matrix as a flat vector.
    ///
    /// The empty matrix yields an empty vector; a single row or column
    /// yields its cells; a diagonal square matrix yields the diagonal in
    /// row order.
    ///
    /// # Errors
    ///
    /// [`MatrixError::NotVector`] for any other shape.
    pub fn as_vector(&self) -> Result<Vec<T>> {
        if self.is_empty() {
            return Ok(Vec::new());
        }
        if self.row_count() == 1 {
            return Ok(self.data[0].clone());
        }
        if self.column_count() == 1 {
            return Ok(self.data.iter().map(|row| row[0]).collect());
        }
        if self.is_diagonal() {
            return Ok((0..self.row_count()).map(|i| self.data[i][i]).collect());
        }
        Err(MatrixError::NotVector)
    }
}
