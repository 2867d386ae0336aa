//! Dense matrix storage and its structural operations.

pub mod columns;
mod linalg;
pub mod rows;

use core::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::element::Numeric;
use crate::error::{MatrixError, Result};
use crate::parallel::ParallelPolicy;

pub use columns::{ColumnCursor, Columns, ColumnsMut};
pub use rows::{RowCursor, Rows, RowsMut};

/// A mutable rectangular grid of numeric cells.
///
/// The shape is always derived from the backing storage, never cached: the
/// row count is the number of stored rows and the column count the length of
/// the first row. Every complete operation leaves the storage rectangular,
/// so the two stay consistent. A matrix with zero rows or zero columns is
/// represented as the empty matrix.
///
/// # Example
///
/// ```
/// use tabula::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert!(m.is_square());
/// assert_eq!(m[(0, 1)], 2.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T: Numeric = f64> {
    data: Vec<Vec<T>>,
}

impl<T: Numeric> Matrix<T> {
    /// Matrix of `rows` x `cols` default-valued (zero) cells.
    ///
    /// Either dimension being zero yields the empty matrix. Row construction
    /// fans out per the default [`ParallelPolicy`] when the row count is
    /// large; use [`Matrix::new_using`] to control that explicitly.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::new_using(rows, cols, &ParallelPolicy::default())
    }

    /// Same as [`Matrix::new`] with an explicit dispatch policy.
    pub fn new_using(rows: usize, cols: usize, policy: &ParallelPolicy) -> Self {
        if rows == 0 || cols == 0 {
            return Self::empty();
        }
        let data = if policy.should_parallelize(rows) {
            use rayon::prelude::*;
            (0..rows)
                .into_par_iter()
                .map(|_| vec![T::zero(); cols])
                .collect()
        } else {
            (0..rows).map(|_| vec![T::zero(); cols]).collect()
        };
        Self { data }
    }

    /// Takes ownership of a caller-supplied grid.
    ///
    /// The grid must be rectangular; an irregular one fails with
    /// [`MatrixError::RaggedRows`]. Rows of zero width collapse to the empty
    /// matrix.
    pub fn from_rows(grid: Vec<Vec<T>>) -> Result<Self> {
        let expected = grid.first().map_or(0, Vec::len);
        for (index, row) in grid.iter().enumerate() {
            if row.len() != expected {
                return Err(MatrixError::RaggedRows {
                    index,
                    found: row.len(),
                    expected,
                });
            }
        }
        if expected == 0 {
            return Ok(Self::empty());
        }
        Ok(Self { data: grid })
    }

    /// Deep copy of a borrowed grid, with the same validation as
    /// [`Matrix::from_rows`].
    pub fn from_grid(grid: &[Vec<T>]) -> Result<Self> {
        Self::from_rows(grid.to_vec())
    }

    /// The matrix with zero rows and zero columns.
    pub fn empty() -> Self {
        Self { data: Vec::new() }
    }

    /// Wraps a grid that is known to be rectangular.
    pub(crate) fn from_raw(data: Vec<Vec<T>>) -> Self {
        Self { data }
    }

    /// Consumes the matrix, handing back its rows.
    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.data
    }

    pub(crate) fn grid(&self) -> &[Vec<T>] {
        &self.data
    }

    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    pub fn column_count(&self) -> usize {
        self.data.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Cell value, or [`MatrixError::CellOutOfBounds`] when either
    /// coordinate is outside the current shape.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.data
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .ok_or(MatrixError::CellOutOfBounds {
                row,
                col,
                rows: self.row_count(),
                cols: self.column_count(),
            })
    }

    /// Writes one cell, failing on out-of-range coordinates.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let (rows, cols) = (self.row_count(), self.column_count());
        match self.data.get_mut(row).and_then(|cells| cells.get_mut(col)) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(MatrixError::CellOutOfBounds {
                row,
                col,
                rows,
                cols,
            }),
        }
    }

    /// True when the matrix has as many rows as columns and at least one of
    /// each.
    pub fn is_square(&self) -> bool {
        !self.data.is_empty() && self.row_count() == self.column_count()
    }

    /// True when the matrix is a single row or a single column.
    pub fn is_vector(&self) -> bool {
        self.row_count() == 1 || self.column_count() == 1
    }

    /// Live read-only view of the rows.
    pub fn rows(&self) -> Rows<'_, T> {
        Rows::new(self)
    }

    /// Live mutating view of the rows.
    pub fn rows_mut(&mut self) -> RowsMut<'_, T> {
        RowsMut::new(self)
    }

    /// Live read-only view of the columns.
    pub fn columns(&self) -> Columns<'_, T> {
        Columns::new(self)
    }

    /// Live mutating view of the columns.
    pub fn columns_mut(&mut self) -> ColumnsMut<'_, T> {
        ColumnsMut::new(self)
    }

    /// New matrix with the given row excluded.
    pub fn skip_row(&self, index: usize) -> Result<Self> {
        if index >= self.row_count() {
            return Err(MatrixError::RowOutOfBounds {
                index,
                rows: self.row_count(),
            });
        }
        let data = self
            .data
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, row)| row.clone())
            .collect();
        Ok(Self { data })
    }

    /// New matrix with the given column excluded. Skipping the only column
    /// yields the empty matrix.
    pub fn skip_column(&self, index: usize) -> Result<Self> {
        if index >= self.column_count() {
            return Err(MatrixError::ColumnOutOfBounds {
                index,
                cols: self.column_count(),
            });
        }
        if self.column_count() == 1 {
            return Ok(Self::empty());
        }
        let data = self
            .data
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(j, _)| *j != index)
                    .map(|(_, cell)| *cell)
                    .collect()
            })
            .collect();
        Ok(Self { data })
    }

    /// Inclusive-bounds extraction into a new matrix.
    ///
    /// # Errors
    ///
    /// Out-of-range bounds fail with the matching bounds error; a first
    /// bound exceeding its last bound fails with
    /// [`MatrixError::InvertedBounds`].
    pub fn sub_matrix(
        &self,
        first_row: usize,
        last_row: usize,
        first_col: usize,
        last_col: usize,
    ) -> Result<Self> {
        let (rows, cols) = (self.row_count(), self.column_count());
        if first_row >= rows || last_row >= rows {
            return Err(MatrixError::RowOutOfBounds {
                index: first_row.max(last_row),
                rows,
            });
        }
        if first_col >= cols || last_col >= cols {
            return Err(MatrixError::ColumnOutOfBounds {
                index: first_col.max(last_col),
                cols,
            });
        }
        if first_row > last_row {
            return Err(MatrixError::InvertedBounds {
                first: first_row,
                last: last_row,
            });
        }
        if first_col > last_col {
            return Err(MatrixError::InvertedBounds {
                first: first_col,
                last: last_col,
            });
        }
        let data = self.data[first_row..=last_row]
            .iter()
            .map(|row| row[first_col..=last_col].to_vec())
            .collect();
        Ok(Self { data })
    }

    /// New matrix with the row and column roles swapped.
    pub fn transpose(&self) -> Self {
        if self.data.is_empty() {
            return Self::empty();
        }
        let (rows, cols) = (self.row_count(), self.column_count());
        let data = (0..cols)
            .map(|j| (0..rows).map(|i| self.data[i][j]).collect())
            .collect();
        Self { data }
    }

    /// Multiplies one row in place. A factor of one leaves the row as is.
    pub fn scale_row(&mut self, index: usize, factor: T) -> Result<()> {
        if index >= self.row_count() {
            return Err(MatrixError::RowOutOfBounds {
                index,
                rows: self.row_count(),
            });
        }
        if factor == T::one() {
            return Ok(());
        }
        for cell in &mut self.data[index] {
            *cell = *cell * factor;
        }
        Ok(())
    }

    /// Multiplies one column in place. A factor of one leaves it as is.
    pub fn scale_column(&mut self, index: usize, factor: T) -> Result<()> {
        if index >= self.column_count() {
            return Err(MatrixError::ColumnOutOfBounds {
                index,
                cols: self.column_count(),
            });
        }
        if factor == T::one() {
            return Ok(());
        }
        for row in &mut self.data {
            row[index] = row[index] * factor;
        }
        Ok(())
    }

    /// Multiplies every cell in place.
    pub fn scale(&mut self, factor: T) {
        if factor == T::one() {
            return;
        }
        for row in &mut self.data {
            for cell in row {
                *cell = *cell * factor;
            }
        }
    }

    /// Converts every cell into another element type.
    pub fn convert<U>(&self) -> Matrix<U>
    where
        U: Numeric + From<T>,
    {
        Matrix {
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(|cell| U::from(*cell)).collect())
                .collect(),
        }
    }

    /// Square matrix with the multiplicative identity on the diagonal.
    /// `identity(0)` is the empty matrix.
    pub fn identity(size: usize) -> Self {
        let mut matrix = Self::new_using(size, size, &ParallelPolicy::default());
        for i in 0..size {
            matrix.data[i][i] = T::one();
        }
        matrix
    }

    /// Square matrix with `values` on the diagonal and zero elsewhere.
    pub fn from_diagonal(values: &[T]) -> Self {
        let mut matrix = Self::new_using(values.len(), values.len(), &ParallelPolicy::default());
        for (i, value) in values.iter().enumerate() {
            matrix.data[i][i] = *value;
        }
        matrix
    }
}

impl<T: Numeric> Default for Matrix<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Numeric> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// Panics when the coordinates are outside the current shape; prefer
    /// [`Matrix::get`] when the caller cannot guarantee bounds.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row][col]
    }
}

impl<T: Numeric> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row][col]
    }
}

// Generic serde implementations delegating to the backing grid.
impl<T> Serialize for Matrix<T>
where
    T: Numeric + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.data.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Matrix<T>
where
    T: Numeric + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let grid = Vec::<Vec<T>>::deserialize(deserializer)?;
        Matrix::from_rows(grid).map_err(serde::de::Error::custom)
    }
}
