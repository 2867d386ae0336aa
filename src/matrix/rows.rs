//! Live row view over a matrix, and its traversal cursor.

use crate::element::Numeric;
use crate::error::{MatrixError, Result};

use super::Matrix;

/// Read-only live view of a matrix's rows.
///
/// The view owns no cells; counts and contents are read from the matrix at
/// each access. Returned rows are fresh copies, never aliases into storage.
pub struct Rows<'a, T: Numeric> {
    matrix: &'a Matrix<T>,
}

impl<'a, T: Numeric> Rows<'a, T> {
    pub(super) fn new(matrix: &'a Matrix<T>) -> Self {
        Self { matrix }
    }

    /// Row count, derived live from the matrix shape.
    pub fn len(&self) -> usize {
        self.matrix.row_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fresh copy of the requested row.
    pub fn get(&self, index: usize) -> Option<Vec<T>> {
        self.matrix.data.get(index).cloned()
    }

    /// Index of the first row equal to `probe`, or `None` when no row
    /// matches or the probe length differs from the column count.
    pub fn index_of(&self, probe: &[T]) -> Option<usize> {
        if probe.len() != self.matrix.column_count() {
            return None;
        }
        self.matrix.data.iter().position(|row| row.as_slice() == probe)
    }

    pub fn contains(&self, probe: &[T]) -> bool {
        self.index_of(probe).is_some()
    }

    /// Snapshot of every row.
    pub fn to_grid(&self) -> Vec<Vec<T>> {
        self.matrix.data.clone()
    }

    /// Restartable cursor over the rows.
    pub fn iter(&self) -> RowCursor<'a, T> {
        RowCursor::new(self.matrix)
    }
}

impl<'a, T: Numeric> IntoIterator for Rows<'a, T> {
    type Item = Vec<T>;
    type IntoIter = RowCursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        RowCursor::new(self.matrix)
    }
}

/// Mutating live view of a matrix's rows.
///
/// Structural edits reshape the matrix in place; the matrix and any view
/// created afterwards observe the new shape immediately.
pub struct RowsMut<'a, T: Numeric> {
    matrix: &'a mut Matrix<T>,
}

impl<'a, T: Numeric> RowsMut<'a, T> {
    pub(super) fn new(matrix: &'a mut Matrix<T>) -> Self {
        Self { matrix }
    }

    pub fn len(&self) -> usize {
        self.matrix.row_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<Vec<T>> {
        self.matrix.data.get(index).cloned()
    }

    pub fn index_of(&self, probe: &[T]) -> Option<usize> {
        self.matrix.rows().index_of(probe)
    }

    pub fn contains(&self, probe: &[T]) -> bool {
        self.index_of(probe).is_some()
    }

    /// Replaces the row at `index`.
    ///
    /// The new row must match the current column count exactly.
    pub fn set(&mut self, index: usize, row: Vec<T>) -> Result<()> {
        if index >= self.len() {
            return Err(MatrixError::RowOutOfBounds {
                index,
                rows: self.len(),
            });
        }
        let expected = self.matrix.column_count();
        if row.len() != expected {
            return Err(MatrixError::ShapeMismatch {
                what: "row",
                expected,
                found: row.len(),
            });
        }
        self.matrix.data[index] = row;
        Ok(())
    }

    /// Inserts a row before `index`. The index must address an existing
    /// row; appending goes through [`RowsMut::push`].
    pub fn insert(&mut self, index: usize, row: Vec<T>) -> Result<()> {
        if index >= self.len() {
            return Err(MatrixError::RowOutOfBounds {
                index,
                rows: self.len(),
            });
        }
        let expected = self.matrix.column_count();
        if row.len() != expected {
            return Err(MatrixError::ShapeMismatch {
                what: "row",
                expected,
                found: row.len(),
            });
        }
        self.matrix.data.insert(index, row);
        Ok(())
    }

    /// Appends a row. An existing row is required to define the width, so
    /// pushing onto the empty matrix fails.
    pub fn push(&mut self, row: Vec<T>) -> Result<()> {
        let expected = self.matrix.column_count();
        if self.is_empty() || row.len() != expected {
            return Err(MatrixError::ShapeMismatch {
                what: "row",
                expected,
                found: row.len(),
            });
        }
        self.matrix.data.push(row);
        Ok(())
    }

    /// Removes and returns the row at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Vec<T>> {
        if index >= self.len() {
            return Err(MatrixError::RowOutOfBounds {
                index,
                rows: self.len(),
            });
        }
        Ok(self.matrix.data.remove(index))
    }

    /// Removes the first row equal to `probe`, reporting whether one was
    /// found.
    pub fn remove(&mut self, probe: &[T]) -> bool {
        match self.index_of(probe) {
            Some(index) => {
                self.matrix.data.remove(index);
                true
            }
            None => false,
        }
    }

    /// Clearing all rows is not a legal structural operation; always fails.
    pub fn clear(&mut self) -> Result<()> {
        Err(MatrixError::Unsupported)
    }
}

/// Restartable, forward-only cursor yielding one row at a time.
///
/// The cursor starts before the first row. Each step yields a freshly
/// allocated copy of the current row, so values handed out earlier cannot be
/// corrupted by later edits. The borrow it holds keeps the matrix shape
/// fixed for the cursor's whole lifetime.
pub struct RowCursor<'a, T: Numeric> {
    matrix: &'a Matrix<T>,
    index: Option<usize>,
}

impl<'a, T: Numeric> RowCursor<'a, T> {
    pub(super) fn new(matrix: &'a Matrix<T>) -> Self {
        Self {
            matrix,
            index: None,
        }
    }

    /// Rewinds to the before-first position.
    pub fn reset(&mut self) {
        self.index = None;
    }
}

impl<T: Numeric> Iterator for RowCursor<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.index.map_or(0, |current| current + 1);
        if next >= self.matrix.row_count() {
            return None;
        }
        self.index = Some(next);
        self.matrix.data.get(next).cloned()
    }
}
