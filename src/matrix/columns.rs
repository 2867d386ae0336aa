//! Live column view over a matrix, and its traversal cursor.

use crate::element::Numeric;
use crate::error::{MatrixError, Result};

use super::Matrix;

/// Read-only live view of a matrix's columns.
///
/// Columns are not contiguous in storage, so every access assembles a fresh
/// copy of the requested cells.
pub struct Columns<'a, T: Numeric> {
    matrix: &'a Matrix<T>,
}

impl<'a, T: Numeric> Columns<'a, T> {
    pub(super) fn new(matrix: &'a Matrix<T>) -> Self {
        Self { matrix }
    }

    /// Column count, derived live from the matrix shape.
    pub fn len(&self) -> usize {
        self.matrix.column_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fresh copy of the requested column.
    pub fn get(&self, index: usize) -> Option<Vec<T>> {
        if index >= self.len() {
            return None;
        }
        Some(self.matrix.data.iter().map(|row| row[index]).collect())
    }

    /// Index of the first column equal to `probe`, or `None` when no column
    /// matches or the probe length differs from the row count.
    pub fn index_of(&self, probe: &[T]) -> Option<usize> {
        if probe.len() != self.matrix.row_count() {
            return None;
        }
        (0..self.len()).find(|&col| {
            self.matrix
                .data
                .iter()
                .zip(probe)
                .all(|(row, expected)| row[col] == *expected)
        })
    }

    pub fn contains(&self, probe: &[T]) -> bool {
        self.index_of(probe).is_some()
    }

    /// Restartable cursor over the columns.
    pub fn iter(&self) -> ColumnCursor<'a, T> {
        ColumnCursor::new(self.matrix)
    }
}

impl<'a, T: Numeric> IntoIterator for Columns<'a, T> {
    type Item = Vec<T>;
    type IntoIter = ColumnCursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        ColumnCursor::new(self.matrix)
    }
}

/// Mutating live view of a matrix's columns.
pub struct ColumnsMut<'a, T: Numeric> {
    matrix: &'a mut Matrix<T>,
}

impl<'a, T: Numeric> ColumnsMut<'a, T> {
    pub(super) fn new(matrix: &'a mut Matrix<T>) -> Self {
        Self { matrix }
    }

    pub fn len(&self) -> usize {
        self.matrix.column_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<Vec<T>> {
        self.matrix.columns().get(index)
    }

    pub fn index_of(&self, probe: &[T]) -> Option<usize> {
        self.matrix.columns().index_of(probe)
    }

    pub fn contains(&self, probe: &[T]) -> bool {
        self.index_of(probe).is_some()
    }

    /// Replaces the column at `index`.
    ///
    /// The new column must match the current row count exactly.
    pub fn set(&mut self, index: usize, column: Vec<T>) -> Result<()> {
        if index >= self.len() {
            return Err(MatrixError::ColumnOutOfBounds {
                index,
                cols: self.len(),
            });
        }
        let expected = self.matrix.row_count();
        if column.len() != expected {
            return Err(MatrixError::ShapeMismatch {
                what: "column",
                expected,
                found: column.len(),
            });
        }
        for (row, value) in self.matrix.data.iter_mut().zip(column) {
            row[index] = value;
        }
        Ok(())
    }

    /// Inserts a column before `index`; `index` equal to the column count
    /// appends. The matrix must already have rows to define the height.
    pub fn insert(&mut self, index: usize, column: Vec<T>) -> Result<()> {
        if index > self.len() {
            return Err(MatrixError::ColumnOutOfBounds {
                index,
                cols: self.len(),
            });
        }
        let expected = self.matrix.row_count();
        if expected == 0 || column.len() != expected {
            return Err(MatrixError::ShapeMismatch {
                what: "column",
                expected,
                found: column.len(),
            });
        }
        for (row, value) in self.matrix.data.iter_mut().zip(column) {
            row.insert(index, value);
        }
        Ok(())
    }

    /// Appends a column on the right edge.
    pub fn push(&mut self, column: Vec<T>) -> Result<()> {
        let at = self.len();
        self.insert(at, column)
    }

    /// Removes and returns the column at `index`. Removing the only column
    /// collapses the matrix to empty.
    pub fn remove_at(&mut self, index: usize) -> Result<Vec<T>> {
        if index >= self.len() {
            return Err(MatrixError::ColumnOutOfBounds {
                index,
                cols: self.len(),
            });
        }
        if self.len() == 1 {
            let removed = self.matrix.data.iter().map(|row| row[0]).collect();
            self.matrix.data.clear();
            return Ok(removed);
        }
        Ok(self
            .matrix
            .data
            .iter_mut()
            .map(|row| row.remove(index))
            .collect())
    }

    /// Removes the first column equal to `probe`, reporting whether one was
    /// found.
    pub fn remove(&mut self, probe: &[T]) -> bool {
        match self.index_of(probe) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Clearing all columns is not a legal structural operation; always
    /// fails.
    pub fn clear(&mut self) -> Result<()> {
        Err(MatrixError::Unsupported)
    }
}

/// Restartable, forward-only cursor yielding one column at a time.
///
/// Starts before the first column and yields a freshly assembled copy per
/// step, bounded by the live column count.
pub struct ColumnCursor<'a, T: Numeric> {
    matrix: &'a Matrix<T>,
    index: Option<usize>,
}

impl<'a, T: Numeric> ColumnCursor<'a, T> {
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

impl<T: Numeric> Iterator for ColumnCursor<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.index.map_or(0, |current| current + 1);
        if next >= self.matrix.column_count() {
            return None;
        }
        self.index = Some(next);
        Some(self.matrix.data.iter().map(|row| row[next]).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix<i32> {
        Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap()
    }

    #[test]
    fn test_len_is_live() {
        let mut m = sample();
        assert_eq!(m.columns().len(), 3);
        m.columns_mut().remove_at(0).unwrap();
        assert_eq!(m.columns().len(), 2);
    }

    #[test]
    fn test_get_assembles_column() {
        let m = sample();
        assert_eq!(m.columns().get(1).unwrap(), vec![2, 5]);
        assert!(m.columns().get(3).is_none());
    }

    #[test]
    fn test_index_of_and_contains() {
        let m = sample();
        assert_eq!(m.columns().index_of(&[3, 6]), Some(2));
        assert_eq!(m.columns().index_of(&[6, 3]), None);
        assert_eq!(m.columns().index_of(&[1]), None);
        assert!(m.columns().contains(&[1, 4]));
    }

    #[test]
    fn test_set_validates_shape() {
        let mut m = sample();
        m.columns_mut().set(0, vec![10, 40]).unwrap();
        assert_eq!(m[(0, 0)], 10);
        assert_eq!(m[(1, 0)], 40);

        assert!(matches!(
            m.columns_mut().set(0, vec![1]),
            Err(MatrixError::ShapeMismatch { .. })
        ));
        assert!(matches!(
            m.columns_mut().set(9, vec![1, 2]),
            Err(MatrixError::ColumnOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_insert_widens_every_row() {
        let mut m = sample();
        m.columns_mut().insert(1, vec![9, 9]).unwrap();
        assert_eq!(m.column_count(), 4);
        assert_eq!(m.rows().get(0).unwrap(), vec![1, 9, 2, 3]);
        assert_eq!(m.rows().get(1).unwrap(), vec![4, 9, 5, 6]);

        assert!(matches!(
            m.columns_mut().insert(9, vec![1, 2]),
            Err(MatrixError::ColumnOutOfBounds { .. })
        ));
        assert!(matches!(
            m.columns_mut().insert(0, vec![1]),
            Err(MatrixError::ShapeMismatch { .. })
        ));

        let mut empty: Matrix<i32> = Matrix::empty();
        assert!(empty.columns_mut().insert(0, vec![]).is_err());
    }

    #[test]
    fn test_push_appends_on_right() {
        let mut m = sample();
        m.columns_mut().push(vec![7, 8]).unwrap();
        assert_eq!(m.columns().get(3).unwrap(), vec![7, 8]);
    }

    #[test]
    fn test_remove_at_returns_column() {
        let mut m = sample();
        let removed = m.columns_mut().remove_at(1).unwrap();
        assert_eq!(removed, vec![2, 5]);
        assert_eq!(m.rows().get(0).unwrap(), vec![1, 3]);
        assert!(m.columns_mut().remove_at(9).is_err());
    }

    #[test]
    fn test_remove_last_column_collapses_to_empty() {
        let mut m = Matrix::from_rows(vec![vec![1], vec![2]]).unwrap();
        let removed = m.columns_mut().remove_at(0).unwrap();
        assert_eq!(removed, vec![1, 2]);
        assert!(m.is_empty());
        assert_eq!(m.row_count(), 0);
    }

    #[test]
    fn test_remove_by_value() {
        let mut m = sample();
        assert!(m.columns_mut().remove(&[2, 5]));
        assert!(!m.columns_mut().remove(&[2, 5]));
        assert_eq!(m.column_count(), 2);
    }

    #[test]
    fn test_clear_is_unsupported() {
        let mut m = sample();
        assert_eq!(
            m.columns_mut().clear().unwrap_err(),
            MatrixError::Unsupported
        );
        assert_eq!(m.column_count(), 3);
    }

    #[test]
    fn test_cursor_yields_copies_and_resets() {
        let m = sample();
        let mut cursor = m.columns().iter();
        assert_eq!(cursor.next().unwrap(), vec![1, 4]);
        assert_eq!(cursor.next().unwrap(), vec![2, 5]);
        assert_eq!(cursor.next().unwrap(), vec![3, 6]);
        assert!(cursor.next().is_none());

        cursor.reset();
        assert_eq!(cursor.next().unwrap(), vec![1, 4]);
    }

    #[test]
    fn test_view_iteration() {
        let m = sample();
        let collected: Vec<Vec<i32>> = m.columns().into_iter().collect();
        assert_eq!(collected, vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
    }
}
