//! Error taxonomy shared by construction, access and arithmetic.

/// Errors that can occur during matrix operations.
///
/// Every failure is reported synchronously to the caller through [`Result`];
/// the library never retries, logs or downgrades them. Numeric degeneracy
/// (dividing by a zero determinant during inversion) is deliberately not an
/// error class and produces whatever the element type's own division yields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    #[error("cell ({row}, {col}) is outside a {rows}x{cols} matrix")]
    CellOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("row index {index} is outside a matrix with {rows} rows")]
    RowOutOfBounds { index: usize, rows: usize },

    #[error("column index {index} is outside a matrix with {cols} columns")]
    ColumnOutOfBounds { index: usize, cols: usize },

    #[error("first bound {first} exceeds last bound {last}")]
    InvertedBounds { first: usize, last: usize },

    #[error("row {index} has {found} cells, expected {expected}")]
    RaggedRows {
        index: usize,
        found: usize,
        expected: usize,
    },

    #[error("new {what} must have length {expected}, got {found}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("matrix sizes are incompatible: {left_rows}x{left_cols} vs {right_rows}x{right_cols}")]
    SizeMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    #[error("operation requires a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("matrix is neither a vector nor diagonal")]
    NotVector,

    #[error("operation requires at least one matrix")]
    NoOperands,

    #[error("clearing a matrix is not a legal structural operation")]
    Unsupported,

    #[error("separator must not be empty")]
    EmptySeparator,

    #[error("cannot parse {token:?} at row {row}, column {col}")]
    Parse {
        row: usize,
        col: usize,
        token: String,
    },
}

/// Crate-local result alias.
pub type Result<T, E = MatrixError> = core::result::Result<T, E>;
