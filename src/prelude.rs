//! The commonly used types and operations in one import.

pub use crate::angle::AngleMode;
pub use crate::element::Numeric;
pub use crate::error::{MatrixError, Result};
pub use crate::io::CsvReader;
pub use crate::matrix::{ColumnCursor, Columns, ColumnsMut, Matrix, RowCursor, Rows, RowsMut};
pub use crate::ops::{
    check_size_equal, difference, difference_using, multiply, multiply_scalar,
    multiply_scalar_using, multiply_using, multiply_vector, sum, sum_using,
};
pub use crate::parallel::ParallelPolicy;
pub use crate::transform;
