/*!
 * Errors returned by fallible [Matrix](super::Matrix) operations.
 */

use std::error::Error;
use std::fmt;

use crate::matrices::{Column, Row};

/**
 * An error indicating why a matrix could not be created, read, written or combined with
 * another matrix.
 *
 * Every variant is a local validation failure detected before any value is written to the
 * matrix, so a matrix which returned an error is left exactly as it was.
 */
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum MatrixError {
    /**
     * A matrix was requested with a negative number of rows or columns, or with more
     * elements than could ever be allocated.
     */
    InvalidDimensions { rows: Row, columns: Column },
    /**
     * An element was requested at a negative row or column.
     */
    NegativeIndex { row: Row, column: Column },
    /**
     * An element was requested at a row or column at or beyond the extent of the matrix.
     */
    IndexOutOfRange {
        row: Row,
        column: Column,
        rows: Row,
        columns: Column,
    },
    /**
     * An elementwise operation was attempted on two matrices of different sizes. No
     * broadcasting is performed.
     */
    DimensionMismatch {
        left: (Row, Column),
        right: (Row, Column),
    },
    /**
     * The number of values provided to build a matrix does not match its size, or rows of
     * different lengths were provided.
     */
    DataLengthMismatch {
        rows: Row,
        columns: Column,
        length: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use MatrixError as M;
        match self {
            M::InvalidDimensions { rows, columns } => write!(
                f,
                "Dimensions {}x{} must not be negative and must fit in memory",
                rows, columns
            ),
            M::NegativeIndex { row, column } => write!(
                f,
                "Position ({}, {}) must not be negative",
                row, column
            ),
            M::IndexOutOfRange {
                row,
                column,
                rows,
                columns,
            } => write!(
                f,
                "Position ({}, {}) is out of range for a {}x{} matrix",
                row, column, rows, columns
            ),
            M::DimensionMismatch { left, right } => write!(
                f,
                "Mismatched matrices, left is {}x{}, right is {}x{}",
                left.0, left.1, right.0, right.1
            ),
            M::DataLengthMismatch {
                rows,
                columns,
                length,
            } => write!(
                f,
                "{} values cannot fill a {}x{} matrix",
                length, rows, columns
            ),
        }
    }
}

impl Error for MatrixError {}

#[test]
fn test_error_messages() {
    assert_eq!(
        MatrixError::InvalidDimensions { rows: -1, columns: 3 }.to_string(),
        "Dimensions -1x3 must not be negative and must fit in memory"
    );
    assert_eq!(
        MatrixError::IndexOutOfRange { row: 2, column: 0, rows: 2, columns: 2 }.to_string(),
        "Position (2, 0) is out of range for a 2x2 matrix"
    );
    assert_eq!(
        MatrixError::DimensionMismatch { left: (2, 3), right: (3, 2) }.to_string(),
        "Mismatched matrices, left is 2x3, right is 3x2"
    );
}
