/*!
 * Dense matrix type which can be shared and mutated across threads
 *
 * A [Matrix] stores `rows * columns` values of `f64` in row major order behind a
 * reader/writer lock. Every method takes `&self`, so a matrix can be shared by reference
 * between scoped threads or placed in an [`Arc`](std::sync::Arc) and read and written from
 * any number of threads at once.
 *
 * # Locking
 *
 * The lock is held for exactly one element access at a time. [`get`](Matrix::get) takes it in
 * shared mode and [`set`](Matrix::set) in exclusive mode. Compound operations such as
 * [`each`](Matrix::each), [`add`](Matrix::add) or [`scale`](Matrix::scale) are a sequence of
 * independent read then write pairs, one per element, and are **not** atomic as a whole.
 * Two threads calling [`add_scalar`](Matrix::add_scalar) on the same matrix at the same time
 * may interleave between the read and the write of one element, and one of the updates to
 * that element is then lost. Callers which need whole operation atomicity must provide their
 * own outer synchronisation.
 *
 * No lock is ever held while another is acquired or while caller provided code runs, so none
 * of these methods can deadlock, even when both operands are the same matrix.
 */

use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub mod errors;
mod display;
#[cfg(feature = "serde")]
mod serialization;

pub use errors::MatrixError;

/**
 * Row indexes and counts are signed so that a request for a negative row can be reported
 * as an error instead of wrapping around.
 */
pub type Row = isize;
/**
 * Column indexes and counts are signed so that a request for a negative column can be
 * reported as an error instead of wrapping around.
 */
pub type Column = isize;

/**
 * A fixed size, row major, dense matrix of `f64` values.
 *
 * The size of a matrix never changes after construction. The values are owned exclusively
 * by each matrix; [`clone`](Clone::clone) and [`transpose`](Matrix::transpose) always produce
 * a new matrix with its own storage.
 *
 * ```
 * use algebra::matrices::Matrix;
 * let matrix = Matrix::new(2, 3)?;
 * matrix.set(1, 2, 4.5)?;
 * assert_eq!(matrix.get(1, 2)?, 4.5);
 * assert_eq!(matrix.get(0, 0)?, 0.0);
 * assert_eq!(matrix.dimensions(), (2, 3));
 * # Ok::<(), algebra::matrices::MatrixError>(())
 * ```
 */
pub struct Matrix {
    rows: usize,
    columns: usize,
    data: RwLock<Vec<f64>>,
}

// Lengths of Vecs never exceed isize::MAX, and rows and columns are only ever set from
// non negative Row and Column values, so converting back is lossless.
fn to_signed(length: usize) -> isize {
    length as isize
}

fn validate_dimensions(rows: Row, columns: Column) -> Result<(usize, usize), MatrixError> {
    let invalid = MatrixError::InvalidDimensions { rows, columns };
    let rows = usize::try_from(rows).map_err(|_| invalid.clone())?;
    let columns = usize::try_from(columns).map_err(|_| invalid.clone())?;
    // a size which cannot be allocated is as unusable as a negative one
    let max_length = isize::MAX as usize / std::mem::size_of::<f64>();
    match rows.checked_mul(columns) {
        Some(length) if length <= max_length => Ok((rows, columns)),
        _ => Err(invalid),
    }
}

impl Matrix {
    /**
     * Creates a matrix of the provided size with every element set to 0.0.
     *
     * Either dimension may be zero, which creates an empty matrix with no elements. Negative
     * dimensions are rejected with [`MatrixError::InvalidDimensions`].
     *
     * ```
     * use algebra::matrices::{Matrix, MatrixError};
     * let empty = Matrix::new(0, 4)?;
     * assert_eq!(empty.dimensions(), (0, 4));
     * assert_eq!(
     *     Matrix::new(-1, 3).unwrap_err(),
     *     MatrixError::InvalidDimensions { rows: -1, columns: 3 }
     * );
     * # Ok::<(), MatrixError>(())
     * ```
     */
    pub fn new(rows: Row, columns: Column) -> Result<Matrix, MatrixError> {
        let (rows, columns) = validate_dimensions(rows, columns)?;
        Ok(Matrix::with_storage(rows, columns, vec![0.0; rows * columns]))
    }

    /**
     * Creates a matrix of the provided size from values in row major order.
     *
     * Fails with [`MatrixError::DataLengthMismatch`] if there are not exactly
     * `rows * columns` values.
     *
     * ```
     * use algebra::matrices::Matrix;
     * let matrix = Matrix::from_flat_row_major((2, 2), vec![
     *     1.0, 2.0,
     *     3.0, 4.0
     * ])?;
     * assert_eq!(matrix.get(1, 0)?, 3.0);
     * # Ok::<(), algebra::matrices::MatrixError>(())
     * ```
     */
    pub fn from_flat_row_major(
        size: (Row, Column),
        values: Vec<f64>,
    ) -> Result<Matrix, MatrixError> {
        let (rows, columns) = validate_dimensions(size.0, size.1)?;
        if values.len() != rows * columns {
            return Err(MatrixError::DataLengthMismatch {
                rows: size.0,
                columns: size.1,
                length: values.len(),
            });
        }
        Ok(Matrix::with_storage(rows, columns, values))
    }

    /**
     * Creates a matrix from a nested list of values, each inner vector being a row, the same
     * way as when writing matrices in mathematics.
     *
     * An empty list creates a 0x0 matrix. Rows of different lengths are rejected with
     * [`MatrixError::DataLengthMismatch`].
     *
     * ```
     * use algebra::matrices::Matrix;
     * let matrix = Matrix::from_rows(vec![
     *     vec![ 1.0, 2.0, 4.0 ],
     *     vec![ 8.0, 9.0, 3.0 ]])?;
     * assert_eq!(matrix.dimensions(), (2, 3));
     * # Ok::<(), algebra::matrices::MatrixError>(())
     * ```
     */
    pub fn from_rows(values: Vec<Vec<f64>>) -> Result<Matrix, MatrixError> {
        let rows = values.len();
        let columns = values.first().map_or(0, Vec::len);
        if let Some(ragged) = values.iter().find(|row| row.len() != columns) {
            return Err(MatrixError::DataLengthMismatch {
                rows: to_signed(rows),
                columns: to_signed(columns),
                length: ragged.len(),
            });
        }
        let data = values.into_iter().flatten().collect();
        Matrix::from_flat_row_major((to_signed(rows), to_signed(columns)), data)
    }

    fn with_storage(rows: usize, columns: usize, data: Vec<f64>) -> Matrix {
        Matrix {
            rows,
            columns,
            data: RwLock::new(data),
        }
    }

    /**
     * Returns the dimensionality of this matrix in Row, Column format
     */
    pub fn dimensions(&self) -> (Row, Column) {
        (self.rows(), self.columns())
    }

    /**
     * Gets the number of rows in this matrix.
     */
    pub fn rows(&self) -> Row {
        to_signed(self.rows)
    }

    /**
     * Gets the number of columns in this matrix.
     */
    pub fn columns(&self) -> Column {
        to_signed(self.columns)
    }

    /**
     * Validates that the index refers to an element of this matrix and returns where that
     * element is in the row major storage.
     */
    fn check_range(&self, row: Row, column: Column) -> Result<usize, MatrixError> {
        if row < 0 || column < 0 {
            return Err(MatrixError::NegativeIndex { row, column });
        }
        // both are non negative so the conversions cannot fail
        let (i, j) = (row as usize, column as usize);
        if i >= self.rows || j >= self.columns {
            return Err(MatrixError::IndexOutOfRange {
                row,
                column,
                rows: self.rows(),
                columns: self.columns(),
            });
        }
        Ok(i * self.columns + j)
    }

    fn check_equal_dimensions(&self, other: &Matrix) -> Result<(), MatrixError> {
        if self.rows != other.rows || self.columns != other.columns {
            return Err(MatrixError::DimensionMismatch {
                left: self.dimensions(),
                right: other.dimensions(),
            });
        }
        Ok(())
    }

    // Every critical section is a single read or a single write of one f64, which cannot
    // leave the storage half updated, so a lock poisoned by a panic elsewhere is still safe
    // to keep using.
    fn read_lock(&self) -> RwLockReadGuard<'_, Vec<f64>> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, Vec<f64>> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_element(&self, index: usize) -> f64 {
        self.read_lock()[index]
    }

    fn write_element(&self, index: usize, value: f64) {
        self.write_lock()[index] = value;
    }

    /**
     * Gets a copy of the value at this row and column. Rows and Columns are 0 indexed.
     */
    pub fn get(&self, row: Row, column: Column) -> Result<f64, MatrixError> {
        let index = self.check_range(row, column)?;
        Ok(self.read_element(index))
    }

    /**
     * Sets a new value to this row and column. Rows and Columns are 0 indexed.
     *
     * This only needs a shared reference, the write is guarded by the matrix's lock.
     */
    pub fn set(&self, row: Row, column: Column, value: f64) -> Result<(), MatrixError> {
        let index = self.check_range(row, column)?;
        self.write_element(index, value);
        Ok(())
    }

    /**
     * Applies a function to every element in the matrix in row major order, replacing each
     * value with the one returned.
     *
     * The function is given the row, column and current value of each element. The current
     * value is read and the new value written back with two separate lock acquisitions, and
     * the function itself runs without any lock held, so it may freely call other methods on
     * this matrix.
     *
     * ```
     * use algebra::matrices::Matrix;
     * let matrix = Matrix::new(2, 2)?;
     * matrix.each(|i, j, _| (i * 10 + j) as f64);
     * assert_eq!(matrix.row_major_values(), vec![ 0.0, 1.0, 10.0, 11.0 ]);
     * # Ok::<(), algebra::matrices::MatrixError>(())
     * ```
     */
    pub fn each(&self, mut function: impl FnMut(Row, Column, f64) -> f64) {
        for i in 0..self.rows {
            for j in 0..self.columns {
                let index = i * self.columns + j;
                let value = self.read_element(index);
                let value = function(to_signed(i), to_signed(j), value);
                self.write_element(index, value);
            }
        }
    }

    /**
     * Computes and returns the transpose of this matrix as a new matrix.
     *
     * ```
     * use algebra::matrices::Matrix;
     * let x = Matrix::from_rows(vec![
     *    vec![ 1.0, 2.0, 3.0 ],
     *    vec![ 4.0, 5.0, 6.0 ]])?;
     * let y = Matrix::from_rows(vec![
     *    vec![ 1.0, 4.0 ],
     *    vec![ 2.0, 5.0 ],
     *    vec![ 3.0, 6.0 ]])?;
     * assert_eq!(x.transpose(), y);
     * # Ok::<(), algebra::matrices::MatrixError>(())
     * ```
     */
    pub fn transpose(&self) -> Matrix {
        let mut transposed = vec![0.0; self.rows * self.columns];
        for i in 0..self.rows {
            for j in 0..self.columns {
                transposed[j * self.rows + i] = self.read_element(i * self.columns + j);
            }
        }
        Matrix::with_storage(self.columns, self.rows, transposed)
    }

    // Elementwise read-modify-write of this matrix with the same element of another, one
    // element at a time.
    fn combine(
        &self,
        other: &Matrix,
        operation: impl Fn(f64, f64) -> f64,
    ) -> Result<(), MatrixError> {
        self.check_equal_dimensions(other)?;
        for index in 0..self.rows * self.columns {
            let value = operation(self.read_element(index), other.read_element(index));
            self.write_element(index, value);
        }
        Ok(())
    }

    fn update(&self, operation: impl Fn(f64) -> f64) {
        for index in 0..self.rows * self.columns {
            let value = operation(self.read_element(index));
            self.write_element(index, value);
        }
    }

    /**
     * Elementwise addition of another matrix of the same size into this one.
     *
     * Matrices of different sizes are rejected with [`MatrixError::DimensionMismatch`] before
     * any element is modified.
     */
    pub fn add(&self, other: &Matrix) -> Result<(), MatrixError> {
        self.combine(other, |x, y| x + y)
    }

    /**
     * Elementwise subtraction of another matrix of the same size from this one.
     *
     * Matrices of different sizes are rejected with [`MatrixError::DimensionMismatch`] before
     * any element is modified.
     */
    pub fn sub(&self, other: &Matrix) -> Result<(), MatrixError> {
        self.combine(other, |x, y| x - y)
    }

    /**
     * Adds a scalar to every element in this matrix.
     */
    pub fn add_scalar(&self, scalar: f64) {
        self.update(|x| x + scalar)
    }

    /**
     * Multiplies every element in this matrix by a scalar.
     */
    pub fn scale(&self, scalar: f64) {
        self.update(|x| x * scalar)
    }

    /**
     * Computes the sum of the products of each pair of elements at the same position in two
     * matrices of the same size. This is the Frobenius inner product, not matrix
     * multiplication.
     *
     * ```
     * use algebra::matrices::Matrix;
     * let a = Matrix::from_rows(vec![ vec![ 1.0, 2.0 ], vec![ 3.0, 4.0 ] ])?;
     * let b = Matrix::from_rows(vec![ vec![ 5.0, 6.0 ], vec![ 7.0, 8.0 ] ])?;
     * assert_eq!(a.dot(&b)?, 70.0);
     * # Ok::<(), algebra::matrices::MatrixError>(())
     * ```
     */
    pub fn dot(&self, other: &Matrix) -> Result<f64, MatrixError> {
        self.check_equal_dimensions(other)?;
        Ok((0..self.rows * self.columns)
            .map(|index| self.read_element(index) * other.read_element(index))
            .sum())
    }

    /**
     * Returns a copy of every value in this matrix in row major order, taken while holding
     * the lock once, so the copy is never a mix of before and after a concurrent write.
     */
    pub fn row_major_values(&self) -> Vec<f64> {
        self.read_lock().clone()
    }

    /**
     * Consumes the matrix, returning its values in row major order.
     */
    pub fn into_row_major_values(self) -> Vec<f64> {
        self.data.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

/**
 * Cloning copies the values while holding the lock once, so the clone is a consistent
 * snapshot of the matrix and shares nothing with it afterwards.
 */
impl Clone for Matrix {
    fn clone(&self) -> Self {
        Matrix::with_storage(self.rows, self.columns, self.row_major_values())
    }
}

/**
 * PartialEq is implemented as two matrices are equal if and only if all their elements
 * are equal and they have the same size.
 */
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        if self.rows != other.rows || self.columns != other.columns {
            return false;
        }
        // each snapshot is taken separately so comparing a matrix with itself
        // never holds two locks at once
        let left = self.row_major_values();
        let right = other.row_major_values();
        left == right
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("data", &self.row_major_values())
            .finish()
    }
}

#[test]
fn test_check_range() {
    let matrix = Matrix::new(2, 3).unwrap();
    assert_eq!(matrix.check_range(0, 0), Ok(0));
    assert_eq!(matrix.check_range(1, 2), Ok(5));
    assert_eq!(
        matrix.check_range(-1, 0),
        Err(MatrixError::NegativeIndex { row: -1, column: 0 })
    );
    assert_eq!(
        matrix.check_range(0, 3),
        Err(MatrixError::IndexOutOfRange { row: 0, column: 3, rows: 2, columns: 3 })
    );
}

#[test]
fn test_oversized_dimensions_are_invalid() {
    assert_eq!(
        Matrix::new(isize::MAX, 2).unwrap_err(),
        MatrixError::InvalidDimensions { rows: isize::MAX, columns: 2 }
    );
    // element counts which fit in an isize but whose bytes do not
    for rows in [isize::MAX, isize::MAX / 4, isize::MAX / 8 + 1] {
        assert_eq!(
            Matrix::new(rows, 1).unwrap_err(),
            MatrixError::InvalidDimensions { rows, columns: 1 }
        );
    }
    assert_eq!(
        Matrix::from_flat_row_major((1, isize::MAX / 4), vec![]).unwrap_err(),
        MatrixError::InvalidDimensions { rows: 1, columns: isize::MAX / 4 }
    );
}

#[test]
fn test_matrix_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Matrix>();
}
