/*!
 * A dense 2-D matrix of `f64` values which can be read and written from many threads at once.
 *
 * Everything lives on the [Matrix](./matrices/struct.Matrix.html) type: construction, bounds
 * checked element access, elementwise and scalar arithmetic, the Frobenius dot product,
 * transposition and a fixed width text rendering for debugging.
 *
 * ```
 * use algebra::matrices::Matrix;
 * let matrix = Matrix::new(2, 3)?;
 * matrix.each(|i, j, _| (i + j) as f64);
 * let transposed = matrix.transpose();
 * transposed.add_scalar(1.0);
 * assert_eq!(transposed.get(2, 1)?, 4.0);
 * print!("{}", transposed);
 * # Ok::<(), algebra::matrices::MatrixError>(())
 * ```
 *
 * Randomness and output are left to the caller; the library never generates random numbers,
 * prints or logs.
 *
 * # Features
 * - `serde`: implements `Serialize` and `Deserialize` for matrices.
 */

pub mod matrices;
