use std::fmt;

use crate::matrices::Matrix;

// Minimum width of every value, values are left justified and padded with spaces
const FIELD_WIDTH: usize = 15;

/**
 * Renders the matrix one row per line, each value left justified in a field at least 15
 * characters wide with 3 decimal places, and every row terminated by a newline.
 *
 * The number of decimals can be overridden with the precision of the format string, eg
 * `format!("{:.1}", matrix)`.
 *
 * ```
 * use algebra::matrices::Matrix;
 * let matrix = Matrix::from_rows(vec![ vec![ 1.5, -2.25 ] ])?;
 * assert_eq!(
 *     matrix.to_string(),
 *     "1.500          -2.250         \n"
 * );
 * # Ok::<(), algebra::matrices::MatrixError>(())
 * ```
 *
 * This is a debugging aid, not a format intended to be parsed back.
 */
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        // render from one snapshot so a row is never half before and half after a write
        let values = self.row_major_values();
        for row in 0..self.rows {
            for value in &values[row * self.columns..(row + 1) * self.columns] {
                write!(
                    f,
                    "{:<width$.precision$}",
                    value,
                    width = FIELD_WIDTH,
                    precision = precision
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[test]
fn test_display_pads_every_field() {
    let matrix = Matrix::from_rows(vec![
        vec![ 1.0, 20.125 ],
        vec![ -0.25, 123456789012.5 ]
    ]).unwrap();
    let rendered = matrix.to_string();
    let lines: Vec<&str> = rendered.split_terminator('\n').collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], format!("{:<15}{:<15}", "1.000", "20.125"));
    // values longer than the field are never truncated
    assert_eq!(lines[1], format!("{:<15}{}", "-0.250", "123456789012.500"));
}

#[test]
fn test_display_precision_override() {
    let matrix = Matrix::from_rows(vec![ vec![ 0.5 ] ]).unwrap();
    assert_eq!(format!("{:.1}", matrix), format!("{:<15}\n", "0.5"));
}

#[test]
fn test_display_empty_matrices() {
    assert_eq!(Matrix::new(0, 0).unwrap().to_string(), "");
    assert_eq!(Matrix::new(0, 3).unwrap().to_string(), "");
    assert_eq!(Matrix::new(2, 0).unwrap().to_string(), "\n\n");
}
