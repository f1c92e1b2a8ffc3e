/*!
 * Serde support for [Matrix], enabled with the `serde` feature.
 *
 * A matrix is serialized as its size and a copy of its values in row major order:
 *
 * ```ignore
 * rows = 2
 * columns = 2
 * data = [1.0, 2.0, 3.0, 4.0]
 * ```
 *
 * Deserializing goes through the same validation as
 * [`from_flat_row_major`](Matrix::from_flat_row_major), so negative dimensions or the wrong
 * number of values are rejected with the corresponding [MatrixError](super::MatrixError)
 * message.
 */

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::matrices::{Column, Matrix, Row};

#[derive(Serialize)]
#[serde(rename = "Matrix")]
struct MatrixSerialize {
    rows: Row,
    columns: Column,
    data: Vec<f64>,
}

#[derive(Deserialize)]
#[serde(rename = "Matrix")]
struct MatrixDeserialize {
    rows: Row,
    columns: Column,
    data: Vec<f64>,
}

impl Serialize for Matrix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        MatrixSerialize {
            rows: self.rows(),
            columns: self.columns(),
            data: self.row_major_values(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Matrix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = MatrixDeserialize::deserialize(deserializer)?;
        Matrix::from_flat_row_major((fields.rows, fields.columns), fields.data)
            .map_err(serde::de::Error::custom)
    }
}
