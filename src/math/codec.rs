//! JSON codec for matrices, independent of the sample pipeline.
//!
//! A matrix is stored as a single-field document whose `array` holds the rows:
//!
//! ```json
//! { "array": [[0.1, 0.2], [0.3, 0.4]] }
//! ```
//!
//! Intended for auxiliary numeric state such as learned weight matrices.

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::math::error::{MatrixError, Result};
use crate::math::matrix::Matrix;
use crate::persist::write_replacing;

/// Field holding the nested rows.
pub const ARRAY_FIELD: &str = "array";

/// Serializable form of a [`Matrix`]: plain nested rows under `array`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixDocument {
    pub array: Vec<Vec<f64>>,
}

impl MatrixDocument {
    /// Converts `matrix` to nested rows. JSON has no NaN or infinity, so
    /// non-finite entries are rejected here.
    pub fn from_matrix(matrix: &Matrix) -> Result<MatrixDocument> {
        for (row, values) in matrix.row_slices().enumerate() {
            if let Some(col) = values.iter().position(|x| !x.is_finite()) {
                return Err(MatrixError::NonFinite { row, col });
            }
        }
        Ok(MatrixDocument { array: matrix.to_nested() })
    }

    pub fn into_matrix(self) -> Result<Matrix> {
        Matrix::from_data(self.array)
    }
}

/// Encodes `matrix` as a compact matrix document.
pub fn encode(matrix: &Matrix) -> Result<String> {
    let document = MatrixDocument::from_matrix(matrix)?;
    serde_json::to_string(&document).map_err(MatrixError::Json)
}

/// Decodes a matrix document produced by [`encode`] (or any JSON object with
/// a rectangular numeric `array` field; other fields are ignored).
pub fn decode(text: &str) -> Result<Matrix> {
    let mut value: serde_json::Value = serde_json::from_str(text).map_err(MatrixError::Json)?;
    let array = value.get_mut(ARRAY_FIELD)
        .map(serde_json::Value::take)
        .ok_or(MatrixError::MissingField)?;
    let rows: Vec<Vec<f64>> = serde_json::from_value(array).map_err(MatrixError::Json)?;
    MatrixDocument { array: rows }.into_matrix()
}

/// Writes `matrix` to `path` as a pretty-printed matrix document, replacing
/// any previous file only once the new one is complete.
pub fn save_json(path: impl AsRef<Path>, matrix: &Matrix) -> Result<()> {
    let path = path.as_ref();
    let document = MatrixDocument::from_matrix(matrix)?;
    write_replacing(path, |file| {
        let mut writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &document)?;
        writer.flush()
    })?;
    debug!(path = %path.display(), rows = matrix.rows(), cols = matrix.cols(), "saved matrix");
    Ok(())
}

/// Reads a matrix previously written by [`save_json`].
pub fn load_json(path: impl AsRef<Path>) -> Result<Matrix> {
    let text = std::fs::read_to_string(path)?;
    decode(&text)
}
