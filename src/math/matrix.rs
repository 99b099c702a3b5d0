use crate::math::error::{MatrixError, Result};

/// Dense row-major matrix of `f64`. Every row has exactly `cols` entries,
/// and a matrix without rows has no columns either.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

impl Matrix {
    /// A `rows`×`cols` matrix of zeros. `zeros(0, n)` is the 0×0 matrix.
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        let cols = if rows == 0 { 0 } else { cols };
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Builds a matrix from nested rows, rejecting ragged input.
    ///
    /// An empty outer vector gives a 0×0 matrix.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = data.first().map_or(0, Vec::len);
        if let Some((row, r)) = data.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(MatrixError::NotRectangular { row, expected: cols, found: r.len() });
        }
        Ok(Matrix { rows: data.len(), cols, data })
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Overwrites one entry.
    ///
    /// # Panics
    /// Panics if `row >= rows()` or `col >= cols()`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row][col] = value;
    }

    pub fn row_slices(&self) -> impl Iterator<Item = &[f64]> {
        self.data.iter().map(Vec::as_slice)
    }

    /// Plain nested rows, the form handed to a serializer.
    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        self.data.clone()
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}
