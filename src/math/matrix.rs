use rand::Rng;
use serde::{Serialize, Deserialize};
use std::ops::Index;

use crate::error::{Error, Result};

/// Row-major table of samples: one row per sample, one column per feature.
///
/// Serialized as a plain array of rows; deserializing goes through
/// [`Matrix::from_rows`], so a loaded matrix is never empty or ragged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Uniform samples in `[0, 1)`.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>();
            }
        }

        res
    }

    /// Builds a matrix from owned rows.
    ///
    /// Fails on an empty table, on rows with no columns, and on ragged rows.
    pub fn from_rows(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = match data.first() {
            Some(first) => first.len(),
            None => return Err(Error::invalid("matrix must have at least one row")),
        };
        if cols == 0 {
            return Err(Error::invalid("matrix rows must have at least one column"));
        }
        if let Some(bad) = data.iter().find(|row| row.len() != cols) {
            return Err(Error::DimensionMismatch {
                what: "matrix row",
                expected: cols,
                found: bad.len(),
            });
        }

        Ok(Matrix {
            rows: data.len(),
            cols,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.data
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.data.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Panics if `i >= rows`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.iter().map(|row| row.as_slice())
    }

    pub fn is_finite(&self) -> bool {
        self.data.iter().flatten().all(|x| x.is_finite())
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = Error;

    fn try_from(data: Vec<Vec<f64>>) -> Result<Matrix> {
        Matrix::from_rows(data)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Vec<Vec<f64>> {
        m.into_rows()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[i][j]
    }
}
