use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};
use crate::math::matrix::Matrix;

/// Samples and their scalar targets, as loaded from disk or built in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub samples: Vec<Vec<f64>>,
    pub targets: Vec<f64>,
}

impl Dataset {
    /// Two-input AND gate. Column 0 is a constant 1.0 bias input.
    pub fn and_gate() -> Dataset {
        Dataset {
            samples: vec![
                vec![1.0, 0.0, 0.0],
                vec![1.0, 0.0, 1.0],
                vec![1.0, 1.0, 0.0],
                vec![1.0, 1.0, 1.0],
            ],
            targets: vec![0.0, 0.0, 0.0, 1.0],
        }
    }

    /// Two-input OR gate. Column 0 is a constant 1.0 bias input.
    pub fn or_gate() -> Dataset {
        Dataset {
            samples: vec![
                vec![1.0, 0.0, 0.0],
                vec![1.0, 0.0, 1.0],
                vec![1.0, 1.0, 0.0],
                vec![1.0, 1.0, 1.0],
            ],
            targets: vec![0.0, 1.0, 1.0, 1.0],
        }
    }

    /// Looks up a built-in dataset by name.
    pub fn builtin(name: &str) -> Result<Dataset> {
        match name {
            "and" => Ok(Dataset::and_gate()),
            "or" => Ok(Dataset::or_gate()),
            other => Err(Error::InvalidInput(format!("unknown built-in dataset `{other}`"))),
        }
    }

    /// Reads a dataset from a JSON file of the form
    /// `{ "samples": [[...], ...], "targets": [...] }`.
    pub fn load_json(path: &str) -> Result<Dataset> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Splits into the sample matrix and target set a `NeuralNet` takes.
    pub fn into_parts(self) -> Result<(Matrix, Vec<f64>)> {
        let matrix = Matrix::from_rows(self.samples)?;
        if matrix.rows() != self.targets.len() {
            return Err(Error::DimensionMismatch {
                what: "target outputs",
                expected: matrix.rows(),
                found: self.targets.len(),
            });
        }
        Ok((matrix, self.targets))
    }
}
