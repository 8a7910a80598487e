use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

use crate::activation::ActivationKind;
use crate::error::{Error, Result};

/// Learning rule used to adjust input weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingAlgorithm {
    /// `w + lr * error * x`
    Perceptron,
    /// `w + lr * error * x * f'(net)`
    Adaline,
}

impl TrainingAlgorithm {
    /// Computes a single new weight. Pure; the caller commits the result.
    ///
    /// `net_value` is only read by `Adaline`, which evaluates the activation
    /// derivative on it and so fails for activations without one.
    pub fn update(
        self,
        old_weight: f64,
        learning_rate: f64,
        error: f64,
        sample_value: f64,
        net_value: f64,
        activation: ActivationKind,
    ) -> Result<f64> {
        match self {
            TrainingAlgorithm::Perceptron => {
                Ok(old_weight + learning_rate * error * sample_value)
            }
            TrainingAlgorithm::Adaline => {
                let slope = activation.derivative(net_value)?;
                Ok(old_weight + learning_rate * error * sample_value * slope)
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TrainingAlgorithm::Perceptron => "perceptron",
            TrainingAlgorithm::Adaline => "adaline",
        }
    }
}

/// `update(algorithm, ...)`; same as [`TrainingAlgorithm::update`].
pub fn update_weight(
    algorithm: TrainingAlgorithm,
    old_weight: f64,
    learning_rate: f64,
    error: f64,
    sample_value: f64,
    net_value: f64,
    activation: ActivationKind,
) -> Result<f64> {
    algorithm.update(old_weight, learning_rate, error, sample_value, net_value, activation)
}

/// Recomputes every weight for one sample and returns the new vector.
///
/// Each entry is derived from `weights` as passed in, never from an entry
/// already recomputed in this call. `weights` is left untouched, so a failure
/// part way through commits nothing.
pub fn update_weights(
    algorithm: TrainingAlgorithm,
    weights: &[f64],
    sample: &[f64],
    learning_rate: f64,
    error: f64,
    net_value: f64,
    activation: ActivationKind,
) -> Result<Vec<f64>> {
    if weights.len() != sample.len() {
        return Err(Error::DimensionMismatch {
            what: "sample features",
            expected: weights.len(),
            found: sample.len(),
        });
    }

    weights.iter()
        .zip(sample.iter())
        .map(|(&w, &x)| algorithm.update(w, learning_rate, error, x, net_value, activation))
        .collect()
}

impl fmt::Display for TrainingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TrainingAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "perceptron" => Ok(TrainingAlgorithm::Perceptron),
            "adaline" => Ok(TrainingAlgorithm::Adaline),
            other => Err(Error::InvalidInput(format!("unknown training algorithm `{other}`"))),
        }
    }
}
