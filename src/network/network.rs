use rand::Rng;

use crate::activation::ActivationKind;
use crate::error::{Error, Result};
use crate::math::matrix::Matrix;
use crate::network::config::NetworkConfig;
use crate::optim::TrainingAlgorithm;

/// A single-layer network together with the data it is trained on.
///
/// Each input feature owns exactly one weight. Weights only change through
/// [`crate::train::train_loop`]; everything else is read-only after
/// construction.
#[derive(Debug, Clone)]
pub struct NeuralNet {
    training_set: Matrix,
    target_output_set: Vec<f64>,
    weights: Vec<f64>,
    config: NetworkConfig,

    pub(crate) epochs_completed: usize,
    pub(crate) training_error: f64,
    pub(crate) mean_squared_error_list: Vec<f64>,
}

impl NeuralNet {
    /// Builds a network with caller-supplied initial weights.
    ///
    /// Fails if the config is invalid, if `weights` or `target_output_set`
    /// do not line up with the sample matrix, or if any value is not finite.
    pub fn new(
        config: NetworkConfig,
        training_set: Matrix,
        target_output_set: Vec<f64>,
        weights: Vec<f64>,
    ) -> Result<NeuralNet> {
        config.validate()?;

        if training_set.is_empty() {
            return Err(Error::invalid("training set must have at least one row and one column"));
        }
        if target_output_set.len() != training_set.rows() {
            return Err(Error::DimensionMismatch {
                what: "target outputs",
                expected: training_set.rows(),
                found: target_output_set.len(),
            });
        }
        if weights.len() != training_set.cols() {
            return Err(Error::DimensionMismatch {
                what: "weights",
                expected: training_set.cols(),
                found: weights.len(),
            });
        }
        if !training_set.is_finite() {
            return Err(Error::invalid("training set contains a non-finite value"));
        }
        if target_output_set.iter().any(|t| !t.is_finite()) {
            return Err(Error::invalid("target outputs contain a non-finite value"));
        }
        if weights.iter().any(|w| !w.is_finite()) {
            return Err(Error::invalid("initial weights contain a non-finite value"));
        }

        Ok(NeuralNet {
            training_set,
            target_output_set,
            weights,
            config,
            epochs_completed: 0,
            training_error: 0.0,
            mean_squared_error_list: Vec::new(),
        })
    }

    /// Builds a network whose weights are drawn uniformly from `[0, 1)`.
    pub fn with_random_weights<R: Rng + ?Sized>(
        config: NetworkConfig,
        training_set: Matrix,
        target_output_set: Vec<f64>,
        rng: &mut R,
    ) -> Result<NeuralNet> {
        let weights = Matrix::random(1, training_set.cols(), rng)
            .into_rows()
            .into_iter()
            .next()
            .unwrap_or_default();
        NeuralNet::new(config, training_set, target_output_set, weights)
    }

    /// Weighted sum of `sample` against the current weights.
    pub fn net_value(&self, sample: &[f64]) -> Result<f64> {
        if sample.len() != self.weights.len() {
            return Err(Error::DimensionMismatch {
                what: "sample features",
                expected: self.weights.len(),
                found: sample.len(),
            });
        }
        Ok(weighted_sum(&self.weights, sample))
    }

    /// Activated output for `sample` under the current weights.
    pub fn predict(&self, sample: &[f64]) -> Result<f64> {
        let net = self.net_value(sample)?;
        self.config.activation_kind.activate(net)
    }

    pub fn training_set(&self) -> &Matrix {
        &self.training_set
    }

    pub fn target_output_set(&self) -> &[f64] {
        &self.target_output_set
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn learning_rate(&self) -> f64 {
        self.config.learning_rate
    }

    pub fn target_error(&self) -> f64 {
        self.config.target_error
    }

    pub fn max_epochs(&self) -> usize {
        self.config.max_epochs
    }

    pub fn training_algorithm(&self) -> TrainingAlgorithm {
        self.config.training_algorithm
    }

    pub fn activation_kind(&self) -> ActivationKind {
        self.config.activation_kind
    }

    pub fn epochs_completed(&self) -> usize {
        self.epochs_completed
    }

    /// Error of the last sample processed by the last training run.
    pub fn training_error(&self) -> f64 {
        self.training_error
    }

    /// One entry per epoch executed, in order.
    pub fn mean_squared_error_list(&self) -> &[f64] {
        &self.mean_squared_error_list
    }

    /// Swaps in a freshly computed weight vector.
    pub(crate) fn replace_weights(&mut self, weights: Vec<f64>) {
        debug_assert_eq!(weights.len(), self.weights.len());
        self.weights = weights;
    }
}

pub(crate) fn weighted_sum(weights: &[f64], sample: &[f64]) -> f64 {
    weights.iter().zip(sample.iter()).map(|(w, x)| w * x).sum()
}
