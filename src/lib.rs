//! Single-layer neural network training with the Perceptron and Adaline
//! learning rules.
//!
//! ```
//! use ferrite_slp::{train, ActivationKind, Dataset, NetworkConfig, NeuralNet, TrainingAlgorithm};
//!
//! # fn main() -> ferrite_slp::Result<()> {
//! let (samples, targets) = Dataset::and_gate().into_parts()?;
//! let config = NetworkConfig::new(TrainingAlgorithm::Perceptron, ActivationKind::Step, 0.1, 0.05, 50);
//! let mut net = NeuralNet::with_random_weights(config, samples, targets, &mut rand::thread_rng())?;
//! train(&mut net)?;
//!
//! assert_eq!(net.epochs_completed(), 50);
//! assert_eq!(net.predict(&[1.0, 1.0, 1.0])?, 1.0);
//! assert_eq!(net.predict(&[1.0, 0.0, 1.0])?, 0.0);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod math;
pub mod activation;
pub mod optim;
pub mod network;
pub mod train;
pub mod data;
pub mod report;

// Convenience re-exports
pub use error::{Error, Result};
pub use math::matrix::Matrix;
pub use activation::activation::{activate, derivative, ActivationKind};
pub use optim::rule::{update_weight, TrainingAlgorithm};
pub use network::config::{EpochErrorMetric, NetworkConfig};
pub use network::network::NeuralNet;
pub use train::{train, train_loop, EpochStats, TrainConfig};
pub use data::dataset::Dataset;
pub use report::report::{evaluate, render_report, SampleReport};
