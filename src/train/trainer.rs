use crate::{
    error::Result,
    network::network::NeuralNet,
    train::{loop_fn::train_loop, train_config::TrainConfig},
};

/// Trains `network` for its configured `max_epochs` with no progress channel
/// or stop flag, and returns the error of the last sample processed.
///
/// The network is updated in place: weights, error history, epoch count and
/// training error all reflect the run afterwards.
pub fn train(network: &mut NeuralNet) -> Result<f64> {
    train_loop(network, &TrainConfig::new())
}
