pub mod config;
pub mod network;

pub use config::{EpochErrorMetric, NetworkConfig};
pub use network::NeuralNet;
