pub mod rule;

pub use rule::{update_weight, update_weights, TrainingAlgorithm};
