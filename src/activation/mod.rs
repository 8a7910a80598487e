pub mod activation;

pub use activation::{activate, derivative, ActivationKind};
