use serde::{Serialize, Deserialize};

/// Per-epoch statistics emitted by `train_loop`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the training
/// loop sends one `EpochStats` value at the end of every completed epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number within the current run.
    pub epoch: usize,
    /// `max_epochs` of the network being trained.
    pub total_epochs: usize,
    /// The value appended to the network's error history for this epoch.
    pub mean_squared_error: f64,
    /// Number of samples whose error exceeded the target and moved the weights.
    pub weight_updates: usize,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
