use std::sync::mpsc;
use std::sync::{Arc, atomic::AtomicBool};
use crate::train::epoch_stats::EpochStats;

/// Run-time options for a `train_loop` call.
///
/// Hyperparameters live in `NetworkConfig`; this only carries the hooks a
/// caller can use to observe or end a run.
///
/// # Fields
/// - `progress_tx` : optional bounded channel sender; one `EpochStats` is
///                   sent per completed epoch and blocks while the channel
///                   is full.  If the receiver is dropped the loop
///                   terminates early.
/// - `stop_flag`   : optional atomic flag; when set to `true` from another
///                   thread the loop terminates at the next epoch boundary.
#[derive(Debug, Default)]
pub struct TrainConfig {
    pub progress_tx: Option<mpsc::SyncSender<EpochStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with no progress channel and no stop flag.
    pub fn new() -> Self {
        TrainConfig::default()
    }

    pub fn with_progress(mut self, tx: mpsc::SyncSender<EpochStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn with_stop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop_flag = Some(flag);
        self
    }
}
