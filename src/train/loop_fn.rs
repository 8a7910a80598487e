use std::sync::atomic::Ordering;
use std::time::Instant;

use tracing::{debug, info, trace, warn};

use crate::activation::ActivationKind;
use crate::error::Result;
use crate::network::config::{EpochErrorMetric, NetworkConfig};
use crate::network::network::{weighted_sum, NeuralNet};
use crate::optim::rule::update_weights;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` for up to `max_epochs` epochs and returns the error of
/// the last sample processed.
///
/// Every epoch sweeps the rows in order. A sample whose absolute error is
/// strictly greater than `target_error` replaces the whole weight vector with
/// one recomputed from the pre-update weights. After each sweep one entry is
/// appended to the network's error history.
///
/// # Early termination
/// Only checked at epoch boundaries. The loop breaks early if:
/// - the `progress_tx` receiver has been dropped, **or**
/// - `config.stop_flag` is set to `true`.
///
/// # Errors
/// An update the rule cannot compute (e.g. `Adaline` with `Step`) aborts the
/// run. Weights committed by earlier samples stay in place; the failing
/// sample commits nothing and the interrupted epoch is not recorded.
pub fn train_loop(network: &mut NeuralNet, config: &TrainConfig) -> Result<f64> {
    let settings = network.config().clone();
    let rows = network.training_set().rows();
    let columns = network.training_set().cols();

    info!(
        algorithm = %settings.training_algorithm,
        activation = %settings.activation_kind,
        rows,
        columns,
        max_epochs = settings.max_epochs,
        "training started"
    );

    let mut last_error: Option<f64> = None;
    let mut epochs = 0;

    while epochs < settings.max_epochs {
        if stop_requested(config) {
            warn!(epoch = epochs, "stop flag raised, ending training early");
            break;
        }

        let t_start = Instant::now();

        // ── One full pass over the training data ───────────────────────────
        let sweep = run_one_epoch(network, &settings)?;
        last_error = Some(sweep.last_error);

        let mean_squared_error = match settings.epoch_error_metric {
            EpochErrorMetric::LastSample => sweep.last_error.powi(2),
            EpochErrorMetric::EpochMean => sweep.squared_error_sum / rows as f64,
        };
        network.mean_squared_error_list.push(mean_squared_error);
        network.epochs_completed += 1;
        epochs += 1;

        let elapsed_ms = t_start.elapsed().as_millis() as u64;
        debug!(
            epoch = epochs,
            mse = mean_squared_error,
            updates = sweep.updates,
            elapsed_ms,
            "epoch finished"
        );

        // ── Emit progress ─────────────────────────────────────────────────
        let stats = EpochStats {
            epoch: epochs,
            total_epochs: settings.max_epochs,
            mean_squared_error,
            weight_updates: sweep.updates,
            elapsed_ms,
        };

        if let Some(ref tx) = config.progress_tx {
            if tx.send(stats).is_err() {
                warn!(epoch = epochs, "progress receiver dropped, ending training early");
                break;
            }
        }
    }

    if let Some(error) = last_error {
        network.training_error = error;
    }

    info!(
        epochs,
        training_error = network.training_error,
        "training finished"
    );

    Ok(network.training_error)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Outcome of one sweep over every row.
struct Sweep {
    last_error: f64,
    squared_error_sum: f64,
    updates: usize,
}

fn stop_requested(config: &TrainConfig) -> bool {
    config.stop_flag
        .as_ref()
        .map_or(false, |flag| flag.load(Ordering::Relaxed))
}

/// Runs one epoch over the training rows in order, committing weights after
/// every sample that misses the target.
fn run_one_epoch(network: &mut NeuralNet, settings: &NetworkConfig) -> Result<Sweep> {
    let rows = network.training_set().rows();
    let mut sweep = Sweep {
        last_error: 0.0,
        squared_error_sum: 0.0,
        updates: 0,
    };

    for i in 0..rows {
        let sample = network.training_set().row(i);
        let net_value = weighted_sum(network.weights(), sample);

        let estimated_output = settings.activation_kind.activate(net_value)?;
        let actual_output = network.target_output_set()[i];
        let error = actual_output - estimated_output;

        sweep.last_error = error;
        sweep.squared_error_sum += error * error;

        if error.abs() > settings.target_error {
            let slope_at = derivative_argument(settings, net_value, estimated_output);
            let new_weights = update_weights(
                settings.training_algorithm,
                network.weights(),
                sample,
                settings.learning_rate,
                error,
                slope_at,
                settings.activation_kind,
            )?;
            trace!(row = i, error, ?new_weights, "weights replaced");
            network.replace_weights(new_weights);
            sweep.updates += 1;
        }
    }

    Ok(sweep)
}

/// Value the activation derivative is evaluated on during an update.
fn derivative_argument(settings: &NetworkConfig, net_value: f64, estimated_output: f64) -> f64 {
    if settings.corrected_logistic_derivative
        && settings.activation_kind == ActivationKind::Logistic
    {
        estimated_output
    } else {
        net_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::matrix::Matrix;
    use crate::optim::TrainingAlgorithm;
    use std::sync::{atomic::AtomicBool, mpsc, Arc};
    use std::thread;

    fn and_gate(config: NetworkConfig, weights: Vec<f64>) -> NeuralNet {
        let samples = Matrix::from_rows(vec![
            vec![1.0, 0.0, 0.0],
            vec![1.0, 0.0, 1.0],
            vec![1.0, 1.0, 0.0],
            vec![1.0, 1.0, 1.0],
        ]).unwrap();
        NeuralNet::new(config, samples, vec![0.0, 0.0, 0.0, 1.0], weights).unwrap()
    }

    fn perceptron_step(max_epochs: usize) -> NetworkConfig {
        NetworkConfig::new(TrainingAlgorithm::Perceptron, ActivationKind::Step, 0.1, 0.05, max_epochs)
    }

    #[test]
    fn records_one_error_per_epoch() {
        let mut net = and_gate(perceptron_step(9), vec![0.9, 0.1, 0.7]);
        train_loop(&mut net, &TrainConfig::new()).unwrap();
        assert_eq!(net.mean_squared_error_list().len(), 9);
        assert_eq!(net.epochs_completed(), 9);
    }

    #[test]
    fn history_appends_across_runs() {
        let mut net = and_gate(perceptron_step(4), vec![0.5, 0.5, 0.5]);
        train_loop(&mut net, &TrainConfig::new()).unwrap();
        train_loop(&mut net, &TrainConfig::new()).unwrap();
        assert_eq!(net.mean_squared_error_list().len(), 8);
        assert_eq!(net.epochs_completed(), 8);
    }

    #[test]
    fn last_sample_metric_squares_final_row_error() {
        // From [0.9, 0.1, 0.7] the final row is misclassified in epochs 4, 6 and 7.
        let mut net = and_gate(perceptron_step(8), vec![0.9, 0.1, 0.7]);
        train_loop(&mut net, &TrainConfig::new()).unwrap();
        assert_eq!(
            net.mean_squared_error_list(),
            &[0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0]
        );
    }

    #[test]
    fn epoch_mean_metric_averages_the_sweep() {
        let config = perceptron_step(1).with_epoch_error_metric(EpochErrorMetric::EpochMean);
        // The first three rows miss by 1.0, the last one is correct.
        let mut net = and_gate(config, vec![0.5, 0.5, 0.5]);
        train_loop(&mut net, &TrainConfig::new()).unwrap();
        let mse = net.mean_squared_error_list()[0];
        assert!((mse - 0.75).abs() < 1e-12, "mse = {mse}");
        assert_eq!(net.training_error(), 0.0);
    }

    #[test]
    fn progress_channel_receives_every_epoch() {
        let (tx, rx) = mpsc::sync_channel(8);
        let mut net = and_gate(perceptron_step(5), vec![0.5, 0.5, 0.5]);
        train_loop(&mut net, &TrainConfig::new().with_progress(tx)).unwrap();
        let stats: Vec<EpochStats> = rx.try_iter().collect();
        assert_eq!(stats.len(), 5);
        assert_eq!(stats[0].epoch, 1);
        assert_eq!(stats[4].epoch, 5);
        assert!(stats.iter().all(|s| s.total_epochs == 5));
        assert_eq!(stats[0].weight_updates, 3);
        let recorded: Vec<f64> = stats.iter().map(|s| s.mean_squared_error).collect();
        assert_eq!(recorded.as_slice(), net.mean_squared_error_list());
    }

    #[test]
    fn dropped_receiver_stops_after_first_epoch() {
        let (tx, rx) = mpsc::sync_channel(1);
        drop(rx);
        let mut net = and_gate(perceptron_step(50), vec![0.5, 0.5, 0.5]);
        train_loop(&mut net, &TrainConfig::new().with_progress(tx)).unwrap();
        assert_eq!(net.epochs_completed(), 1);
        assert_eq!(net.mean_squared_error_list().len(), 1);
    }

    #[test]
    fn raised_stop_flag_runs_no_epochs() {
        let flag = Arc::new(AtomicBool::new(true));
        let weights = vec![0.5, 0.5, 0.5];
        let mut net = and_gate(perceptron_step(50), weights.clone());
        let err = train_loop(&mut net, &TrainConfig::new().with_stop_flag(flag)).unwrap();
        assert_eq!(err, 0.0);
        assert_eq!(net.epochs_completed(), 0);
        assert!(net.mean_squared_error_list().is_empty());
        assert_eq!(net.weights(), weights.as_slice());
    }

    #[test]
    fn stop_flag_raised_by_watcher_ends_run_after_that_epoch() {
        let stop_after = 3;
        let flag = Arc::new(AtomicBool::new(false));
        // Rendezvous channel: the trainer cannot start the next epoch until
        // the watcher has taken the current stats.
        let (tx, rx) = mpsc::sync_channel::<EpochStats>(0);

        let watcher_flag = Arc::clone(&flag);
        let watcher = thread::spawn(move || {
            for _ in 1..stop_after {
                rx.recv().unwrap();
            }
            watcher_flag.store(true, Ordering::Relaxed);
            rx.recv().unwrap().epoch
        });

        let mut net = and_gate(perceptron_step(50), vec![0.5, 0.5, 0.5]);
        let config = TrainConfig::new().with_progress(tx).with_stop_flag(Arc::clone(&flag));
        train_loop(&mut net, &config).unwrap();

        assert_eq!(watcher.join().unwrap(), stop_after);
        assert_eq!(net.epochs_completed(), stop_after);
        assert_eq!(net.mean_squared_error_list().len(), stop_after);
    }

    #[test]
    fn derivative_argument_switches_only_for_corrected_logistic() {
        let base = NetworkConfig::new(TrainingAlgorithm::Adaline, ActivationKind::Logistic, 0.1, 0.0, 1);
        assert_eq!(derivative_argument(&base, 2.0, 0.88), 2.0);
        let corrected = base.clone().with_corrected_logistic_derivative(true);
        assert_eq!(derivative_argument(&corrected, 2.0, 0.88), 0.88);
        let tanh = NetworkConfig { activation_kind: ActivationKind::HyperbolicTangent, ..corrected };
        assert_eq!(derivative_argument(&tanh, 2.0, 0.96), 2.0);
    }
}
