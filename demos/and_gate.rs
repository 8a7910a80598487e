use std::sync::mpsc;
use std::thread;

use tracing_subscriber::EnvFilter;

use ferrite_slp::{
    evaluate, train_loop, ActivationKind, Dataset, EpochStats, NetworkConfig, NeuralNet,
    TrainConfig, TrainingAlgorithm,
};

fn main() -> ferrite_slp::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let runs = [
        ("perceptron/step", TrainingAlgorithm::Perceptron, ActivationKind::Step),
        ("adaline/linear", TrainingAlgorithm::Adaline, ActivationKind::Linear),
    ];

    for (label, algorithm, activation) in runs {
        let (samples, targets) = Dataset::and_gate().into_parts()?;
        let config = NetworkConfig::new(algorithm, activation, 0.1, 0.05, 40);
        let mut network = NeuralNet::with_random_weights(config, samples, targets, &mut rand::thread_rng())?;

        let (tx, rx) = mpsc::sync_channel::<EpochStats>(16);
        let printer = thread::spawn(move || {
            for stats in rx {
                if stats.epoch % 10 == 0 || stats.weight_updates == 0 {
                    println!(
                        "[{label}] epoch {}/{}: mse = {:.6}, updates = {}",
                        stats.epoch, stats.total_epochs, stats.mean_squared_error, stats.weight_updates
                    );
                }
            }
        });

        train_loop(&mut network, &TrainConfig::new().with_progress(tx))?;
        printer.join().expect("progress printer thread panicked");

        for report in evaluate(&network)? {
            println!("[{label}] {:?} -> {:.4} (target {})", report.features, report.net_output, report.real_output);
        }
        println!("[{label}] weights = {:?}", network.weights());
    }

    Ok(())
}
