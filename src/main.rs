//! Trains a single-layer network and prints how it answers its training set.
//!
//! Usage:
//!   ferrite-slp [config.json] [dataset.json | and | or]
//!
//! Without arguments the built-in Perceptron/Step config is trained on the
//! AND gate. Set `RUST_LOG=debug` to see per-epoch progress.

use ferrite_slp::{evaluate, render_report, train, Dataset, NetworkConfig, NeuralNet};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> ferrite_slp::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match args.first() {
        Some(path) => {
            info!(path = %path, "loading config");
            NetworkConfig::load_json(path)?
        }
        None => NetworkConfig {
            max_epochs: 50,
            ..NetworkConfig::default()
        },
    };

    let dataset = match args.get(1).map(String::as_str) {
        None => Dataset::and_gate(),
        Some(name @ ("and" | "or")) => Dataset::builtin(name)?,
        Some(path) => {
            info!(path = %path, "loading dataset");
            Dataset::load_json(path)?
        }
    };

    let (samples, targets) = dataset.into_parts()?;
    let mut network = NeuralNet::with_random_weights(config, samples, targets, &mut rand::thread_rng())?;

    let training_error = train(&mut network)?;

    print!("{}", render_report(&evaluate(&network)?));
    println!("WEIGHTS: {:?}", network.weights());
    println!(
        "EPOCHS: {}\tTRAINING ERROR: {:.6}",
        network.epochs_completed(),
        training_error
    );
    Ok(())
}
