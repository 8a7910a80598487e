use serde::{Serialize, Deserialize};

use crate::activation::ActivationKind;
use crate::error::{Error, Result};
use crate::optim::TrainingAlgorithm;

/// How the per-epoch error recorded in `mean_squared_error_list` is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EpochErrorMetric {
    /// Squared error of the last sample in the sweep.
    #[default]
    LastSample,
    /// Mean of the squared errors of every sample in the sweep.
    EpochMean,
}

/// Hyperparameters for a single-layer network.
///
/// Fields missing from a JSON file fall back to [`NetworkConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub learning_rate: f64,
    /// Samples whose absolute error is at or below this do not update weights.
    pub target_error: f64,
    pub max_epochs: usize,
    pub training_algorithm: TrainingAlgorithm,
    pub activation_kind: ActivationKind,
    pub epoch_error_metric: EpochErrorMetric,
    /// Evaluate the logistic derivative on the activation output instead of
    /// on the net value. Only affects `Adaline` with `Logistic`.
    pub corrected_logistic_derivative: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            learning_rate: 0.1,
            target_error: 0.05,
            max_epochs: 100,
            training_algorithm: TrainingAlgorithm::Perceptron,
            activation_kind: ActivationKind::Step,
            epoch_error_metric: EpochErrorMetric::LastSample,
            corrected_logistic_derivative: false,
        }
    }
}

impl NetworkConfig {
    pub fn new(
        training_algorithm: TrainingAlgorithm,
        activation_kind: ActivationKind,
        learning_rate: f64,
        target_error: f64,
        max_epochs: usize,
    ) -> Self {
        NetworkConfig {
            learning_rate,
            target_error,
            max_epochs,
            training_algorithm,
            activation_kind,
            ..NetworkConfig::default()
        }
    }

    pub fn with_epoch_error_metric(mut self, metric: EpochErrorMetric) -> Self {
        self.epoch_error_metric = metric;
        self
    }

    pub fn with_corrected_logistic_derivative(mut self, corrected: bool) -> Self {
        self.corrected_logistic_derivative = corrected;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "learning_rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        if !self.target_error.is_finite() || self.target_error < 0.0 {
            return Err(Error::InvalidInput(format!(
                "target_error must be a non-negative finite number, got {}",
                self.target_error
            )));
        }
        if self.max_epochs == 0 {
            return Err(Error::invalid("max_epochs must be at least 1"));
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reads and validates a config from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: NetworkConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        NetworkConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_bad_hyperparameters() {
        let base = NetworkConfig::default();
        for lr in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let cfg = NetworkConfig { learning_rate: lr, ..base.clone() };
            assert!(matches!(cfg.validate(), Err(Error::InvalidInput(_))), "lr = {lr}");
        }
        for te in [-0.01, f64::NAN] {
            let cfg = NetworkConfig { target_error: te, ..base.clone() };
            assert!(matches!(cfg.validate(), Err(Error::InvalidInput(_))), "te = {te}");
        }
        let cfg = NetworkConfig { max_epochs: 0, ..base.clone() };
        assert!(matches!(cfg.validate(), Err(Error::InvalidInput(_))));
        let cfg = NetworkConfig { target_error: 0.0, ..base };
        cfg.validate().unwrap();
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: NetworkConfig = serde_json::from_str(
            r#"{ "training_algorithm": "adaline", "activation_kind": "linear", "max_epochs": 7 }"#,
        ).unwrap();
        assert_eq!(cfg.training_algorithm, TrainingAlgorithm::Adaline);
        assert_eq!(cfg.activation_kind, ActivationKind::Linear);
        assert_eq!(cfg.max_epochs, 7);
        assert_eq!(cfg.learning_rate, 0.1);
        assert_eq!(cfg.epoch_error_metric, EpochErrorMetric::LastSample);
    }

    #[test]
    fn unknown_selector_in_json_is_rejected() {
        let res = serde_json::from_str::<NetworkConfig>(r#"{ "training_algorithm": "backprop" }"#);
        assert!(res.is_err());
    }

    #[test]
    fn json_file_round_trip() {
        let path = std::env::temp_dir().join(format!("ferrite-slp-config-{}.json", std::process::id()));
        let path = path.to_str().unwrap().to_owned();
        let cfg = NetworkConfig::new(TrainingAlgorithm::Adaline, ActivationKind::Logistic, 0.2, 0.01, 12)
            .with_epoch_error_metric(EpochErrorMetric::EpochMean)
            .with_corrected_logistic_derivative(true);
        cfg.save_json(&path).unwrap();
        let loaded = NetworkConfig::load_json(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn load_json_validates() {
        let path = std::env::temp_dir().join(format!("ferrite-slp-bad-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "max_epochs": 0 }"#).unwrap();
        let res = NetworkConfig::load_json(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(res, Err(Error::InvalidInput(_))));
    }
}
