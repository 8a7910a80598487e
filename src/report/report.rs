use std::fmt;

use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::network::network::NeuralNet;

/// How a trained network answers one training sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleReport {
    pub features: Vec<f64>,
    pub net_output: f64,
    pub real_output: f64,
    /// `net_output - real_output`
    pub error: f64,
}

/// Runs every training sample through the current weights.
pub fn evaluate(network: &NeuralNet) -> Result<Vec<SampleReport>> {
    network.training_set()
        .iter_rows()
        .zip(network.target_output_set())
        .map(|(sample, &real_output)| -> Result<SampleReport> {
            let net_output = network.predict(sample)?;
            Ok(SampleReport {
                features: sample.to_vec(),
                net_output,
                real_output,
                error: net_output - real_output,
            })
        })
        .collect()
}

/// Multi-line text dump of `evaluate`, one block per sample.
pub fn render_report(reports: &[SampleReport]) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str(&report.to_string());
        out.push('\n');
        out.push_str("------------------------------------\n");
    }
    out
}

impl fmt::Display for SampleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let features: Vec<String> = self.features.iter().map(|x| x.to_string()).collect();
        writeln!(f, "INPUT: [{}]", features.join(", "))?;
        write!(
            f,
            "NET OUTPUT: {:.6}\tREAL OUTPUT: {:.6}\tERROR: {:.6}",
            self.net_output, self.real_output, self.error
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::matrix::Matrix;
    use crate::network::config::NetworkConfig;

    #[test]
    fn evaluate_reports_each_row() {
        let samples = Matrix::from_rows(vec![vec![1.0, 0.0], vec![1.0, 1.0]]).unwrap();
        let net = NeuralNet::new(NetworkConfig::default(), samples, vec![1.0, 1.0], vec![-0.5, 1.0]).unwrap();
        let reports = evaluate(&net).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].net_output, 0.0);
        assert_eq!(reports[0].error, -1.0);
        assert_eq!(reports[1].net_output, 1.0);
        assert_eq!(reports[1].error, 0.0);
        assert_eq!(reports[1].features, vec![1.0, 1.0]);
    }

    #[test]
    fn render_has_a_block_per_sample() {
        let report = SampleReport { features: vec![1.0, 0.5], net_output: 0.25, real_output: 1.0, error: -0.75 };
        let text = render_report(&[report.clone(), report]);
        assert_eq!(text.matches("NET OUTPUT: 0.250000").count(), 2);
        assert!(text.starts_with("INPUT: [1, 0.5]\n"));
        assert!(text.contains("ERROR: -0.750000"));
    }
}
