use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Activation applied to a neuron's net value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationKind {
    /// 1.0 for x >= 0, otherwise 0.0. Has no derivative.
    Step,
    Linear,
    /// Sigmoid: 1 / (1 + e^-x)
    Logistic,
    HyperbolicTangent,
}

impl ActivationKind {
    pub const ALL: [ActivationKind; 4] = [
        ActivationKind::Step,
        ActivationKind::Linear,
        ActivationKind::Logistic,
        ActivationKind::HyperbolicTangent,
    ];

    pub fn activate(self, x: f64) -> Result<f64> {
        let y = match self {
            ActivationKind::Step => if x >= 0.0 { 1.0 } else { 0.0 },
            ActivationKind::Linear => x,
            ActivationKind::Logistic => 1.0 / (1.0 + (-x).exp()),
            ActivationKind::HyperbolicTangent => x.tanh(),
        };
        Ok(y)
    }

    /// Derivative evaluated on the value passed in.
    ///
    /// For `Logistic` this is `x * (1 - x)`, which is the true derivative only
    /// when `x` is already the logistic output. Callers decide what to pass.
    pub fn derivative(self, x: f64) -> Result<f64> {
        match self {
            ActivationKind::Step => Err(Error::UnsupportedOperation(
                "step activation has no derivative".to_owned(),
            )),
            ActivationKind::Linear => Ok(1.0),
            ActivationKind::Logistic => Ok(x * (1.0 - x)),
            ActivationKind::HyperbolicTangent => Ok(1.0 / x.cosh().powi(2)),
        }
    }

    pub fn is_differentiable(self) -> bool {
        self != ActivationKind::Step
    }

    pub fn name(self) -> &'static str {
        match self {
            ActivationKind::Step => "step",
            ActivationKind::Linear => "linear",
            ActivationKind::Logistic => "logistic",
            ActivationKind::HyperbolicTangent => "hyperbolic_tangent",
        }
    }
}

/// `activate(kind, x)`; same as [`ActivationKind::activate`].
pub fn activate(kind: ActivationKind, x: f64) -> Result<f64> {
    kind.activate(x)
}

/// `derivative(kind, x)`; same as [`ActivationKind::derivative`].
pub fn derivative(kind: ActivationKind, x: f64) -> Result<f64> {
    kind.derivative(x)
}

impl fmt::Display for ActivationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivationKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "step" => Ok(ActivationKind::Step),
            "linear" => Ok(ActivationKind::Linear),
            "logistic" | "siglog" | "sigmoid" => Ok(ActivationKind::Logistic),
            "hyperbolic_tangent" | "hypertan" | "tanh" => Ok(ActivationKind::HyperbolicTangent),
            other => Err(Error::InvalidInput(format!("unknown activation kind `{other}`"))),
        }
    }
}
