use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A selector, hyperparameter or data value that cannot be used.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The operation is not defined for the given activation.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Two sizes that must agree do not.
    #[error("dimension mismatch for {what}: expected {expected}, found {found}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Error {
        Error::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = Error::DimensionMismatch { what: "weights", expected: 3, found: 2 };
        assert_eq!(
            err.to_string(),
            "dimension mismatch for weights: expected 3, found 2"
        );
        assert_eq!(Error::invalid("bad").to_string(), "invalid input: bad");
    }
}
