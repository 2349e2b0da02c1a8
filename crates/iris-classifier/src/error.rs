use std::error::Error;
use std::fmt;
use std::io;

/// Errors raised while loading data or driving the classifier lifecycle.
#[derive(Debug)]
pub enum IrisError {
    /// Test fraction outside the open interval (0, 1)
    InvalidTestFraction(f64),
    /// Feature rows and labels disagree in length
    ShapeMismatch { rows: usize, labels: usize },
    /// Feature width differs from the width the model was trained on
    FeatureMismatch { expected: usize, found: usize },
    EmptyInput,
    NonFiniteValues(usize), // Number of NaN/Inf values found
    /// Operation requires a trained model; carries the operation name
    NotTrained(&'static str),
    Fit(String),
    Io(io::Error),
    Serialization(bincode::Error),
    InvalidSnapshot(String),
}

impl fmt::Display for IrisError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IrisError::InvalidTestFraction(fraction) => write!(
                f,
                "test fraction must lie strictly between 0 and 1, got {}",
                fraction
            ),
            IrisError::ShapeMismatch { rows, labels } => write!(
                f,
                "feature matrix has {} rows but {} labels were given",
                rows, labels
            ),
            IrisError::FeatureMismatch { expected, found } => write!(
                f,
                "model expects {} features per row, got {}",
                expected, found
            ),
            IrisError::EmptyInput => write!(f, "input contains no rows"),
            IrisError::NonFiniteValues(count) => {
                write!(f, "Found {} NaN or infinite values in feature matrix", count)
            }
            IrisError::NotTrained(op) => {
                write!(f, "model must be trained before calling {}", op)
            }
            IrisError::Fit(msg) => write!(f, "failed to fit decision tree: {}", msg),
            IrisError::Io(err) => write!(f, "I/O error: {}", err),
            IrisError::Serialization(err) => write!(f, "snapshot (de)serialization failed: {}", err),
            IrisError::InvalidSnapshot(msg) => write!(f, "invalid model snapshot: {}", msg),
        }
    }
}

impl Error for IrisError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            IrisError::Io(err) => Some(err),
            IrisError::Serialization(err) => Some(&**err),
            _ => None,
        }
    }
}

impl From<io::Error> for IrisError {
    fn from(err: io::Error) -> Self {
        IrisError::Io(err)
    }
}

impl From<bincode::Error> for IrisError {
    fn from(err: bincode::Error) -> Self {
        IrisError::Serialization(err)
    }
}
