use std::fmt;

/// Errors raised by `Unit` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    /// The input vector does not have one value per input weight.
    InvalidInputLength { expected: usize, actual: usize },
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInputLength { expected, actual } => {
                write!(f, "invalid input length: expected {expected} values, got {actual}")
            }
        }
    }
}

impl std::error::Error for UnitError {}
