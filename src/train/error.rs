use std::fmt;

use crate::unit::UnitError;

/// Errors that stop a `run` before or during training.
#[derive(Debug, Clone, PartialEq)]
pub enum RunError {
    /// The dataset or queries are unusable; caught before any unit is built.
    InvalidConfig(String),
    /// A `Unit` operation rejected its input.
    Unit(UnitError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Unit(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unit(e) => Some(e),
            _ => None,
        }
    }
}

impl From<UnitError> for RunError {
    fn from(e: UnitError) -> Self {
        Self::Unit(e)
    }
}
