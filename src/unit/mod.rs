pub mod error;
pub mod unit;

pub use error::UnitError;
pub use unit::{Unit, DEFAULT_BIAS, LEARNING_RATE};
