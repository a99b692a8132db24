use serde::{Serialize, Deserialize};

/// Summary of a completed `train_loop` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainStats {
    /// Number of `Unit::train` calls performed.
    pub iterations: usize,
    /// Fraction of dataset samples whose `predict` matches the target.
    pub accuracy: f64,
    /// Mean squared error of `output` against the targets.
    pub mse: f64,
    /// Wall-clock duration of the loop in milliseconds.
    pub elapsed_ms: u64,
}
