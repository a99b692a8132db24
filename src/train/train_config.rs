use serde::{Serialize, Deserialize};

use crate::unit::DEFAULT_BIAS;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `iterations` — number of `Unit::train` calls, each on one randomly drawn sample
/// - `bias`       — step size handed to the `Unit` built for the run
/// - `seed`       — optional RNG seed; `None` draws from the thread-local RNG
/// - `log_every`  — emit a progress line every this many iterations; `0` disables it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub iterations: usize,
    #[serde(default = "default_bias")]
    pub bias: f64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_log_every")]
    pub log_every: usize,
}

fn default_bias() -> f64 {
    DEFAULT_BIAS
}

fn default_log_every() -> usize {
    1000
}

impl TrainConfig {
    pub fn new(iterations: usize) -> Self {
        TrainConfig {
            iterations,
            bias: default_bias(),
            seed: None,
            log_every: default_log_every(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(10_000)
    }
}
