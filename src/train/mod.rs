pub mod dataset;
pub mod error;
pub mod loop_fn;
pub mod run_config;
pub mod train_config;
pub mod train_stats;
pub mod trainer;

pub use dataset::{Dataset, Sample};
pub use error::RunError;
pub use loop_fn::{evaluate, train_loop};
pub use run_config::RunConfig;
pub use train_config::TrainConfig;
pub use train_stats::TrainStats;
pub use trainer::{run, run_with_rng, Prediction};
