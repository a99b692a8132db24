pub mod activation;
pub mod unit;
pub mod train;

// Convenience re-exports
pub use activation::activation::Activation;
pub use unit::unit::Unit;
pub use unit::error::UnitError;
pub use train::dataset::{Dataset, Sample};
pub use train::error::RunError;
pub use train::train_config::TrainConfig;
pub use train::run_config::RunConfig;
pub use train::loop_fn::train_loop;
