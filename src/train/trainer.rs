use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::train::error::RunError;
use crate::train::loop_fn::train_loop;
use crate::train::run_config::RunConfig;
use crate::train::train_stats::TrainStats;
use crate::unit::{Unit, UnitError};

/// A query vector and what the trained unit made of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub inputs: Vec<f64>,
    pub class: u8,
    /// The weighted sum read through `RunConfig::activation`.
    pub score: f64,
    pub label: String,
}

/// Builds a fresh `Unit` sized to the dataset, trains it, and answers every
/// query in `config`.
///
/// The same RNG drives weight initialization and sampling, so a seeded run is
/// reproducible end to end.
///
/// # Errors
/// Returns `RunError::InvalidConfig` before training if the dataset is empty,
/// ragged, or not binary-labeled, or if a query does not match its width.
pub fn run(config: &RunConfig) -> Result<(Unit, TrainStats, Vec<Prediction>), RunError> {
    match config.train.seed {
        Some(seed) => run_with_rng(config, &mut StdRng::seed_from_u64(seed)),
        None => run_with_rng(config, &mut rand::thread_rng()),
    }
}

pub fn run_with_rng<R: Rng + ?Sized>(
    config: &RunConfig,
    rng: &mut R,
) -> Result<(Unit, TrainStats, Vec<Prediction>), RunError> {
    config.validate().map_err(RunError::InvalidConfig)?;

    let dataset = &config.dataset;
    info!(
        "training unit on {} samples of {} inputs",
        dataset.len(),
        dataset.input_size()
    );

    let mut unit = Unit::with_rng(dataset.input_size(), config.train.bias, rng);
    let stats = train_loop(&mut unit, dataset, &config.train, rng)?;

    let predictions = config.queries.iter()
        .map(|inputs| -> Result<Prediction, UnitError> {
            let class = unit.predict(inputs)?;
            Ok(Prediction {
                inputs: inputs.clone(),
                class,
                score: unit.classify(inputs, config.activation)?,
                label: dataset.label(class).to_string(),
            })
        })
        .collect::<Result<Vec<_>, UnitError>>()?;

    Ok((unit, stats, predictions))
}
