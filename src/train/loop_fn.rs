use std::time::Instant;

use log::{debug, info, log_enabled, Level};
use rand::Rng;

use crate::train::dataset::Dataset;
use crate::train::train_config::TrainConfig;
use crate::train::train_stats::TrainStats;
use crate::unit::{Unit, UnitError};

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Calls `unit.train` `config.iterations` times, each on a sample drawn
/// uniformly at random from `dataset`, then scores the unit on the whole set.
///
/// Calls are strictly sequential: each one reads the weights left by the
/// previous call.
///
/// # Errors
/// Returns `UnitError::InvalidInputLength` as soon as a drawn sample does not
/// match `unit.input_size()`.
///
/// # Panics
/// Panics if `dataset` is empty.
pub fn train_loop<R: Rng + ?Sized>(
    unit: &mut Unit,
    dataset: &Dataset,
    config: &TrainConfig,
    rng: &mut R,
) -> Result<TrainStats, UnitError> {
    assert!(!dataset.is_empty(), "dataset must not be empty");

    let t_start = Instant::now();

    for iteration in 1..=config.iterations {
        let sample = &dataset.samples[rng.gen_range(0..dataset.len())];
        unit.train(&sample.inputs, sample.target)?;

        if config.log_every > 0
            && iteration % config.log_every == 0
            && log_enabled!(Level::Debug)
        {
            let (accuracy, mse) = evaluate(unit, dataset)?;
            debug!("iteration {iteration}/{}: accuracy = {accuracy:.3}, mse = {mse:.6}", config.iterations);
        }
    }

    let elapsed_ms = t_start.elapsed().as_millis() as u64;
    let (accuracy, mse) = evaluate(unit, dataset)?;
    info!(
        "trained {} iterations in {elapsed_ms} ms: accuracy = {accuracy:.3}, mse = {mse:.6}",
        config.iterations
    );

    Ok(TrainStats {
        iterations: config.iterations,
        accuracy,
        mse,
        elapsed_ms,
    })
}

/// Returns `(accuracy, mse)` of `unit` over every sample in `dataset`.
/// An empty dataset scores `(0.0, 0.0)`.
pub fn evaluate(unit: &Unit, dataset: &Dataset) -> Result<(f64, f64), UnitError> {
    let n = dataset.len();
    if n == 0 {
        return Ok((0.0, 0.0));
    }

    let mut correct = 0usize;
    let mut squared_error = 0.0;
    for sample in &dataset.samples {
        if unit.predict(&sample.inputs)? == sample.target {
            correct += 1;
        }
        let diff = f64::from(sample.target) - unit.output(&sample.inputs)?;
        squared_error += diff * diff;
    }

    Ok((correct as f64 / n as f64, squared_error / n as f64))
}
