use serde::{Serialize, Deserialize};

use crate::activation::activation::Activation;
use crate::train::dataset::Dataset;
use crate::train::train_config::TrainConfig;

/// Everything the driver needs: what to learn, how long, and what to ask
/// afterwards.
///
/// Stored as JSON so runs can be described without recompiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub dataset: Dataset,
    #[serde(default)]
    pub train: TrainConfig,
    /// Input vectors classified after training.
    #[serde(default)]
    pub queries: Vec<Vec<f64>>,
    /// Activation each query's score is read through.
    #[serde(default)]
    pub activation: Activation,
}

impl Default for RunConfig {
    /// The dog/cat run: 10,000 iterations, then three queries.
    fn default() -> Self {
        RunConfig {
            dataset: Dataset::pets(),
            train: TrainConfig::new(10_000),
            queries: vec![
                vec![0.0, 0.0, 1.0, 0.0, 0.0],
                vec![1.0, 1.0, 0.0, 0.0, 0.0],
                vec![1.0, 1.0, 1.0, 1.0, 1.0],
            ],
            activation: Activation::Step,
        }
    }
}

impl RunConfig {
    /// Serializes the configuration to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Checks the dataset and that every query is as wide as its samples.
    pub fn validate(&self) -> Result<(), String> {
        self.dataset.validate()?;
        let width = self.dataset.input_size();
        for (i, query) in self.queries.iter().enumerate() {
            if query.len() != width {
                return Err(format!("query {i} has {} inputs, expected {width}", query.len()));
            }
        }
        Ok(())
    }

    /// Deserializes a `RunConfig` from a JSON file and validates it.
    pub fn load_json(path: &str) -> std::io::Result<RunConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: RunConfig = serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        config.validate()
            .map_err(|msg| std::io::Error::new(std::io::ErrorKind::InvalidData, msg))?;
        Ok(config)
    }
}
