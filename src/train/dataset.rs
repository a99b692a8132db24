use serde::{Serialize, Deserialize};

/// One labeled example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub inputs: Vec<f64>,
    /// Class index, 0 or 1.
    pub target: u8,
}

impl Sample {
    pub fn new(inputs: Vec<f64>, target: u8) -> Sample {
        Sample { inputs, target }
    }
}

/// A labeled training set plus the display names of its two classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub samples: Vec<Sample>,
    /// `labels[0]` names class 0, `labels[1]` names class 1.
    pub labels: [String; 2],
}

impl Dataset {
    pub fn new(samples: Vec<Sample>, labels: [String; 2]) -> Dataset {
        Dataset { samples, labels }
    }

    /// Dog (0) vs cat (1) from five binary features:
    /// weight, height, pointed ears, whiskers, vertical pupil.
    pub fn pets() -> Dataset {
        let rows: [([f64; 5], u8); 7] = [
            ([1.0, 1.0, 1.0, 0.0, 0.0], 0),
            ([1.0, 0.0, 0.0, 0.0, 0.0], 0),
            ([0.0, 0.0, 0.0, 0.0, 0.0], 0),
            ([1.0, 0.0, 0.0, 1.0, 1.0], 1),
            ([1.0, 1.0, 1.0, 1.0, 1.0], 1),
            ([0.0, 0.0, 0.0, 1.0, 1.0], 1),
            ([0.0, 0.0, 0.0, 0.0, 1.0], 1),
        ];
        Dataset::new(
            rows.iter().map(|(x, t)| Sample::new(x.to_vec(), *t)).collect(),
            ["Cão".to_string(), "Gato".to_string()],
        )
    }

    /// Logical OR over two binary inputs.
    pub fn or_gate() -> Dataset {
        Dataset::new(
            vec![
                Sample::new(vec![0.0, 0.0], 0),
                Sample::new(vec![1.0, 0.0], 1),
                Sample::new(vec![0.0, 1.0], 1),
                Sample::new(vec![1.0, 1.0], 1),
            ],
            ["0".to_string(), "1".to_string()],
        )
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Width of the first sample; 0 for an empty set.
    pub fn input_size(&self) -> usize {
        self.samples.first().map_or(0, |s| s.inputs.len())
    }

    /// Display label for a class index. Anything above 1 maps to class 1.
    pub fn label(&self, class: u8) -> &str {
        &self.labels[usize::from(class.min(1))]
    }

    /// Checks the set is non-empty, rectangular, and binary-labeled.
    pub fn validate(&self) -> Result<(), String> {
        let width = self.input_size();
        if width == 0 {
            return Err("dataset must contain at least one sample with inputs".to_string());
        }
        for (i, sample) in self.samples.iter().enumerate() {
            if sample.inputs.len() != width {
                return Err(format!(
                    "sample {i} has {} inputs, expected {width}",
                    sample.inputs.len()
                ));
            }
            if sample.target > 1 {
                return Err(format!("sample {i} has target {}, expected 0 or 1", sample.target));
            }
        }
        Ok(())
    }
}
