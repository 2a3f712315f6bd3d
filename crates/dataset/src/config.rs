//! Configuration for dataset generation.

/// Number of rows in the classic passenger manifest.
pub const DEFAULT_SIZE: usize = 891;

/// Controls how the synthetic dataset is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetConfig {
    /// Number of passenger records to generate.
    pub size: usize,
    /// Random seed. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Probability that a generated passenger survived.
    pub survival_probability: f64,
    /// Fare range in the dataset's currency, half-open.
    pub fare_range: (f64, f64),
    /// Inclusive upper bound for siblings/spouses aboard.
    pub max_siblings_spouses: u8,
    /// Inclusive upper bound for parents/children aboard.
    pub max_parents_children: u8,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            seed: None,
            survival_probability: 0.38,
            fare_range: (5.0, 500.0),
            max_siblings_spouses: 4,
            max_parents_children: 3,
        }
    }
}

impl DatasetConfig {
    /// Set the number of records.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set a fixed seed for reproducible datasets.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
