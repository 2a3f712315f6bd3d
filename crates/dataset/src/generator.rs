//! Synthetic passenger generation.
//!
//! Draws schema-valid records from a seeded [`StdRng`] so the same seed always
//! yields the same dataset. Distributions follow the demonstration manifest:
//! survival is Bernoulli(0.38), categorical fields are uniform, fares are
//! uniform over the configured range.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use types::{Embarked, MAX_AGE, MIN_AGE, Passenger, PassengerClass, PassengerId, Sex};

use crate::config::DatasetConfig;
use crate::error::{DatasetError, Result};
use crate::store::Dataset;

/// Generate a dataset according to `config`.
///
/// Fails if the configuration cannot produce a valid, non-empty table.
pub fn generate(config: &DatasetConfig) -> Result<Dataset> {
    validate(config)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let records = (1..=config.size as u64)
        .map(|id| draw_passenger(&mut rng, config, id.into()))
        .collect();

    let dataset = Dataset::from_records(records)?;
    debug!(size = dataset.len(), seed = ?config.seed, "generated passenger dataset");
    Ok(dataset)
}

fn validate(config: &DatasetConfig) -> Result<()> {
    if config.size == 0 {
        return Err(DatasetError::Empty);
    }
    if !(0.0..=1.0).contains(&config.survival_probability) {
        return Err(DatasetError::InvalidConfig(format!(
            "survival probability {} outside [0, 1]",
            config.survival_probability
        )));
    }
    let (lo, hi) = config.fare_range;
    if !lo.is_finite() || !hi.is_finite() || lo < 0.0 || lo >= hi {
        return Err(DatasetError::InvalidConfig(format!(
            "fare range [{lo}, {hi}) is empty or negative"
        )));
    }
    Ok(())
}

fn draw_passenger(rng: &mut StdRng, config: &DatasetConfig, id: PassengerId) -> Passenger {
    let (fare_lo, fare_hi) = config.fare_range;

    Passenger {
        id,
        survived: rng.random_bool(config.survival_probability),
        class: PassengerClass::ALL[rng.random_range(0..PassengerClass::ALL.len())],
        name: format!("Passenger {}", id.0),
        sex: Sex::ALL[rng.random_range(0..Sex::ALL.len())],
        age: rng.random_range(MIN_AGE..=MAX_AGE),
        siblings_spouses: rng.random_range(0..=config.max_siblings_spouses),
        parents_children: rng.random_range(0..=config.max_parents_children),
        fare: rng.random_range(fare_lo..fare_hi),
        embarked: Embarked::ALL[rng.random_range(0..Embarked::ALL.len())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_size() {
        let dataset = generate(&DatasetConfig::default().with_seed(1)).unwrap();
        assert_eq!(dataset.len(), 891);
    }

    #[test]
    fn test_generate_is_deterministic_for_seed() {
        let config = DatasetConfig::default().with_size(50).with_seed(42);
        let a = generate(&config).unwrap();
        let b = generate(&config).unwrap();
        assert_eq!(a.records(), b.records());
    }

    #[test]
    fn test_generated_records_respect_schema() {
        let config = DatasetConfig::default().with_size(2000).with_seed(9);
        let dataset = generate(&config).unwrap();

        for (idx, p) in dataset.iter().enumerate() {
            assert_eq!(p.id, PassengerId(idx as u64 + 1));
            assert!((MIN_AGE..=MAX_AGE).contains(&p.age));
            assert!(p.siblings_spouses <= 4);
            assert!(p.parents_children <= 3);
            assert!((5.0..500.0).contains(&p.fare));
            assert_eq!(p.name, format!("Passenger {}", idx + 1));
        }
    }

    #[test]
    fn test_generated_survival_rate_is_plausible() {
        let dataset = generate(&DatasetConfig::default().with_size(5000).with_seed(3)).unwrap();
        let survived = dataset.iter().filter(|p| p.survived).count() as f64;
        let rate = survived / dataset.len() as f64;
        assert!((0.33..0.43).contains(&rate), "rate was {rate}");
    }

    #[test]
    fn test_generate_rejects_zero_size() {
        let err = generate(&DatasetConfig::default().with_size(0)).unwrap_err();
        assert_eq!(err, DatasetError::Empty);
    }

    #[test]
    fn test_generate_rejects_bad_fare_range() {
        let config = DatasetConfig {
            fare_range: (10.0, 10.0),
            ..DatasetConfig::default()
        };
        assert!(matches!(
            generate(&config),
            Err(DatasetError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_generate_rejects_bad_probability() {
        let config = DatasetConfig {
            survival_probability: 1.5,
            ..DatasetConfig::default()
        };
        assert!(generate(&config).is_err());
    }
}
