//! Immutable passenger snapshot.
//!
//! [`Dataset`] wraps the records in an `Arc<[Passenger]>` so cloning it into
//! handler state is a reference-count bump. There is no mutating API.

use std::sync::Arc;

use types::{MAX_AGE, MIN_AGE, Passenger, PassengerId};

use crate::error::{DatasetError, Result};

/// The passenger table as it exists for the life of the process.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[Passenger]>,
}

impl Dataset {
    /// Build a snapshot from explicit records, validating every invariant.
    ///
    /// Records must be non-empty, carry ids `1..=N` in order, ages within
    /// `MIN_AGE..=MAX_AGE` and finite non-negative fares.
    pub fn from_records(records: Vec<Passenger>) -> Result<Self> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        for (idx, record) in records.iter().enumerate() {
            let expected = idx as u64 + 1;
            if record.id != PassengerId(expected) {
                return Err(DatasetError::NonDenseId {
                    expected,
                    found: record.id,
                });
            }
            if !(MIN_AGE..=MAX_AGE).contains(&record.age) {
                return Err(DatasetError::InvalidAge {
                    id: record.id,
                    age: record.age,
                    min: MIN_AGE,
                    max: MAX_AGE,
                });
            }
            if !record.fare.is_finite() || record.fare < 0.0 {
                return Err(DatasetError::InvalidFare {
                    id: record.id,
                    fare: record.fare,
                });
            }
        }

        Ok(Self {
            records: records.into(),
        })
    }

    /// All records in id order.
    pub fn records(&self) -> &[Passenger] {
        &self.records
    }

    /// Iterate over records in id order.
    pub fn iter(&self) -> std::slice::Iter<'_, Passenger> {
        self.records.iter()
    }

    /// Number of records. Never zero.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed dataset; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id in O(1).
    pub fn get(&self, id: PassengerId) -> Option<&Passenger> {
        let idx = usize::try_from(u64::from(id).checked_sub(1)?).ok()?;
        self.records.get(idx)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Passenger;
    type IntoIter = std::slice::Iter<'a, Passenger>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
