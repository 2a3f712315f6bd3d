//! Core types for the Titanic dashboard.
//!
//! This crate provides the passenger record and the small value types it is
//! built from. Serialized field names follow the classic dataset columns
//! (`PassengerId`, `Pclass`, `SibSp`, ...) so clients can consume records
//! without a mapping layer.

use derive_more::{From, Into};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// =============================================================================
// Constants
// =============================================================================

/// Youngest age a passenger can have.
pub const MIN_AGE: u8 = 1;

/// Oldest age a passenger can have.
pub const MAX_AGE: u8 = 80;

// =============================================================================
// Identifier
// =============================================================================

/// Unique identifier for a passenger. Assigned densely from 1.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, From, Into,
)]
#[serde(transparent)]
pub struct PassengerId(pub u64);

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Passenger#{}", self.0)
    }
}

// =============================================================================
// Categorical Fields
// =============================================================================

/// Error returned when a raw value does not map to a categorical field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    #[error("invalid passenger class {0}, expected 1, 2 or 3")]
    InvalidClass(u8),
}

/// Ticket class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum PassengerClass {
    First,
    Second,
    Third,
}

impl PassengerClass {
    /// All classes in ascending order.
    pub const ALL: [PassengerClass; 3] = [Self::First, Self::Second, Self::Third];

    /// Numeric class as used in the dataset (1, 2 or 3).
    pub fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }
}

impl From<PassengerClass> for u8 {
    fn from(class: PassengerClass) -> Self {
        class.number()
    }
}

impl TryFrom<u8> for PassengerClass {
    type Error = TypeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            3 => Ok(Self::Third),
            other => Err(TypeError::InvalidClass(other)),
        }
    }
}

impl fmt::Display for PassengerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Passenger sex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// All values in reporting order.
    pub const ALL: [Sex; 2] = [Self::Male, Self::Female];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port of embarkation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Embarked {
    /// Cherbourg.
    C,
    /// Queenstown.
    Q,
    /// Southampton.
    S,
}

impl Embarked {
    pub const ALL: [Embarked; 3] = [Self::C, Self::Q, Self::S];
}

// =============================================================================
// Passenger Record
// =============================================================================

/// One row of the demonstration dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    #[serde(rename = "PassengerId")]
    pub id: PassengerId,
    #[serde(
        rename = "Survived",
        serialize_with = "bool_as_int",
        deserialize_with = "bool_from_int"
    )]
    pub survived: bool,
    #[serde(rename = "Pclass")]
    pub class: PassengerClass,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Sex")]
    pub sex: Sex,
    #[serde(rename = "Age")]
    pub age: u8,
    /// Siblings and spouses aboard.
    #[serde(rename = "SibSp")]
    pub siblings_spouses: u8,
    /// Parents and children aboard.
    #[serde(rename = "Parch")]
    pub parents_children: u8,
    #[serde(rename = "Fare")]
    pub fare: f64,
    #[serde(rename = "Embarked")]
    pub embarked: Embarked,
}

fn bool_as_int<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*value))
}

fn bool_from_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    match u8::deserialize(deserializer)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(serde::de::Error::custom(format!(
            "expected 0 or 1 for Survived, got {other}"
        ))),
    }
}
