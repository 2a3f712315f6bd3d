//! Passenger dataset store for the Titanic dashboard.
//!
//! This crate provides:
//! - **Generator**: Seeded synthetic generation of schema-valid passenger records
//! - **Store**: [`Dataset`], an immutable snapshot shared by every request handler
//!
//! The dataset is built exactly once at startup. Any invariant violation is
//! reported as a [`DatasetError`] so the process can refuse to start instead of
//! serving a partial table.
//!
//! # Usage
//!
//! ```ignore
//! use dataset::{DatasetConfig, generate};
//!
//! let dataset = generate(&DatasetConfig::default().with_seed(42))?;
//! assert_eq!(dataset.len(), 891);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod store;

pub use config::DatasetConfig;
pub use error::{DatasetError, Result};
pub use generator::generate;
pub use store::Dataset;
