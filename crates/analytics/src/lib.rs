//! Query and aggregation layer for the passenger dataset.
//!
//! Every function here is pure over a [`dataset::Dataset`] snapshot and can be
//! called concurrently without synchronization.
//!
//! # Modules
//!
//! - [`query`]: Pagination and lookup by id
//! - [`aggregate`]: Summary statistics, survival breakdowns, age histogram
//! - [`stats`]: Numeric helpers shared by the aggregations
//! - [`error`]: Validation errors for query parameters

pub mod aggregate;
pub mod error;
pub mod query;
pub mod stats;

pub use aggregate::{
    AgeBucket, ClassDistribution, ClassSurvival, GenderSurvival, Summary, age_distribution,
    summary_statistics, survival_by_class, survival_by_gender,
};
pub use error::QueryError;
pub use query::{DEFAULT_PAGE, DEFAULT_PER_PAGE, Page, PageRequest, find_by_id, paginate};

#[cfg(test)]
mod fixtures;
