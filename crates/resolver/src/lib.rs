//! Resolves the withdraw root committed for a rollup batch from an indexed
//! store of settled batches.

pub use error::BatchResolverError;
mod error;

pub use provider::{BatchProvider, DatabaseBatchProvider};
mod provider;

pub use resolver::BatchResolver;
mod resolver;

mod metrics;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
