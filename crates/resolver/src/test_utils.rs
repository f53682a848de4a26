//! Test utils for the resolver.

use crate::{BatchProvider, BatchResolverError};
use std::collections::HashMap;

use bridge_history_primitives::BatchRecord;

/// Implementation of [`BatchProvider`] backed by an in-memory map of records.
#[derive(Clone, Default, Debug)]
pub struct MockBatchProvider {
    /// Batch records keyed by batch index.
    pub batches: HashMap<u64, BatchRecord>,
    /// When set, lookups fail as if the store was unreachable.
    pub unavailable: bool,
}

impl MockBatchProvider {
    /// Returns a provider serving the provided records.
    pub fn with_batches(batches: impl IntoIterator<Item = BatchRecord>) -> Self {
        Self {
            batches: batches.into_iter().map(|batch| (batch.index, batch)).collect(),
            unavailable: false,
        }
    }
}

#[async_trait::async_trait]
impl BatchProvider for MockBatchProvider {
    type Error = BatchResolverError;

    async fn batch_by_index(&self, batch_index: u64) -> Result<Option<BatchRecord>, Self::Error> {
        if self.unavailable {
            return Err(BatchResolverError::Other("store unavailable"));
        }
        Ok(self.batches.get(&batch_index).cloned())
    }
}
