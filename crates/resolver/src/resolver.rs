use crate::{metrics::ResolverMetrics, BatchProvider, BatchResolverError};

use bridge_history_primitives::WithdrawRoot;
use std::{
    fmt::{self, Debug, Formatter},
    time::Instant,
};

/// Resolves withdraw roots for settled batches via an injected [`BatchProvider`].
///
/// The resolver is a stateless read path: every call is an independent lookup
/// against the provider, and repeated calls for the same index return the same
/// root once the record exists. It holds no shared mutable state and is safe
/// for unlimited concurrent use.
pub struct BatchResolver<P> {
    /// The batch provider.
    provider: P,
    /// The metrics of the resolver.
    metrics: ResolverMetrics,
}

impl<P> BatchResolver<P> {
    /// Returns a new [`BatchResolver`] over the provided [`BatchProvider`].
    pub fn new(provider: P) -> Self {
        Self { provider, metrics: ResolverMetrics::default() }
    }
}

impl<P: BatchProvider + Sync> BatchResolver<P> {
    /// Resolves the withdraw root for the provided batch index.
    ///
    /// Returns `Ok(None)` when no batch has been indexed at `batch_index`,
    /// which is a normal negative result. A failure to reach the store is
    /// surfaced as an error and never coerced into `Ok(None)`.
    pub async fn resolve(
        &self,
        batch_index: u64,
    ) -> Result<Option<WithdrawRoot>, BatchResolverError> {
        let start = Instant::now();
        let withdraw_root =
            self.provider.withdraw_root_by_index(batch_index).await.map_err(Into::into)?;
        self.metrics.resolve_duration.record(start.elapsed().as_millis() as f64);

        if let Some(root) = &withdraw_root {
            tracing::trace!(target: "bridge::resolver", batch_index, withdraw_root = ?root, "Resolved withdraw root for batch.");
        } else {
            tracing::trace!(target: "bridge::resolver", batch_index, "No batch indexed at the provided index.");
        }
        Ok(withdraw_root)
    }
}

impl<P: Debug> Debug for BatchResolver<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchResolver").field("provider", &self.provider).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{test_utils::MockBatchProvider, DatabaseBatchProvider};

    use alloy_primitives::B256;
    use arbitrary::{Arbitrary, Unstructured};
    use bridge_history_db::{test_utils::setup_test_db, DatabaseOperations};
    use bridge_history_primitives::BatchRecord;
    use rand::Rng;
    use std::sync::Arc;

    fn record(index: u64, withdraw_root: B256) -> BatchRecord {
        BatchRecord::new(index, B256::repeat_byte(0x42), index * 10, withdraw_root)
    }

    #[tokio::test]
    async fn test_resolve_returns_withdraw_root() {
        let withdraw_root = B256::repeat_byte(0xab);
        let provider = MockBatchProvider::with_batches([record(100, withdraw_root)]);
        let resolver = BatchResolver::new(provider);

        assert_eq!(resolver.resolve(100).await.unwrap(), Some(withdraw_root));

        // Repeated calls return the same root.
        assert_eq!(resolver.resolve(100).await.unwrap(), Some(withdraw_root));
    }

    #[tokio::test]
    async fn test_resolve_missing_batch_returns_none() {
        let provider = MockBatchProvider::with_batches([record(100, B256::repeat_byte(0xab))]);
        let resolver = BatchResolver::new(provider);

        assert_eq!(resolver.resolve(101).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_resolve_unavailable_store_errors() {
        let mut provider = MockBatchProvider::with_batches([record(100, B256::repeat_byte(0xab))]);
        provider.unavailable = true;
        let resolver = BatchResolver::new(provider);

        // A store failure must not be misreported as a missing batch.
        assert!(resolver.resolve(100).await.is_err());
    }

    #[tokio::test]
    async fn test_resolve_database_backed() {
        // Set up the test database.
        let db = Arc::new(setup_test_db().await);

        // Generate unstructured bytes.
        let mut bytes = [0u8; 1024];
        rand::rng().fill(bytes.as_mut_slice());
        let mut u = Unstructured::new(&bytes);

        // Insert a random BatchRecord.
        let batch = BatchRecord::arbitrary(&mut u).unwrap();
        db.insert_batch(batch.clone()).await.unwrap();

        // Resolve the withdraw root via the database-backed provider.
        let resolver = BatchResolver::new(DatabaseBatchProvider::new(db));
        assert_eq!(resolver.resolve(batch.index).await.unwrap(), Some(batch.withdraw_root));
        assert_eq!(resolver.resolve(batch.index.wrapping_add(1)).await.unwrap(), None);
    }
}
