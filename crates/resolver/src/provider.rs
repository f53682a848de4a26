use crate::BatchResolverError;

use bridge_history_db::{DatabaseConnectionProvider, DatabaseError, DatabaseOperations};
use bridge_history_primitives::{BatchRecord, WithdrawRoot};

/// An instance of the trait can provide settled batch records by batch index.
#[async_trait::async_trait]
#[auto_impl::auto_impl(&, Arc)]
pub trait BatchProvider {
    /// The error type for the provider.
    type Error: Into<BatchResolverError>;

    /// Returns the batch record for the provided batch index, or `None` if the
    /// batch has not been indexed.
    async fn batch_by_index(&self, batch_index: u64) -> Result<Option<BatchRecord>, Self::Error>;

    /// Returns the withdraw root recorded for the provided batch index.
    async fn withdraw_root_by_index(
        &self,
        batch_index: u64,
    ) -> Result<Option<WithdrawRoot>, Self::Error> {
        let batch = self.batch_by_index(batch_index).await?;
        Ok(batch.map(|batch| batch.withdraw_root))
    }
}

/// Implements [`BatchProvider`] via a database connection.
#[derive(Debug, Clone)]
pub struct DatabaseBatchProvider<DB> {
    /// A connection to the database.
    database_connection: DB,
}

impl<DB> DatabaseBatchProvider<DB> {
    /// Returns a new instance of the [`DatabaseBatchProvider`].
    pub const fn new(db: DB) -> Self {
        Self { database_connection: db }
    }
}

#[async_trait::async_trait]
impl<DB: DatabaseConnectionProvider + Send + Sync> BatchProvider for DatabaseBatchProvider<DB> {
    type Error = DatabaseError;

    async fn batch_by_index(
        &self,
        batch_index: u64,
    ) -> Result<Option<BatchRecord>, Self::Error> {
        self.database_connection.get_batch_by_index(batch_index).await
    }

    /// Fetches the withdraw root via a single-column projection, skipping the
    /// rest of the batch record.
    async fn withdraw_root_by_index(
        &self,
        batch_index: u64,
    ) -> Result<Option<WithdrawRoot>, Self::Error> {
        self.database_connection.get_withdraw_root_by_batch_index(batch_index).await
    }
}
