use super::{models, DatabaseError};
use crate::DatabaseConnectionProvider;

use alloy_primitives::B256;
use bridge_history_primitives::{BatchRecord, WithdrawRoot};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QuerySelect};

/// The [`DatabaseOperations`] trait provides methods for interacting with the database.
#[async_trait::async_trait]
pub trait DatabaseOperations: DatabaseConnectionProvider {
    /// Insert a [`BatchRecord`] into the database.
    async fn insert_batch(&self, batch: BatchRecord) -> Result<(), DatabaseError> {
        tracing::trace!(target: "bridge::db", batch_hash = ?batch.hash, batch_index = batch.index, "Inserting batch into database.");
        let batch: models::batch::ActiveModel = batch.into();
        batch.insert(self.get_connection()).await?;
        Ok(())
    }

    /// Get a [`BatchRecord`] from the database by its batch index.
    async fn get_batch_by_index(
        &self,
        batch_index: u64,
    ) -> Result<Option<BatchRecord>, DatabaseError> {
        Ok(models::batch::Entity::find_by_id(
            TryInto::<i64>::try_into(batch_index).expect("index should fit in i64"),
        )
        .one(self.get_connection())
        .await
        .map(|x| x.map(Into::into))?)
    }

    /// Get the withdraw root recorded for the provided batch index.
    async fn get_withdraw_root_by_batch_index(
        &self,
        batch_index: u64,
    ) -> Result<Option<WithdrawRoot>, DatabaseError> {
        Ok(models::batch::Entity::find()
            .filter(models::batch::Column::Index.eq(batch_index as i64))
            .select_only()
            .column(models::batch::Column::WithdrawRoot)
            .into_tuple::<Vec<u8>>()
            .one(self.get_connection())
            .await
            .map(|x| x.map(|x| B256::from_slice(&x)))?)
    }
}

impl<T> DatabaseOperations for T where T: DatabaseConnectionProvider {}
