use bridge_history_primitives::BatchRecord;
use sea_orm::{entity::prelude::*, ActiveValue};

/// A database model that represents a finalized batch.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "batch")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    index: i64,
    hash: Vec<u8>,
    block_number: i64,
    withdraw_root: Vec<u8>,
}

/// The relation for the batch model.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

/// The active model behavior for the batch model.
impl ActiveModelBehavior for ActiveModel {}

impl From<BatchRecord> for ActiveModel {
    fn from(batch: BatchRecord) -> Self {
        Self {
            index: ActiveValue::Set(batch.index.try_into().expect("index should fit in i64")),
            hash: ActiveValue::Set(batch.hash.to_vec()),
            block_number: ActiveValue::Set(
                batch.block_number.try_into().expect("block number should fit in i64"),
            ),
            withdraw_root: ActiveValue::Set(batch.withdraw_root.to_vec()),
        }
    }
}

impl From<Model> for BatchRecord {
    fn from(value: Model) -> Self {
        Self {
            index: value.index as u64,
            hash: value.hash.as_slice().try_into().expect("data persisted in database is valid"),
            block_number: value.block_number as u64,
            withdraw_root: value
                .withdraw_root
                .as_slice()
                .try_into()
                .expect("data persisted in database is valid"),
        }
    }
}
