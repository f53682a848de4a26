use sea_orm_migration::{prelude::*, schema::*};

const HASH_LENGTH: u32 = 32;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Batch::Table)
                    .if_not_exists()
                    .col(big_integer(Batch::Index).primary_key())
                    .col(binary_len(Batch::Hash, HASH_LENGTH))
                    .col(big_unsigned(Batch::BlockNumber))
                    .col(binary_len(Batch::WithdrawRoot, HASH_LENGTH))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Batch::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Batch {
    Table,
    Index,
    Hash,
    BlockNumber,
    WithdrawRoot,
}
